/* 📖 # Why collapse a path into one string buffer?

A stack of segment tokens would allow per-segment introspection, but every consumer
of a path wants one contiguous string to hand to the filesystem. UnixPath keeps
exactly that string and maintains the trailing separator as it is edited, so
pushing and popping segments never needs to re-join anything.
*/

mod unix_path;

pub use unix_path::{SEPARATOR, UnixPath};
