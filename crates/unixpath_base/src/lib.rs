/* 📖 # Why have unixpath_base as a core library?
unixpath_base holds the path buffer together with the error handling and tracing setup
shared by the script and CLI crates, so the leaf type never depends on its drivers.
*/

pub mod error;
mod error_tests;
pub mod path;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ResultExt, UnixPathError, UnixPathResult};
pub use path::{SEPARATOR, UnixPath};
