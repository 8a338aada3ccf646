use std::fmt;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;
use tracing::trace;

use crate::error::{ErrorKind, UnixPathError};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// A unix-style path string which can be modified in place.
///
/// - Maintains a path ending in a separator, unless it is empty or a filename
///   was pushed last.
/// - Pushes and pops file or directory names at the end of the path, like a
///   stack of segments collapsed into one buffer.
///
/// # Examples
///
/// ```
/// use unixpath_base::UnixPath;
///
/// let mut path = UnixPath::new("home");
/// path.push("user").push_filename("file.txt");
/// assert_eq!(path.as_str(), "home/user/file.txt");
///
/// path.pop();
/// assert_eq!(path.as_str(), "home/user/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnixPath {
    text: String,
}

impl UnixPath {
    /// Creates a path rooted at the directory `root`.
    ///
    /// A separator is appended when `root` is non-empty and does not already end
    /// in one. An empty root gives an empty path.
    pub fn new(root: impl AsRef<str>) -> Self {
        let mut path = Self {
            text: root.as_ref().to_owned(),
        };
        path.check_separator();
        path
    }

    fn check_separator(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(SEPARATOR) {
            self.text.push(SEPARATOR);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The current path text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the path currently names a directory, i.e. ends in `/`.
    pub fn ends_with_separator(&self) -> bool {
        self.text.ends_with(SEPARATOR)
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Appends the directory `name`, keeping exactly one trailing separator.
    pub fn push(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.text.push_str(name.as_ref());
        self.check_separator();
        self
    }

    /// Appends the directory spelled by `chars`.
    ///
    /// This is the range form of [`UnixPath::push`]: pushing the characters of
    /// `"maps"` gives the same path as pushing `"maps"`.
    pub fn push_range<I>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        self.text.extend(chars);
        self.check_separator();
        self
    }

    /// Appends the filename `name` verbatim, without a trailing separator.
    pub fn push_filename(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.text.push_str(name.as_ref());
        self
    }

    /// Removes the last directory or filename appended.
    ///
    /// Afterwards the path ends in a separator again, or is empty. Popping an
    /// empty path does nothing.
    pub fn pop(&mut self) {
        if self.text.is_empty() {
            trace!("pop on empty path");
            return;
        }
        if self.text.ends_with(SEPARATOR) {
            self.text.pop();
        }
        while let Some(last) = self.text.chars().next_back() {
            if last == SEPARATOR {
                break;
            }
            self.text.pop();
        }
    }

    /// Views the path as a platform independent relative path.
    pub fn as_relative_path(&self) -> &RelativePath {
        RelativePath::new(&self.text)
    }

    /// Resolves the path against `base` using the platform's separators.
    pub fn to_path(&self, base: impl AsRef<Path>) -> PathBuf {
        self.as_relative_path().to_path(base)
    }
}

impl From<&str> for UnixPath {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

impl From<String> for UnixPath {
    fn from(root: String) -> Self {
        let mut path = Self { text: root };
        path.check_separator();
        path
    }
}

impl TryFrom<&Path> for UnixPath {
    type Error = Box<UnixPathError>;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        path.to_str().map(UnixPath::new).ok_or_else(|| {
            Box::new(UnixPathError::new(ErrorKind::NonUtf8Path {
                path: path.to_path_buf(),
            }))
        })
    }
}

impl fmt::Display for UnixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for UnixPath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl AsRef<Path> for UnixPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.text)
    }
}

impl AsRef<RelativePath> for UnixPath {
    fn as_ref(&self) -> &RelativePath {
        self.as_relative_path()
    }
}
