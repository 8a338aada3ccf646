use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate beyond tracing-error
- Span traces are captured where the error is created, not where it is printed
 */

/// Error variants that can occur in unixpath operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// File system operation failed
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An OS path could not be represented as a UTF-8 unix path
    NonUtf8Path { path: PathBuf },

    /// A path script step or script file could not be parsed
    ScriptParse { line: usize, message: String },

    /// Multiple errors occurred during batch operations
    Multiple {
        errors: Vec<UnixPathError>,
        count: usize,
    },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::NonUtf8Path { path } => {
                write!(f, "Path is not valid UTF-8: {}", path.display())
            }
            ErrorKind::ScriptParse { line, message } => {
                write!(f, "Script error at line {}: {}", line, message)
            }
            ErrorKind::Multiple { errors, count } => {
                write!(f, "Multiple errors occurred ({} total)", count)?;
                if let Some(first) = errors.first() {
                    write!(f, ": {}", first)?;
                }
                Ok(())
            }
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and UnixPathError?
ErrorKind carries the structural variant callers match on. UnixPathError adds the
runtime context strings, an optional cause and the span trace. Context is kept as a
list so nested propagation does not build ever-growing strings.
*/

/// Error type wrapping [`ErrorKind`] with context, an optional cause and a span trace.
pub struct UnixPathError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<UnixPathError>>,
    span_trace: SpanTrace,
}

impl UnixPathError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: UnixPathError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn cause(&self) -> Option<&UnixPathError> {
        self.cause.as_deref()
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        let item_count = self.context.len() + usize::from(self.cause.is_some());
        for (i, ctx) in self.context.iter().enumerate() {
            let connector = if i + 1 == item_count { "└─" } else { "├─" };
            write!(f, "\n{}{} {}", indent, connector, ctx)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "\n{}└─ cause: {}", indent, cause.kind)?;
            cause.fmt_tree(f, &format!("{}   ", indent))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for UnixPathError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for UnixPathError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::FileError { source, .. } => Some(source),
            ErrorKind::Multiple { errors, .. } => errors.first().and_then(|e| e.source()),
            _ => self
                .cause
                .as_deref()
                .map(|cause| cause as &(dyn StdError + 'static)),
        }
    }
}

impl fmt::Display for UnixPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for UnixPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            write!(f, "\nTrace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why use Box<UnixPathError> in the result type?

Boxing the error reduces the size of the result type, making it more efficient to return in the common case.
The span trace alone would otherwise bloat every `Ok` value.
*/

/// Standard result type for unixpath operations.
pub type UnixPathResult<T> = std::result::Result<T, Box<UnixPathError>>;

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> UnixPathResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> UnixPathResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for UnixPathResult<T> {
    fn context(self, context: impl Into<String>) -> UnixPathResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> UnixPathResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

/// Creates a boxed [`UnixPathError`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::UnixPathError::message(format!($($arg)*)))
    };
}

/// Returns early with a boxed [`UnixPathError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}
