use std::path::Path;

use tracing::{debug, instrument};

use unixpath_base::{ErrorKind, ResultExt, UnixPathError, UnixPathResult};

use crate::Script;

/// File name looked up in the working directory when no script is given.
pub const DEFAULT_SCRIPT_FILE: &str = "unixpath.toml";

/// Load a path script from a TOML file.
///
/// ```toml
/// root = "home"
/// steps = [{ dir = "user" }, { file = "file.txt" }, "pop"]
/// ```
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_script(path: &Path) -> UnixPathResult<Script> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        Box::new(UnixPathError::new(ErrorKind::FileError {
            path: path.to_path_buf(),
            source,
        }))
    })?;
    let script = parse_script(&content)
        .with_context(|| format!("Failed to load script {}", path.display()))?;
    debug!(steps = script.steps.len(), "loaded script");
    Ok(script)
}

/// Parse a path script from TOML text.
pub fn parse_script(content: &str) -> UnixPathResult<Script> {
    toml::from_str(content).map_err(|err| {
        let line = err
            .span()
            .map(|span| content[..span.start].matches('\n').count() + 1)
            .unwrap_or(0);
        Box::new(UnixPathError::new(ErrorKind::ScriptParse {
            line,
            message: err.message().to_string(),
        }))
    })
}
