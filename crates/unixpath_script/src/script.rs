/* 📖 # Why a script layer over UnixPath?

UnixPath is a plain in-memory buffer. To drive it from the command line or from a
file, the edits are first described as data (a root plus a list of steps) and then
replayed. Keeping parsing separate from replaying means every step is validated
before the path is touched, and the same replay serves both sources.
*/

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, instrument};

use unixpath_base::{ErrorKind, UnixPath, UnixPathError, UnixPathResult};

/// A single edit applied to a [`UnixPath`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Push a directory segment.
    #[serde(rename = "dir")]
    Directory(String),
    /// Push a final filename segment.
    #[serde(rename = "file")]
    Filename(String),
    /// Remove the last segment.
    Pop,
}

impl Step {
    pub fn apply(&self, path: &mut UnixPath) {
        match self {
            Step::Directory(name) => {
                path.push(name);
            }
            Step::Filename(name) => {
                path.push_filename(name);
            }
            Step::Pop => path.pop(),
        }
    }
}

impl FromStr for Step {
    type Err = String;

    /// Parses `dir:NAME`, `file:NAME` or `pop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "pop" {
            return Ok(Step::Pop);
        }
        match s.split_once(':') {
            Some(("dir", name)) => Ok(Step::Directory(name.to_string())),
            Some(("file", name)) => Ok(Step::Filename(name.to_string())),
            _ => Err(format!(
                "unknown step '{}', expected dir:NAME, file:NAME or pop",
                s
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Directory(name) => write!(f, "dir:{}", name),
            Step::Filename(name) => write!(f, "file:{}", name),
            Step::Pop => write!(f, "pop"),
        }
    }
}

/// A root directory and the steps applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Script {
    pub root: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Builds a script from command line style arguments.
    ///
    /// The first argument is the root; each following argument is one step.
    /// Errors report the 1-based position of the offending step.
    pub fn parse_args<I, S>(args: I) -> UnixPathResult<Script>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let root = args
            .next()
            .map(|root| root.as_ref().to_string())
            .ok_or_else(|| {
                Box::new(UnixPathError::new(ErrorKind::ScriptParse {
                    line: 0,
                    message: "missing root directory".to_string(),
                }))
            })?;

        let steps = args
            .enumerate()
            .map(|(index, arg)| {
                arg.as_ref().parse::<Step>().map_err(|message| {
                    Box::new(UnixPathError::new(ErrorKind::ScriptParse {
                        line: index + 1,
                        message,
                    }))
                })
            })
            .collect::<UnixPathResult<Vec<_>>>()?;

        Ok(Script { root, steps })
    }

    /// Replays the script and returns the resulting path.
    pub fn run(&self) -> UnixPath {
        self.replay(|_, _| {})
    }

    /// Replays the script and returns the path text before the first step and
    /// after every step.
    pub fn trace(&self) -> Vec<String> {
        let mut states = vec![UnixPath::new(&self.root).into_string()];
        self.replay(|_, path| states.push(path.to_string()));
        states
    }

    #[instrument(skip(self, on_step), fields(root = %self.root, steps = self.steps.len()))]
    fn replay<F>(&self, mut on_step: F) -> UnixPath
    where
        F: FnMut(&Step, &UnixPath),
    {
        let mut path = UnixPath::new(&self.root);
        for step in &self.steps {
            step.apply(&mut path);
            debug!(%step, path = %path, "applied step");
            on_step(step, &path);
        }
        path
    }
}
