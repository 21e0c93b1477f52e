// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid rule configuration: {0}")]
    Config(String),

    #[error("Rule engine failure: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, LintError>;

impl LintError {
    /// Attaches a path to a raw I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LintError::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to LintError::Io with unknown path.
impl From<std::io::Error> for LintError {
    fn from(source: std::io::Error) -> Self {
        LintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for LintError {
    fn from(e: walkdir::Error) -> Self {
        LintError::Engine(e.to_string())
    }
}
