use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while fetching, converting, filing or patching.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid settings in {}: {reason}", path.display())]
    InvalidSettings { path: PathBuf, reason: String },

    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to clone repository: {0}")]
    Clone(String),

    #[error("Repository does not contain a '{0}' directory")]
    MissingRepoDir(String),
}

impl Error {
    /// True for failures of an external command (missing binary or non-zero exit).
    pub fn is_command_failure(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. } | Self::CommandFailed { .. })
    }
}
