use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for lrhook operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required directory exists but is neither a directory nor a
    /// symlink to one.
    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The background child process could not be created.
    #[error("Unable to fork background task: {0}")]
    DetachFailed(String),
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
