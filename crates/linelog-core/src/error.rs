//! Logger error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or writing to a logger
#[derive(Error, Debug)]
pub enum LogError {
    /// Destination file could not be opened for append
    #[error("cannot open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Write to the destination file or stream failed
    #[error("log write failed: {0}")]
    Write(#[from] std::io::Error),

    /// Logger config file could not be read or parsed
    #[error("invalid logger config: {0}")]
    Config(String),
}

impl LogError {
    /// Create a file-open error
    pub fn open_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFile {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
