//! Logger error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when opening or closing the log stream.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A different log file is already open in this sink.
    #[error(
        "cannot open a second log {} ({} is already open)",
        .requested.display(),
        .active.display()
    )]
    AlreadyOpen {
        /// The file the caller asked for.
        requested: PathBuf,
        /// The file currently open.
        active: PathBuf,
    },

    /// No log filename was configured.
    #[error("Configuration error: log filename is required")]
    MissingFilename,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;
