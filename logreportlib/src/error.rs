//! Error types for logreportlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing log files
#[derive(Error, Debug)]
pub enum LogReportError {
    /// Path does not exist or is not a regular file
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to open or read a log file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Report kind not recognized
    #[error("unknown report kind '{0}' (valid: handlers)")]
    UnknownReport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
