//! Error types for document and preset files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for file operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing files.
#[derive(Debug, Error)]
pub enum IoError {
    /// I/O error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document parse or encode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML preset parse or encode error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File not found.
    #[error("file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Preset parsed but holds invalid parameters.
    #[error("invalid preset: {0}")]
    Params(#[from] ink_ops::OpsError),
}
