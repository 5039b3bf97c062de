//! Error types for stroke modifiers.

use thiserror::Error;

/// Error type for modifier configuration.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Modifier type not known.
    #[error("unsupported modifier: {0}")]
    Unsupported(String),
}

/// Result type for modifier operations.
pub type OpsResult<T> = Result<T, OpsError>;
