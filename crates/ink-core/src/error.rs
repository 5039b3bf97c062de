//! Error types for ink-core operations.
//!
//! The data model itself is plain data; errors only arise from checked
//! lookups and from I/O performed on behalf of higher crates.
//!
//! # Usage
//!
//! ```rust
//! use ink_core::{Error, MaterialTable};
//!
//! let table = MaterialTable::new();
//! let err = table.get_checked(3).unwrap_err();
//! assert!(matches!(err, Error::InvalidMaterialIndex { index: 3, count: 0 }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while working with stroke documents.
#[derive(Debug, Error)]
pub enum Error {
    /// Material index is not present in the material table.
    #[error("material index {index} out of range (table has {count} materials)")]
    InvalidMaterialIndex {
        /// Index that was requested
        index: usize,
        /// Number of materials in the table
        count: usize,
    },

    /// I/O error during file operations.
    ///
    /// Primarily used by `ink-io`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidMaterialIndex`] error.
    #[inline]
    pub fn invalid_material_index(index: usize, count: usize) -> Self {
        Self::InvalidMaterialIndex { index, count }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a lookup error.
    #[inline]
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::InvalidMaterialIndex { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
