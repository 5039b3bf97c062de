//! Stroke documents as JSON.
//!
//! The file is a direct serde encoding of [`Document`]: layers with their
//! frames and strokes, plus the material table. Colors are `[r, g, b, a]`
//! arrays. Missing optional fields take their defaults.

use std::fs;
use std::path::Path;

use ink_core::Document;
use tracing::{debug, trace};

use crate::error::{IoError, IoResult};

/// Parse a document from JSON text.
pub fn document_from_str(json: &str) -> IoResult<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a document as pretty-printed JSON.
pub fn document_to_string(document: &Document) -> IoResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Read a document from a JSON file.
pub fn read_document(path: impl AsRef<Path>) -> IoResult<Document> {
    let path = path.as_ref();
    trace!(path = %path.display(), "read_document");
    if !path.exists() {
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let document = document_from_str(&fs::read_to_string(path)?)?;
    debug!(
        path = %path.display(),
        layers = document.layers.len(),
        strokes = document.stroke_count(),
        "Loaded document"
    );
    Ok(document)
}

/// Write a document to a JSON file.
pub fn write_document(path: impl AsRef<Path>, document: &Document) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), "write_document");
    fs::write(path, document_to_string(document)?)?;
    Ok(())
}
