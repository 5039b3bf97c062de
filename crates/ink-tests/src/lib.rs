//! Integration tests for inkhue crates.
//!
//! End-to-end checks across the data model, the modifiers and the file
//! formats.
