//! # ink-io
//!
//! File formats for inkhue.
//!
//! - [`document`] - Stroke documents as JSON
//! - [`preset`] - Hue/Saturation parameter presets as YAML
//!
//! # Example
//!
//! ```ignore
//! use ink_io::{read_document, read_preset, write_document};
//!
//! let mut doc = read_document("drawing.json")?;
//! let params = read_preset("warm.yaml")?;
//! ink_ops::bulk_apply(&mut doc, &ink_ops::HueSaturation::new(params));
//! write_document("drawing_warm.json", &doc)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
mod error;
pub mod preset;

pub use document::{document_from_str, document_to_string, read_document, write_document};
pub use error::{IoError, IoResult};
pub use preset::{preset_from_str, preset_to_string, read_preset, write_preset};
