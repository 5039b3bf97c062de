//! # ink-core
//!
//! Core types for ink stroke documents.
//!
//! This crate provides the data model shared by every inkhue crate:
//!
//! - [`Rgba`] - Straight-alpha float color used for vertex and fill colors
//! - [`Point`], [`Stroke`] - A poly-line of colored points with a fill color
//! - [`Frame`], [`Layer`], [`Document`] - The layer -> frame -> stroke hierarchy
//! - [`MaterialStyle`], [`MaterialTable`] - Per-material base colors
//! - [`MaterialLookup`] - Host-supplied `(index) -> material` capability
//!
//! ## Crate Structure
//!
//! ```text
//! ink-core (this crate)
//!    ^
//!    |
//!    +-- ink-color (RGB <-> HSV)
//!    +-- ink-ops (stroke modifiers)
//!    +-- ink-io (document and preset files)
//! ```
//!
//! Every type here derives `serde` traits so documents can be stored as JSON
//! by `ink-io`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod document;
pub mod error;
pub mod material;
pub mod stroke;

pub use color::Rgba;
pub use document::{Document, Frame, Layer};
pub use error::{Error, Result};
pub use material::{MaterialLookup, MaterialStyle, MaterialTable};
pub use stroke::{Point, Stroke};

/// Prelude module for convenient imports.
///
/// ```
/// use ink_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::document::{Document, Frame, Layer};
    pub use crate::error::{Error, Result};
    pub use crate::material::{MaterialLookup, MaterialStyle, MaterialTable};
    pub use crate::stroke::{Point, Stroke};
}
