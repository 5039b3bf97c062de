//! # ink-ops
//!
//! Stroke modifiers for ink drawings.
//!
//! A modifier is a leaf transform applied to every stroke of a document that
//! passes its filter. This crate provides:
//!
//! - [`filter`] - Layer/material/pass inclusion filter ([`StrokeFilter`])
//! - [`hue_saturation`] - HSV recoloring of fill and vertex colors
//! - [`modifier`] - The [`StrokeModifier`] capability trait and type info
//! - [`host`] - Document traversal ([`StrokeHost`]) and [`bulk_apply`]
//! - [`parallel`] - Rayon-backed bulk pass (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use ink_core::{Document, Frame, Layer, Point, Rgba, Stroke};
//! use ink_ops::{bulk_apply, HueSaturation};
//!
//! let stroke = Stroke::from_points(0, vec![Point::default().with_color(Rgba::opaque(1.0, 0.0, 0.0))]);
//! let mut doc = Document::new();
//! doc.layers.push(Layer::new("Lines").with_frame(Frame::new(1).with_stroke(stroke)));
//!
//! let mut hs = HueSaturation::default();
//! hs.params.hsv = [0.5, 1.0, 0.5]; // halve value
//! let stats = bulk_apply(&mut doc, &hs);
//! assert_eq!(stats.affected, 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod filter;
pub mod host;
pub mod hue_saturation;
pub mod modifier;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use filter::StrokeFilter;
pub use host::{bulk_apply, BulkStats, StrokeContext, StrokeHost};
pub use hue_saturation::{HueSaturation, HueSaturationParams, ModifyColor};
pub use modifier::{ModifierFlags, ModifierInfo, ModifierKind, StrokeModifier};
