//! # ink-color
//!
//! Colorspace math for stroke recoloring.
//!
//! - [`hsv`] - RGB <-> HSV conversion with hue normalized to `[0, 1]`
//! - [`offset`] - [`HsvOffset`], an HSV delta measured from the neutral
//!   target `(0.5, 1.0, 1.0)`
//!
//! # Example
//!
//! ```rust
//! use ink_color::{HsvOffset, NEUTRAL_HSV};
//! use ink_core::Rgba;
//!
//! let offset = HsvOffset::from_target(NEUTRAL_HSV);
//! assert!(offset.is_identity());
//!
//! let mut c = Rgba::opaque(1.0, 0.0, 0.0);
//! HsvOffset::from_target([0.5, 0.0, 1.0]).apply(&mut c);
//! assert!((c.g - 1.0).abs() < 1e-6); // fully desaturated red is white
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsv;
pub mod offset;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use offset::{HsvOffset, NEUTRAL_HSV};
