//! Float RGBA color.
//!
//! Vertex and fill colors are stored as straight (non-premultiplied) alpha
//! floats, nominally in `[0, 1]`. An alpha of exactly `0.0` means the color is
//! unset and the material's base color applies.
//!
//! # Serialization
//!
//! Serialized as a 4-element array `[r, g, b, a]`:
//!
//! ```
//! use ink_core::Rgba;
//!
//! let c: Rgba = serde_json::from_str("[1.0, 0.5, 0.0, 1.0]").unwrap();
//! assert_eq!(c, Rgba::new(1.0, 0.5, 0.0, 1.0));
//! ```

use serde::{Deserialize, Serialize};

/// RGBA color with `f32` channels.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rgba {
    /// Red channel value.
    pub r: f32,
    /// Green channel value.
    pub g: f32,
    /// Blue channel value.
    pub b: f32,
    /// Alpha channel value.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, the "unset" vertex color.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 1.0).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create from RGB with specified alpha.
    #[inline]
    pub const fn from_rgb(rgb: [f32; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// RGB channels as an array.
    #[inline]
    pub const fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Replace the RGB channels, leaving alpha untouched.
    #[inline]
    pub fn set_rgb(&mut self, rgb: [f32; 3]) {
        self.r = rgb[0];
        self.g = rgb[1];
        self.b = rgb[2];
    }

    /// Returns `true` when alpha is exactly zero.
    ///
    /// An unset vertex color defers to the material color.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.a == 0.0
    }

    /// Returns `true` if every channel lies in `[0, 1]`.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba> for [f32; 4] {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}
