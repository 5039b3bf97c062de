//! Neutral-relative HSV offsets.
//!
//! Hue/saturation controls are stored as absolute targets where
//! [`NEUTRAL_HSV`] means "no change". The effective delta applied to a color
//! is `target - NEUTRAL_HSV`, so default parameters leave colors alone.

use ink_core::Rgba;

use crate::hsv::{hsv_to_rgb, rgb_to_hsv};

/// HSV target that produces no change.
pub const NEUTRAL_HSV: [f32; 3] = [0.5, 1.0, 1.0];

/// Component-wise HSV delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvOffset {
    delta: [f32; 3],
}

impl HsvOffset {
    /// Offset with no effect.
    pub const IDENTITY: Self = Self { delta: [0.0; 3] };

    /// Offset from an absolute `[h, s, v]` target.
    #[inline]
    pub fn from_target(target: [f32; 3]) -> Self {
        Self {
            delta: [
                target[0] - NEUTRAL_HSV[0],
                target[1] - NEUTRAL_HSV[1],
                target[2] - NEUTRAL_HSV[2],
            ],
        }
    }

    /// Offset from a raw delta.
    #[inline]
    pub const fn from_delta(delta: [f32; 3]) -> Self {
        Self { delta }
    }

    /// The effective delta.
    #[inline]
    pub const fn delta(&self) -> [f32; 3] {
        self.delta
    }

    /// Returns `true` if the delta is zero.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.delta == [0.0; 3]
    }

    /// Convert to HSV, add the delta, clamp, convert back.
    #[inline]
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        hsv_to_rgb(rgb_to_hsv(rgb).offset_clamped(self.delta))
    }

    /// Apply to the RGB channels of `color`; alpha is left untouched.
    #[inline]
    pub fn apply(&self, color: &mut Rgba) {
        color.set_rgb(self.apply_rgb(color.rgb()));
    }
}
