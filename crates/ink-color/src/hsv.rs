//! RGB <-> HSV conversion.
//!
//! Hue, saturation and value are all normalized to `[0, 1]`. Hue `0.0` and
//! `1.0` are both red. Achromatic input (r == g == b) converts to hue `0.0`,
//! saturation `0.0`.
//!
//! The forward conversion sorts the channels with two conditional swaps
//! instead of branching on which channel is the maximum; the inverse uses the
//! piecewise-linear "triangle" form, so neither direction needs a sector
//! lookup.
//!
//! ```text
//! R = clamp(|6h - 3| - 1)
//! G = clamp(2 - |6h - 2|)
//! B = clamp(2 - |6h - 4|)
//! out = ((c - 1) * s + 1) * v
//! ```

/// Guards the hue and saturation divisions for black and gray input.
const TINY: f32 = 1e-20;

/// Color in hue/saturation/value form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in `[0, 1]`.
    pub h: f32,
    /// Saturation in `[0, 1]`.
    pub s: f32,
    /// Value (max channel).
    pub v: f32,
}

impl Hsv {
    /// Create from components.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Components as `[h, s, v]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }

    /// Add `delta` component-wise and clamp every component to `[0, 1]`.
    #[inline]
    pub fn offset_clamped(self, delta: [f32; 3]) -> Self {
        Self {
            h: (self.h + delta[0]).clamp(0.0, 1.0),
            s: (self.s + delta[1]).clamp(0.0, 1.0),
            v: (self.v + delta[2]).clamp(0.0, 1.0),
        }
    }
}

impl From<[f32; 3]> for Hsv {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Convert RGB to HSV.
#[inline]
pub fn rgb_to_hsv(rgb: [f32; 3]) -> Hsv {
    let [mut r, mut g, mut b] = rgb;
    let mut k = 0.0f32;

    if g < b {
        std::mem::swap(&mut g, &mut b);
        k = -1.0;
    }
    let mut min_gb = b;
    if r < g {
        std::mem::swap(&mut r, &mut g);
        k = -2.0 / 6.0 - k;
        min_gb = g.min(b);
    }

    let chroma = r - min_gb;
    Hsv {
        h: (k + (g - b) / (6.0 * chroma + TINY)).abs(),
        s: chroma / (r + TINY),
        v: r,
    }
}

/// Convert HSV to RGB.
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> [f32; 3] {
    let h6 = hsv.h * 6.0;
    let nr = ((h6 - 3.0).abs() - 1.0).clamp(0.0, 1.0);
    let ng = (2.0 - (h6 - 2.0).abs()).clamp(0.0, 1.0);
    let nb = (2.0 - (h6 - 4.0).abs()).clamp(0.0, 1.0);

    let s = hsv.s;
    let v = hsv.v;
    [
        ((nr - 1.0) * s + 1.0) * v,
        ((ng - 1.0) * s + 1.0) * v,
        ((nb - 1.0) * s + 1.0) * v,
    ]
}
