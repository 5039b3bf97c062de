//! Hue/Saturation modifier.
//!
//! Shifts the hue, saturation and value of a stroke's fill color and/or its
//! per-point vertex colors.
//!
//! The HSV parameters are absolute targets; [`NEUTRAL_HSV`] `(0.5, 1.0, 1.0)`
//! is the no-op. For each color:
//!
//! 1. If the color is unset (alpha 0) and the material provides a visible base
//!    color, the base color is copied in with alpha forced to 1.0. The copy is
//!    permanent.
//! 2. RGB is converted to HSV, `hsv - NEUTRAL_HSV` is added, every component
//!    is clamped to `[0, 1]` and the result converted back. Alpha is not
//!    touched.
//!
//! Repeated application is not idempotent: clamping discards information.

use std::str::FromStr;

use ink_color::{HsvOffset, NEUTRAL_HSV};
use ink_core::{MaterialStyle, Rgba, Stroke};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{OpsError, OpsResult};
use crate::filter::StrokeFilter;
use crate::host::StrokeContext;
use crate::modifier::{ModifierFlags, ModifierInfo, ModifierKind, StrokeModifier};

/// Type info for [`HueSaturation`].
pub static HUE_SATURATION_INFO: ModifierInfo = ModifierInfo {
    name: "Hue/Saturation",
    struct_name: "HueSaturationParams",
    kind: ModifierKind::HueSaturation,
    flags: ModifierFlags {
        supports_edit_mode: true,
    },
    min_points: 1,
};

/// Which colors of a stroke are modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifyColor {
    /// Point vertex colors only.
    Stroke,
    /// Fill color only.
    Fill,
    /// Both fill and vertex colors.
    #[default]
    Both,
}

impl ModifyColor {
    /// Fill color is modified.
    #[inline]
    pub fn affects_fill(self) -> bool {
        self != Self::Stroke
    }

    /// Vertex colors are modified.
    #[inline]
    pub fn affects_stroke(self) -> bool {
        self != Self::Fill
    }
}

impl FromStr for ModifyColor {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stroke" => Ok(Self::Stroke),
            "fill" => Ok(Self::Fill),
            "both" => Ok(Self::Both),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown color mode '{other}' (expected stroke, fill or both)"
            ))),
        }
    }
}

/// Hue/Saturation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueSaturationParams {
    /// Target `[hue, saturation, value]`; [`NEUTRAL_HSV`] is no change.
    pub hsv: [f32; 3],
    /// Which colors to modify.
    pub mode: ModifyColor,
    /// Stroke inclusion filter.
    pub filter: StrokeFilter,
}

impl Default for HueSaturationParams {
    fn default() -> Self {
        Self {
            hsv: NEUTRAL_HSV,
            mode: ModifyColor::Both,
            filter: StrokeFilter::default(),
        }
    }
}

impl HueSaturationParams {
    /// Effective offset (`hsv - NEUTRAL_HSV`).
    #[inline]
    pub fn offset(&self) -> HsvOffset {
        HsvOffset::from_target(self.hsv)
    }

    /// Returns `true` if the HSV target is neutral.
    ///
    /// Material fallback still happens for identity parameters.
    pub fn is_identity(&self) -> bool {
        self.offset().is_identity()
    }

    /// Reject non-finite HSV components.
    ///
    /// Finite out-of-range values are accepted; the result is clamped.
    pub fn validate(&self) -> OpsResult<()> {
        for (name, v) in ["hue", "saturation", "value"].iter().zip(self.hsv) {
            if !v.is_finite() {
                return Err(OpsError::InvalidParameter(format!("{name} must be finite, got {v}")));
            }
        }
        Ok(())
    }
}

/// Hue/Saturation stroke modifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HueSaturation {
    /// Modifier parameters.
    pub params: HueSaturationParams,
}

impl HueSaturation {
    /// Create with explicit parameters.
    pub fn new(params: HueSaturationParams) -> Self {
        Self { params }
    }

    /// Recolor `stroke` in place. Performs no filtering.
    ///
    /// `style` is the stroke's material, used as the base color for unset
    /// fill and vertex colors. `None` skips the fallback.
    pub fn apply(&self, stroke: &mut Stroke, style: Option<&MaterialStyle>) {
        let offset = self.params.offset();
        let mode = self.params.mode;
        trace!(points = stroke.points.len(), ?mode, "hue_saturation::apply");

        if mode.affects_fill() {
            recolor(&mut stroke.fill_color, style.map(|s| s.fill_color), &offset);
        }

        if mode.affects_stroke() {
            let base = style.map(|s| s.stroke_color);
            for point in &mut stroke.points {
                recolor(&mut point.vertex_color, base, &offset);
            }
        }
    }
}

/// Materialize an unset color from `base`, then apply `offset`.
#[inline]
fn recolor(color: &mut Rgba, base: Option<Rgba>, offset: &HsvOffset) {
    if let Some(base) = base {
        if color.is_unset() && base.a > 0.0 {
            *color = base;
            color.a = 1.0;
        }
    }
    offset.apply(color);
}

impl StrokeModifier for HueSaturation {
    fn info(&self) -> &'static ModifierInfo {
        &HUE_SATURATION_INFO
    }

    fn deform_stroke(&self, ctx: &StrokeContext<'_>, stroke: &mut Stroke) -> bool {
        if stroke.points.len() < HUE_SATURATION_INFO.min_points
            || !self.params.filter.should_affect(ctx, stroke)
        {
            return false;
        }
        let style = ctx.material(stroke);
        self.apply(stroke, style);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ink_color::{hsv_to_rgb, rgb_to_hsv, Hsv};
    use ink_core::{MaterialTable, Point};

    const EPSILON: f32 = 1e-5;

    fn assert_color_eq(a: Rgba, b: Rgba) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..4 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = EPSILON);
        }
    }

    fn modifier(hsv: [f32; 3], mode: ModifyColor) -> HueSaturation {
        HueSaturation::new(HueSaturationParams {
            hsv,
            mode,
            ..HueSaturationParams::default()
        })
    }

    fn style() -> MaterialStyle {
        MaterialStyle::new("Ink", Rgba::opaque(0.0, 0.0, 1.0), Rgba::opaque(1.0, 0.0, 0.0))
    }

    fn colored_stroke() -> Stroke {
        Stroke::from_points(
            0,
            vec![
                Point::default().with_color(Rgba::new(0.2, 0.4, 0.6, 1.0)),
                Point::default().with_color(Rgba::new(0.9, 0.1, 0.3, 0.5)),
                Point::default().with_color(Rgba::new(0.0, 1.0, 0.0, 0.25)),
            ],
        )
        .with_fill(Rgba::new(0.7, 0.7, 0.2, 0.8))
    }

    #[test]
    fn defaults_are_neutral() {
        let p = HueSaturationParams::default();
        assert_eq!(p.hsv, [0.5, 1.0, 1.0]);
        assert_eq!(p.mode, ModifyColor::Both);
        assert!(p.filter.is_empty());
        assert!(p.is_identity());
    }

    #[test]
    fn neutral_leaves_colors_unchanged() {
        let before = colored_stroke();
        let mut after = before.clone();
        HueSaturation::default().apply(&mut after, Some(&style()));

        assert_color_eq(after.fill_color, before.fill_color);
        for (a, b) in after.points.iter().zip(&before.points) {
            assert_color_eq(a.vertex_color, b.vertex_color);
        }
    }

    #[test]
    fn results_stay_in_unit_range() {
        let targets = [[0.0, 0.0, 0.0], [1.0, 2.0, 2.0], [0.9, 1.5, 0.2], [-3.0, 1.0, 5.0]];
        for hsv in targets {
            let mut s = colored_stroke();
            s.points.push(Point::default().with_color(Rgba::new(1.5, -0.3, 0.4, 1.0)));
            modifier(hsv, ModifyColor::Both).apply(&mut s, Some(&style()));
            assert!(s.fill_color.is_normalized(), "{:?}", s.fill_color);
            for p in &s.points {
                assert!(p.vertex_color.is_normalized(), "{:?}", p.vertex_color);
            }
        }
    }

    #[test]
    fn unset_fill_takes_material_color() {
        let mut s = Stroke::new(0);
        let m = MaterialStyle::new("Red", Rgba::opaque(0.0, 0.0, 0.0), Rgba::new(1.0, 0.0, 0.0, 1.0));
        modifier(NEUTRAL_HSV, ModifyColor::Fill).apply(&mut s, Some(&m));
        assert_eq!(s.fill_color, Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn fallback_forces_opaque_alpha() {
        let mut s = Stroke::from_points(0, vec![Point::default()]);
        let m = MaterialStyle::new("Half", Rgba::new(0.0, 0.0, 1.0, 0.4), Rgba::new(0.0, 1.0, 0.0, 0.6));
        HueSaturation::default().apply(&mut s, Some(&m));
        assert_color_eq(s.fill_color, Rgba::new(0.0, 1.0, 0.0, 1.0));
        assert_color_eq(s.points[0].vertex_color, Rgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn no_fallback_without_visible_material_color() {
        let invisible = MaterialStyle::new("Clear", Rgba::new(1.0, 0.0, 0.0, 0.0), Rgba::new(1.0, 0.0, 0.0, 0.0));
        let mut s = Stroke::from_points(0, vec![Point::default()]);
        HueSaturation::default().apply(&mut s, Some(&invisible));
        assert_eq!(s.fill_color.a, 0.0);
        assert_eq!(s.points[0].vertex_color.a, 0.0);

        let mut s = Stroke::from_points(0, vec![Point::default()]);
        HueSaturation::default().apply(&mut s, None);
        assert_eq!(s.fill_color, Rgba::TRANSPARENT);
        assert_eq!(s.points[0].vertex_color, Rgba::TRANSPARENT);
    }

    #[test]
    fn set_colors_ignore_material() {
        let mut s = colored_stroke();
        HueSaturation::default().apply(&mut s, Some(&style()));
        // vertex colors with alpha > 0 keep their own rgb
        assert_abs_diff_eq!(s.points[0].vertex_color.b, 0.6, epsilon = EPSILON);
        assert_abs_diff_eq!(s.fill_color.r, 0.7, epsilon = EPSILON);
    }

    #[test]
    fn saturation_halved_on_green() {
        let mut s = Stroke::from_points(0, vec![Point::default().with_color(Rgba::opaque(0.0, 1.0, 0.0))]);
        modifier([0.5, 0.5, 1.0], ModifyColor::Both).apply(&mut s, None);

        let src = rgb_to_hsv([0.0, 1.0, 0.0]);
        let expected = hsv_to_rgb(Hsv::new(src.h, src.s - 0.5, src.v));
        let got = s.points[0].vertex_color;
        assert_abs_diff_eq!(got.r, expected[0], epsilon = EPSILON);
        assert_abs_diff_eq!(got.g, expected[1], epsilon = EPSILON);
        assert_abs_diff_eq!(got.b, expected[2], epsilon = EPSILON);
        assert_abs_diff_eq!(got.r, 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(got.g, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(got.b, 0.5, epsilon = EPSILON);
        assert_eq!(got.a, 1.0);
    }

    #[test]
    fn alpha_is_preserved() {
        let before = colored_stroke();
        let mut after = before.clone();
        modifier([0.8, 0.3, 0.6], ModifyColor::Both).apply(&mut after, Some(&style()));
        assert_eq!(after.fill_color.a, before.fill_color.a);
        for (a, b) in after.points.iter().zip(&before.points) {
            assert_eq!(a.vertex_color.a, b.vertex_color.a);
        }
    }

    #[test]
    fn stroke_mode_never_touches_fill() {
        let mut s = colored_stroke().with_fill(Rgba::TRANSPARENT);
        modifier([0.7, 0.3, 0.8], ModifyColor::Stroke).apply(&mut s, Some(&style()));
        assert_eq!(s.fill_color, Rgba::TRANSPARENT);

        let before = colored_stroke();
        let mut s = before.clone();
        modifier([0.7, 0.3, 0.8], ModifyColor::Stroke).apply(&mut s, Some(&style()));
        assert_eq!(s.fill_color, before.fill_color);
        assert_ne!(s.points[0].vertex_color, before.points[0].vertex_color);
    }

    #[test]
    fn fill_mode_never_touches_points() {
        let before = Stroke::from_points(0, vec![Point::default(), Point::default().with_color(Rgba::opaque(0.3, 0.2, 0.1))]);
        let mut s = before.clone();
        modifier([0.7, 0.3, 0.8], ModifyColor::Fill).apply(&mut s, Some(&style()));
        assert_eq!(s.points, before.points);
        assert_ne!(s.fill_color, before.fill_color);
    }

    #[test]
    fn empty_stroke_recolors_fill_only() {
        let mut s = Stroke::new(0).with_fill(Rgba::opaque(1.0, 0.0, 0.0));
        modifier([0.5, 1.0, 0.5], ModifyColor::Both).apply(&mut s, Some(&style()));
        assert!(s.points.is_empty());
        assert_color_eq(s.fill_color, Rgba::opaque(0.5, 0.0, 0.0));
    }

    #[test]
    fn not_idempotent_near_gamut_edge() {
        let m = modifier([0.5, 1.0, 1.4], ModifyColor::Fill);
        let mut s = Stroke::new(0).with_fill(Rgba::opaque(0.3, 0.1, 0.1));
        m.apply(&mut s, None);
        let once = s.fill_color;
        m.apply(&mut s, None);
        // the second pass brightens again until value clamps at 1.0
        assert_abs_diff_eq!(once.r, 0.7, epsilon = EPSILON);
        assert_abs_diff_eq!(s.fill_color.r, 1.0, epsilon = EPSILON);
        assert_ne!(once, s.fill_color);
    }

    #[test]
    fn deform_filters_and_reports() {
        let materials = MaterialTable::from(vec![style()]);
        let ctx = StrokeContext {
            layer_name: "Lines",
            layer_pass_index: 0,
            frame_number: 1,
            materials: &materials,
        };

        let mut m = modifier([0.5, 1.0, 0.5], ModifyColor::Both);
        let mut s = Stroke::from_points(0, vec![Point::default()]);
        assert!(m.deform_stroke(&ctx, &mut s));
        // fallback blue stroke color, value halved
        assert_color_eq(s.points[0].vertex_color, Rgba::opaque(0.0, 0.0, 0.5));

        m.params.filter.layer_name = "Fills".into();
        let mut s = Stroke::from_points(0, vec![Point::default()]);
        assert!(!m.deform_stroke(&ctx, &mut s));
        assert_eq!(s.points[0].vertex_color, Rgba::TRANSPARENT);
    }

    #[test]
    fn deform_skips_empty_strokes() {
        let materials = MaterialTable::new();
        let ctx = StrokeContext {
            layer_name: "Lines",
            layer_pass_index: 0,
            frame_number: 1,
            materials: &materials,
        };
        let mut s = Stroke::new(0).with_fill(Rgba::opaque(1.0, 0.0, 0.0));
        assert!(!modifier([0.5, 1.0, 0.5], ModifyColor::Both).deform_stroke(&ctx, &mut s));
        assert_eq!(s.fill_color, Rgba::opaque(1.0, 0.0, 0.0));
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("fill".parse::<ModifyColor>().unwrap(), ModifyColor::Fill);
        assert_eq!("STROKE".parse::<ModifyColor>().unwrap(), ModifyColor::Stroke);
        assert_eq!("both".parse::<ModifyColor>().unwrap(), ModifyColor::Both);
        assert!("edges".parse::<ModifyColor>().is_err());
    }

    #[test]
    fn validate_rejects_nan() {
        let mut p = HueSaturationParams::default();
        assert!(p.validate().is_ok());
        p.hsv[1] = 3.0;
        assert!(p.validate().is_ok());
        p.hsv[2] = f32::NAN;
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("value"));
    }
}
