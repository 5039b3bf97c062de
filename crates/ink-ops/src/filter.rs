//! Stroke inclusion filter.
//!
//! Decides whether a modifier touches a given stroke. Four independent
//! criteria are checked, each of which can be inverted:
//!
//! | criterion      | unset when          | compares against                |
//! |----------------|---------------------|---------------------------------|
//! | layer name     | `layer_name` empty  | owning layer's name             |
//! | material name  | `material_name` empty | stroke material's name        |
//! | pass index     | `pass_index == 0`   | stroke pass (material pass if unset) |
//! | layer pass     | `layer_pass_index == 0` | owning layer's pass index   |
//!
//! An unset criterion always passes, whatever its invert flag says. A stroke
//! whose material cannot be found has an empty material name and pass 0.

use ink_core::Stroke;
use serde::{Deserialize, Serialize};

use crate::host::StrokeContext;

/// Filter settings shared by stroke modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeFilter {
    /// Only affect strokes on this layer.
    pub layer_name: String,
    /// Only affect strokes using this material.
    pub material_name: String,
    /// Only affect strokes with this pass index.
    pub pass_index: u32,
    /// Only affect strokes on layers with this pass index.
    pub layer_pass_index: u32,
    /// Invert the layer-name criterion.
    pub invert_layer: bool,
    /// Invert the material-name criterion.
    pub invert_material: bool,
    /// Invert the pass-index criterion.
    pub invert_pass: bool,
    /// Invert the layer-pass criterion.
    pub invert_layer_pass: bool,
}

/// `true` when an active criterion matched, flipped by `invert`.
#[inline]
fn criterion(active: bool, matches: bool, invert: bool) -> bool {
    !active || (matches != invert)
}

impl StrokeFilter {
    /// Filter that accepts every stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.layer_name.is_empty()
            && self.material_name.is_empty()
            && self.pass_index == 0
            && self.layer_pass_index == 0
    }

    /// Returns `true` if `stroke` passes every criterion.
    pub fn should_affect(&self, ctx: &StrokeContext<'_>, stroke: &Stroke) -> bool {
        let material = ctx.material(stroke);

        let layer_ok = criterion(
            !self.layer_name.is_empty(),
            self.layer_name == ctx.layer_name,
            self.invert_layer,
        );
        if !layer_ok {
            return false;
        }

        let material_name = material.map(|m| m.name.as_str()).unwrap_or("");
        let material_ok = criterion(
            !self.material_name.is_empty(),
            self.material_name == material_name,
            self.invert_material,
        );
        if !material_ok {
            return false;
        }

        let layer_pass_ok = criterion(
            self.layer_pass_index > 0,
            self.layer_pass_index == ctx.layer_pass_index,
            self.invert_layer_pass,
        );
        if !layer_pass_ok {
            return false;
        }

        let stroke_pass = match stroke.pass_index {
            0 => material.map_or(0, |m| m.pass_index),
            p => p,
        };
        criterion(
            self.pass_index > 0,
            self.pass_index == stroke_pass,
            self.invert_pass,
        )
    }
}
