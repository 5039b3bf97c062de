//! Modifier capability interface.
//!
//! Every stroke modifier type implements [`StrokeModifier`] and publishes a
//! static [`ModifierInfo`] describing itself. [`ModifierKind`] is the closed
//! set of built-in types and acts as the factory for default instances.

use ink_core::Stroke;

use crate::error::{OpsError, OpsResult};
use crate::host::{bulk_apply, BulkStats, StrokeContext, StrokeHost};
use crate::hue_saturation::{HueSaturation, HUE_SATURATION_INFO};

/// Capability flags of a modifier type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierFlags {
    /// Modifier may run while the drawing is being edited.
    pub supports_edit_mode: bool,
}

/// Static description of a modifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierInfo {
    /// User-facing name.
    pub name: &'static str,
    /// Name of the parameter struct.
    pub struct_name: &'static str,
    /// Modifier type.
    pub kind: ModifierKind,
    /// Capabilities.
    pub flags: ModifierFlags,
    /// Strokes with fewer points than this are skipped.
    pub min_points: usize,
}

/// Built-in modifier types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// HSV recoloring of fill and vertex colors.
    HueSaturation,
}

impl ModifierKind {
    /// Every built-in kind.
    pub const ALL: [ModifierKind; 1] = [ModifierKind::HueSaturation];

    /// Static type info.
    pub fn info(self) -> &'static ModifierInfo {
        match self {
            Self::HueSaturation => &HUE_SATURATION_INFO,
        }
    }

    /// New instance with default parameters.
    pub fn create_default(self) -> Box<dyn StrokeModifier + Send + Sync> {
        match self {
            Self::HueSaturation => Box::new(HueSaturation::default()),
        }
    }

    /// Look up a kind by its user-facing or struct name (case-insensitive).
    pub fn from_name(name: &str) -> OpsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| {
                let info = k.info();
                info.name.eq_ignore_ascii_case(name) || info.struct_name.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| OpsError::Unsupported(name.to_string()))
    }
}

/// A per-stroke transform driven by the host.
pub trait StrokeModifier {
    /// Static type info.
    fn info(&self) -> &'static ModifierInfo;

    /// Filter and modify one stroke in place.
    ///
    /// Returns `true` if the stroke passed the filter and was modified.
    fn deform_stroke(&self, ctx: &StrokeContext<'_>, stroke: &mut Stroke) -> bool;

    /// Apply permanently to every stroke of `host`.
    fn bake(&self, host: &mut dyn StrokeHost) -> BulkStats {
        bulk_apply(host, self)
    }
}
