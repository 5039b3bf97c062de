//! Document traversal and the bulk modifier pass.
//!
//! The host owns the layer -> frame -> stroke hierarchy. Modifiers never walk
//! it themselves; they receive one stroke at a time together with a
//! [`StrokeContext`] describing where the stroke lives.

use ink_core::{Document, Layer, MaterialLookup, MaterialStyle, Stroke};
use tracing::{debug, trace};

use crate::modifier::StrokeModifier;

/// Read-only facts about a stroke's surroundings.
#[derive(Clone, Copy)]
pub struct StrokeContext<'a> {
    /// Name of the owning layer.
    pub layer_name: &'a str,
    /// Pass index of the owning layer (0 = unset).
    pub layer_pass_index: u32,
    /// Frame number of the owning keyframe.
    pub frame_number: i32,
    /// Material slots of the document.
    pub materials: &'a dyn MaterialLookup,
}

impl<'a> StrokeContext<'a> {
    /// Context for a stroke on `layer` at `frame_number`.
    pub fn new(layer: &'a Layer, frame_number: i32, materials: &'a dyn MaterialLookup) -> Self {
        Self {
            layer_name: &layer.name,
            layer_pass_index: layer.pass_index,
            frame_number,
            materials,
        }
    }

    /// Material referenced by `stroke`, if present.
    #[inline]
    pub fn material(&self, stroke: &Stroke) -> Option<&'a MaterialStyle> {
        self.materials.material(stroke.material_index)
    }
}

impl std::fmt::Debug for StrokeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrokeContext")
            .field("layer_name", &self.layer_name)
            .field("layer_pass_index", &self.layer_pass_index)
            .field("frame_number", &self.frame_number)
            .finish_non_exhaustive()
    }
}

/// Host capability: visit every stroke mutably in stable order.
pub trait StrokeHost {
    /// Call `visit` once per stroke, layer by layer, frame by frame.
    fn visit_strokes_mut(&mut self, visit: &mut dyn FnMut(&StrokeContext<'_>, &mut Stroke));
}

impl StrokeHost for Document {
    fn visit_strokes_mut(&mut self, visit: &mut dyn FnMut(&StrokeContext<'_>, &mut Stroke)) {
        let materials = &self.materials;
        for layer in &mut self.layers {
            let Layer {
                name,
                pass_index,
                frames,
            } = layer;
            for frame in frames.iter_mut() {
                let ctx = StrokeContext {
                    layer_name: name.as_str(),
                    layer_pass_index: *pass_index,
                    frame_number: frame.frame_number,
                    materials,
                };
                for stroke in &mut frame.strokes {
                    visit(&ctx, stroke);
                }
            }
        }
    }
}

/// Counters returned by a bulk pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkStats {
    /// Strokes the pass looked at.
    pub visited: usize,
    /// Strokes that passed the filter and were modified.
    pub affected: usize,
}

impl std::ops::Add for BulkStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            visited: self.visited + rhs.visited,
            affected: self.affected + rhs.affected,
        }
    }
}

/// Run `modifier` over every stroke of `host`.
///
/// Each stroke is filtered and then modified in place.
pub fn bulk_apply<H, M>(host: &mut H, modifier: &M) -> BulkStats
where
    H: StrokeHost + ?Sized,
    M: StrokeModifier + ?Sized,
{
    trace!(modifier = modifier.info().name, "bulk_apply");

    let mut stats = BulkStats::default();
    host.visit_strokes_mut(&mut |ctx, stroke| {
        stats.visited += 1;
        if modifier.deform_stroke(ctx, stroke) {
            stats.affected += 1;
        }
    });

    debug!(
        modifier = modifier.info().name,
        visited = stats.visited,
        affected = stats.affected,
        "Bulk pass complete"
    );
    stats
}
