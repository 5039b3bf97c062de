//! Parallel bulk pass using Rayon.
//!
//! Strokes are independent, so layers, frames and strokes are all processed
//! with nested parallel iterators. The material table is shared read-only.
//! Results are identical to [`crate::bulk_apply`].
//!
//! # Example
//!
//! ```rust
//! use ink_core::{Document, Frame, Layer, Stroke};
//! use ink_ops::{parallel, HueSaturation};
//!
//! let mut doc = Document::new();
//! doc.layers.push(Layer::new("A").with_frame(Frame::new(1).with_stroke(Stroke::new(0))));
//! let stats = parallel::bulk_apply(&mut doc, &HueSaturation::default());
//! assert_eq!(stats.visited, 1);
//! ```

use ink_core::{Document, Layer};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::host::{BulkStats, StrokeContext};
use crate::modifier::StrokeModifier;

/// Run `modifier` over every stroke of `document` in parallel.
pub fn bulk_apply<M>(document: &mut Document, modifier: &M) -> BulkStats
where
    M: StrokeModifier + Sync + ?Sized,
{
    trace!(modifier = modifier.info().name, "parallel::bulk_apply");

    let materials = &document.materials;
    let stats = document
        .layers
        .par_iter_mut()
        .map(|layer| {
            let Layer {
                name,
                pass_index,
                frames,
            } = layer;
            let name = name.as_str();
            let pass_index = *pass_index;

            frames
                .par_iter_mut()
                .map(|frame| {
                    let frame_number = frame.frame_number;
                    frame
                        .strokes
                        .par_iter_mut()
                        .map(|stroke| {
                            let ctx = StrokeContext {
                                layer_name: name,
                                layer_pass_index: pass_index,
                                frame_number,
                                materials,
                            };
                            BulkStats {
                                visited: 1,
                                affected: usize::from(modifier.deform_stroke(&ctx, stroke)),
                            }
                        })
                        .reduce(BulkStats::default, |a, b| a + b)
                })
                .reduce(BulkStats::default, |a, b| a + b)
        })
        .reduce(BulkStats::default, |a, b| a + b);

    debug!(
        modifier = modifier.info().name,
        visited = stats.visited,
        affected = stats.affected,
        "Parallel bulk pass complete"
    );
    stats
}
