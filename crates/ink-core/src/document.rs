//! Layer -> frame -> stroke hierarchy.
//!
//! A [`Document`] owns its layers and a [`MaterialTable`]. Layers hold
//! keyframes, keyframes hold strokes. Traversal order is storage order.

use serde::{Deserialize, Serialize};

use crate::material::MaterialTable;
use crate::stroke::Stroke;

/// A keyframe of a layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Scene frame this keyframe starts at.
    #[serde(default)]
    pub frame_number: i32,
    /// Strokes drawn on this frame.
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl Frame {
    /// Create an empty keyframe.
    pub fn new(frame_number: i32) -> Self {
        Self {
            frame_number,
            strokes: Vec::new(),
        }
    }

    /// Builder: append a stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.strokes.push(stroke);
        self
    }
}

/// A named drawing layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name, matched by layer filters.
    pub name: String,
    /// Layer pass index (0 = unset).
    #[serde(default)]
    pub pass_index: u32,
    /// Keyframes in time order.
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass_index: 0,
            frames: Vec::new(),
        }
    }

    /// Builder: set the pass index.
    pub fn with_pass_index(mut self, pass_index: u32) -> Self {
        self.pass_index = pass_index;
        self
    }

    /// Builder: append a keyframe.
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Total strokes across all keyframes.
    pub fn stroke_count(&self) -> usize {
        self.frames.iter().map(|f| f.strokes.len()).sum()
    }
}

/// A stroke drawing: layers plus the material slots their strokes reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Layers in stacking order.
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Material slots.
    #[serde(default)]
    pub materials: MaterialTable,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate every stroke in traversal order.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.layers
            .iter()
            .flat_map(|l| l.frames.iter())
            .flat_map(|f| f.strokes.iter())
    }

    /// Total frames across layers.
    pub fn frame_count(&self) -> usize {
        self.layers.iter().map(|l| l.frames.len()).sum()
    }

    /// Total strokes across layers.
    pub fn stroke_count(&self) -> usize {
        self.layers.iter().map(Layer::stroke_count).sum()
    }

    /// Total points across strokes.
    pub fn point_count(&self) -> usize {
        self.strokes().map(Stroke::len).sum()
    }

    /// Layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}
