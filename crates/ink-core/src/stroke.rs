//! Strokes and their points.
//!
//! A [`Stroke`] is an ordered poly-line of [`Point`]s. Each point carries its
//! own vertex color; the stroke carries a fill color used to shade the area it
//! encloses. Both colors start out unset (alpha zero) and defer to the
//! stroke's material until something writes them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

fn one() -> f32 {
    1.0
}

/// A single stroke point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position in object space.
    #[serde(default)]
    pub position: Vec3,
    /// Pen pressure, scales thickness.
    #[serde(default = "one")]
    pub pressure: f32,
    /// Color strength, scales opacity.
    #[serde(default = "one")]
    pub strength: f32,
    /// Per-point vertex color. Alpha zero means "use the material color".
    #[serde(default)]
    pub vertex_color: Rgba,
}

impl Point {
    /// Create a point at `position` with an unset vertex color.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            pressure: 1.0,
            strength: 1.0,
            vertex_color: Rgba::TRANSPARENT,
        }
    }

    /// Builder: set the vertex color.
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.vertex_color = color;
        self
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// One inked mark: points plus a fill color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in drawing order.
    #[serde(default)]
    pub points: Vec<Point>,
    /// Vertex fill color. Alpha zero means "use the material fill color".
    #[serde(default)]
    pub fill_color: Rgba,
    /// Index into the owning document's material table.
    #[serde(default)]
    pub material_index: usize,
    /// User-assigned grouping tag (0 = unset).
    #[serde(default)]
    pub pass_index: u32,
}

impl Stroke {
    /// Create an empty stroke using material `material_index`.
    pub fn new(material_index: usize) -> Self {
        Self {
            material_index,
            ..Self::default()
        }
    }

    /// Create a stroke from points.
    pub fn from_points(material_index: usize, points: Vec<Point>) -> Self {
        Self {
            points,
            material_index,
            ..Self::default()
        }
    }

    /// Builder: set the fill color.
    pub fn with_fill(mut self, fill: Rgba) -> Self {
        self.fill_color = fill;
        self
    }

    /// Builder: set the pass index.
    pub fn with_pass_index(mut self, pass_index: u32) -> Self {
        self.pass_index = pass_index;
        self
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the stroke has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
