//! Material styles and material lookup.
//!
//! Strokes reference a material by index. The material provides the base
//! stroke and fill colors used when a stroke's own vertex color is unset.
//!
//! Lookup goes through the [`MaterialLookup`] trait so a host can back it with
//! whatever storage it already has. A missing material is not an error for the
//! color modifiers; they simply skip the fallback.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Base colors of a stroke material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialStyle {
    /// Material name, matched by name filters.
    #[serde(default)]
    pub name: String,
    /// Base stroke (line) color.
    #[serde(default)]
    pub stroke_color: Rgba,
    /// Base fill color.
    #[serde(default)]
    pub fill_color: Rgba,
    /// Material pass index (0 = unset).
    #[serde(default)]
    pub pass_index: u32,
}

impl MaterialStyle {
    /// Create a named material with the given base colors.
    pub fn new(name: impl Into<String>, stroke_color: Rgba, fill_color: Rgba) -> Self {
        Self {
            name: name.into(),
            stroke_color,
            fill_color,
            pass_index: 0,
        }
    }
}

/// Read-only `(material index) -> material` capability.
pub trait MaterialLookup {
    /// Material at `index`, or `None` when absent.
    fn material(&self, index: usize) -> Option<&MaterialStyle>;
}

impl MaterialLookup for [MaterialStyle] {
    #[inline]
    fn material(&self, index: usize) -> Option<&MaterialStyle> {
        self.get(index)
    }
}

impl MaterialLookup for Vec<MaterialStyle> {
    #[inline]
    fn material(&self, index: usize) -> Option<&MaterialStyle> {
        self.get(index)
    }
}

impl MaterialLookup for HashMap<usize, MaterialStyle> {
    #[inline]
    fn material(&self, index: usize) -> Option<&MaterialStyle> {
        self.get(&index)
    }
}

/// Ordered material slots of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialTable {
    slots: Vec<MaterialStyle>,
}

impl MaterialTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material, returning its index.
    pub fn push(&mut self, style: MaterialStyle) -> usize {
        self.slots.push(style);
        self.slots.len() - 1
    }

    /// Lookup that reports out-of-range indices as an error.
    pub fn get_checked(&self, index: usize) -> Result<&MaterialStyle> {
        self.slots
            .get(index)
            .ok_or_else(|| Error::invalid_material_index(index, self.slots.len()))
    }

    /// Index of the first material named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|m| m.name == name)
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate materials in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialStyle> {
        self.slots.iter()
    }
}

impl From<Vec<MaterialStyle>> for MaterialTable {
    fn from(slots: Vec<MaterialStyle>) -> Self {
        Self { slots }
    }
}

impl MaterialLookup for MaterialTable {
    #[inline]
    fn material(&self, index: usize) -> Option<&MaterialStyle> {
        self.slots.get(index)
    }
}
