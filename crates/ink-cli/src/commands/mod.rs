//! CLI command implementations

pub mod batch;
pub mod hue;
pub mod info;

use anyhow::{Context, Result};
use ink_core::Document;
use ink_ops::{HueSaturationParams, ModifyColor};
use std::path::Path;

use crate::AdjustArgs;

/// Load document from path
pub fn load_document(path: &Path) -> Result<Document> {
    ink_io::read_document(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save document to path
pub fn save_document(path: &Path, document: &Document) -> Result<()> {
    ink_io::write_document(path, document)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Resolve modifier parameters: preset first, then command-line overrides.
pub fn build_params(args: &AdjustArgs) -> Result<HueSaturationParams> {
    let mut params = match &args.preset {
        Some(path) => ink_io::read_preset(path)
            .with_context(|| format!("Failed to load preset: {}", path.display()))?,
        None => HueSaturationParams::default(),
    };

    if let Some(h) = args.hue {
        params.hsv[0] = h;
    }
    if let Some(s) = args.saturation {
        params.hsv[1] = s;
    }
    if let Some(v) = args.value {
        params.hsv[2] = v;
    }
    if let Some(mode) = &args.mode {
        params.mode = mode.parse::<ModifyColor>()?;
    }

    let filter = &mut params.filter;
    if let Some(layer) = &args.layer {
        filter.layer_name = layer.clone();
    }
    if let Some(material) = &args.material {
        filter.material_name = material.clone();
    }
    if let Some(pass) = args.pass {
        filter.pass_index = pass;
    }
    if let Some(pass) = args.layer_pass {
        filter.layer_pass_index = pass;
    }
    filter.invert_layer |= args.invert_layer;
    filter.invert_material |= args.invert_material;
    filter.invert_pass |= args.invert_pass;
    filter.invert_layer_pass |= args.invert_layer_pass;

    params.validate()?;
    Ok(params)
}
