//! Hue/Saturation presets as YAML.
//!
//! Every field is optional and falls back to the neutral defaults:
//!
//! ```yaml
//! hsv: [0.55, 0.8, 1.0]
//! mode: fill            # stroke | fill | both
//! filter:
//!   layer_name: Lines
//!   invert_layer: true
//!   pass_index: 2
//! ```
//!
//! Presets are validated after parsing; non-finite HSV values are rejected.

use std::fs;
use std::path::Path;

use ink_ops::HueSaturationParams;
use tracing::{debug, trace};

use crate::error::{IoError, IoResult};

/// Parse and validate a preset from YAML text.
pub fn preset_from_str(yaml: &str) -> IoResult<HueSaturationParams> {
    // an empty document is the default preset
    if yaml.trim().is_empty() {
        return Ok(HueSaturationParams::default());
    }
    let params: HueSaturationParams = serde_yaml::from_str(yaml)?;
    params.validate()?;
    Ok(params)
}

/// Encode a preset as YAML.
pub fn preset_to_string(params: &HueSaturationParams) -> IoResult<String> {
    Ok(serde_yaml::to_string(params)?)
}

/// Read a preset file.
pub fn read_preset(path: impl AsRef<Path>) -> IoResult<HueSaturationParams> {
    let path = path.as_ref();
    trace!(path = %path.display(), "read_preset");
    if !path.exists() {
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let params = preset_from_str(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), hsv = ?params.hsv, mode = ?params.mode, "Loaded preset");
    Ok(params)
}

/// Write a preset file.
pub fn write_preset(path: impl AsRef<Path>, params: &HueSaturationParams) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), "write_preset");
    fs::write(path, preset_to_string(params)?)?;
    Ok(())
}
