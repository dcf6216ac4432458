//! JSON ramp asset parsing.
//!
//! Asset format:
//! ```json
//! { "name": "ember", "colors": [[0.0, 0.0, 0.0, 1.0], [1.0, 0.4, 0.0, 1.0]] }
//! ```
//! Components are floats in `[0, 1]`, `[r, g, b, a]` per entry.

use std::path::Path;

use contracts::{ColorRamp, ReplayError, Rgba};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RampAsset {
    name: String,
    colors: Vec<[f32; 4]>,
}

/// Parse a JSON ramp asset from disk.
pub fn load_ramp_file(path: &Path) -> Result<ColorRamp, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    parse_ramp(&content).map_err(|e| match e {
        ReplayError::ConfigParse { message, source } => ReplayError::ConfigParse {
            message: format!("{}: {message}", path.display()),
            source,
        },
        other => other,
    })
}

/// Parse a JSON ramp asset from a string.
pub fn parse_ramp(content: &str) -> Result<ColorRamp, ReplayError> {
    let asset: RampAsset = serde_json::from_str(content).map_err(|e| ReplayError::ConfigParse {
        message: format!("ramp asset parse error: {e}"),
        source: Some(Box::new(e)),
    })?;

    for (i, c) in asset.colors.iter().enumerate() {
        if c.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(ReplayError::config_validation(
                format!("ramp '{}' colors[{i}]", asset.name),
                format!("components must be within [0, 1], got {c:?}"),
            ));
        }
    }

    let colors = asset
        .colors
        .into_iter()
        .map(|[r, g, b, a]| Rgba::new(r, g, b, a))
        .collect();
    ColorRamp::new(asset.name, colors)
}
