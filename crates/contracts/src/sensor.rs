//! SensorDescriptor - native grid bounds and scalar range of one pressure pad.

use serde::{Deserialize, Serialize};

use crate::SensorId;

/// Static description of a pressure sensor pad.
///
/// Defines the native grid resolution and the scalar range fed to the
/// color mapper. Supplied by configuration; the pipeline never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorDescriptor {
    /// Sensor ID
    pub id: SensorId,

    /// Native grid rows
    pub rows: usize,

    /// Native grid columns
    pub cols: usize,

    /// Lower bound of the displayable value range
    pub min_value: f64,

    /// Upper bound of the displayable value range
    pub max_value: f64,

    /// Unit label (e.g. "kPa"), display only
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_units() -> String {
    "raw".to_string()
}

impl SensorDescriptor {
    /// (rows, cols) pair for shape checks against incoming frames.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
