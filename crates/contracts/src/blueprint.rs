//! ReplayBlueprint - Config Loader output
//!
//! Describes a complete replay run: sensor descriptor, frame source,
//! render settings, and output routing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::{ResampleMethod, SensorDescriptor};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete replay configuration blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayBlueprint {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Sensor pad descriptor
    pub sensor: SensorDescriptor,

    /// Frame source
    pub source: SourceConfig,

    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Output routing
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

/// Where replay frames come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// JSONL recording on disk, one frame object per line
    Recording { path: PathBuf },

    /// Deterministic synthetic pressure field (no hardware required)
    Synthetic {
        #[serde(default = "default_frame_count")]
        frame_count: usize,
        #[serde(default = "default_interval_s")]
        interval_s: f64,
    },
}

fn default_frame_count() -> usize {
    100
}

fn default_interval_s() -> f64 {
    0.1
}

/// Render settings: temporal window, target resolution, method, ramp, range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Temporal aggregation window (seconds, inclusive both ends)
    #[serde(default = "default_window_s")]
    pub window_s: f64,

    /// Target resolution
    #[serde(default = "default_target_dim")]
    pub target_width: usize,
    #[serde(default = "default_target_dim")]
    pub target_height: usize,

    /// Resampling method
    #[serde(default)]
    pub method: ResampleMethod,

    /// Color ramp name (resolved by the ramp provider, case-insensitive)
    #[serde(default = "default_ramp")]
    pub ramp: String,

    /// Optional overrides of the sensor descriptor's value range
    #[serde(default)]
    pub range_min: Option<f64>,
    #[serde(default)]
    pub range_max: Option<f64>,
}

fn default_window_s() -> f64 {
    1.0
}

fn default_target_dim() -> usize {
    256
}

fn default_ramp() -> String {
    "jet".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_s: default_window_s(),
            target_width: default_target_dim(),
            target_height: default_target_dim(),
            method: ResampleMethod::default(),
            ramp: default_ramp(),
            range_min: None,
            range_max: None,
        }
    }
}

impl RenderConfig {
    /// Effective value range: explicit override or the descriptor's bounds.
    pub fn effective_range(&self, sensor: &SensorDescriptor) -> (f64, f64) {
        (
            self.range_min.unwrap_or(sensor.min_value),
            self.range_max.unwrap_or(sensor.max_value),
        )
    }
}

/// Sink type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkType {
    /// PNG frames plus render metadata JSON on disk
    Png,
    /// Frame summaries via tracing
    Log,
}

/// Output sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Unique sink name (logging/metrics label)
    pub name: String,

    /// Sink type
    pub sink_type: SinkType,

    /// Type-specific parameters (e.g. `base_path` for PNG sinks)
    #[serde(default)]
    pub params: HashMap<String, String>,
}
