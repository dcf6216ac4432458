//! RenderedFrame - pipeline output handed to the dispatcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PixelBuffer, ReplayError};

/// Spatial resampling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleMethod {
    #[default]
    Bilinear,
    Cosine,
    Bicubic,
}

impl ResampleMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bilinear => "bilinear",
            Self::Cosine => "cosine",
            Self::Bicubic => "bicubic",
        }
    }
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResampleMethod {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bilinear" => Ok(Self::Bilinear),
            "cosine" => Ok(Self::Cosine),
            "bicubic" => Ok(Self::Bicubic),
            other => Err(ReplayError::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Diagnostics attached to every rendered frame, fed to metrics and sinks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderMeta {
    /// Window span used for temporal aggregation (seconds)
    pub window_s: f64,

    /// Number of history frames that fell inside the window
    pub frames_in_window: usize,

    /// Resampling method name
    pub method: String,

    /// Color ramp name
    pub ramp: String,

    /// Target resolution
    pub target_width: usize,
    pub target_height: usize,

    /// Value range mapped onto the ramp
    pub range_min: f64,
    pub range_max: f64,

    /// Wall time spent in the pipeline (microseconds)
    pub elapsed_us: u64,
}

/// One fully rendered heatmap frame.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Sequence number assigned by the driver loop (monotonically increasing)
    pub frame_id: u64,

    /// Timestamp of the current (cursor-selected) source frame
    pub t_current: f64,

    /// RGBA output at target resolution
    pub pixels: PixelBuffer,

    /// Render diagnostics
    pub meta: RenderMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!(
            "Bicubic".parse::<ResampleMethod>().unwrap(),
            ResampleMethod::Bicubic
        );
        let err = "nearest".parse::<ResampleMethod>().unwrap_err();
        assert!(matches!(err, ReplayError::UnknownMethod { .. }));
    }

    #[test]
    fn test_method_serde_snake_case() {
        let json = serde_json::to_string(&ResampleMethod::Cosine).unwrap();
        assert_eq!(json, "\"cosine\"");
    }
}
