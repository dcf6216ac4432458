//! Layered error definitions
//!
//! Categorized by source: config / playback / aggregation / resampling / sink

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ReplayError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    /// Unknown color ramp name
    #[error("unknown color ramp: '{name}'")]
    UnknownRamp { name: String },

    /// Unknown resampling method
    #[error("unknown resampling method: '{name}'")]
    UnknownMethod { name: String },

    // ===== Playback Errors =====
    /// Cursor operation attempted against an empty history
    #[error("frame history is empty")]
    EmptyHistory,

    /// No frame in history carries the requested timestamp
    #[error("no frame with timestamp {timestamp} in history")]
    FrameNotFound { timestamp: f64 },

    // ===== Aggregation Errors =====
    /// No frames fall inside the requested time window
    #[error("no frames within {window_s}s of t={t_current:.3}")]
    EmptyWindow { t_current: f64, window_s: f64 },

    /// A window frame's grid shape differs from the current frame's
    #[error(
        "grid shape mismatch at t={timestamp}: expected {}x{}, got {}x{}",
        expected.0, expected.1, actual.0, actual.1
    )]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        timestamp: f64,
    },

    // ===== Resampling Errors =====
    /// Source or target grid too small for the selected kernel
    #[error("grid bounds error: {message}")]
    GridBounds { message: String },

    // ===== Sink Errors =====
    /// Sink write error
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ReplayError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create unknown ramp error
    pub fn unknown_ramp(name: impl Into<String>) -> Self {
        Self::UnknownRamp { name: name.into() }
    }

    /// Create grid bounds error
    pub fn grid_bounds(message: impl Into<String>) -> Self {
        Self::GridBounds {
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_message_names_bounds() {
        let err = ReplayError::EmptyWindow {
            t_current: 30.0,
            window_s: 15.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("15"), "window missing: {msg}");
        assert!(msg.contains("30.000"), "current timestamp missing: {msg}");
    }

    #[test]
    fn test_helper_constructors() {
        let err = ReplayError::config_validation("render.window_s", "must be > 0");
        assert!(matches!(err, ReplayError::ConfigValidation { .. }));
        assert!(err.to_string().contains("render.window_s"));
    }
}
