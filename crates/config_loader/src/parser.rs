//! Configuration parsing, TOML (primary) and JSON.

use contracts::{ReplayBlueprint, ReplayError};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (recommended)
    Toml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// Infer format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML configuration
pub fn parse_toml(content: &str) -> Result<ReplayBlueprint, ReplayError> {
    toml::from_str(content).map_err(|e| ReplayError::ConfigParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse JSON configuration
pub fn parse_json(content: &str) -> Result<ReplayBlueprint, ReplayError> {
    serde_json::from_str(content).map_err(|e| ReplayError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse configuration in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<ReplayBlueprint, ReplayError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{ResampleMethod, SinkType, SourceConfig};

    #[test]
    fn test_parse_toml_full() {
        let content = r#"
            [sensor]
            id = "pad_a1"
            rows = 16
            cols = 16
            min_value = 0.0
            max_value = 4095.0
            units = "kPa"

            [source]
            kind = "recording"
            path = "run.jsonl"

            [render]
            window_s = 2.0
            target_width = 128
            target_height = 128
            method = "bicubic"
            ramp = "viridis"

            [[sinks]]
            name = "disk"
            sink_type = "png"
            params = { base_path = "./out" }

            [[sinks]]
            name = "console"
            sink_type = "log"
        "#;
        let bp = parse_toml(content).unwrap();
        assert_eq!(bp.sensor.units, "kPa");
        assert!(matches!(bp.source, SourceConfig::Recording { .. }));
        assert_eq!(bp.render.method, ResampleMethod::Bicubic);
        assert_eq!(bp.sinks.len(), 2);
        assert_eq!(bp.sinks[0].sink_type, SinkType::Png);
    }

    #[test]
    fn test_parse_toml_invalid_method() {
        let content = r#"
            [sensor]
            id = "pad"
            rows = 8
            cols = 8
            min_value = 0.0
            max_value = 1024.0

            [source]
            kind = "synthetic"

            [render]
            method = "nearest"
        "#;
        let err = parse_toml(content).unwrap_err();
        assert!(matches!(err, ReplayError::ConfigParse { .. }));
    }

    #[test]
    fn test_parse_json_minimal() {
        let content = r#"{
            "sensor": {"id": "pad", "rows": 8, "cols": 8, "min_value": 0.0, "max_value": 1024.0},
            "source": {"kind": "synthetic", "frame_count": 5}
        }"#;
        let bp = parse_json(content).unwrap();
        assert_eq!(bp.sensor.rows, 8);
    }
}
