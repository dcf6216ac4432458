//! Configuration validation.
//!
//! Rules:
//! - sensor grid is non-empty, value range is ordered
//! - window_s > 0
//! - target resolution >= 1x1
//! - bicubic requires a native grid of at least 4x4
//! - ramp name non-empty
//! - sink names unique
//! - synthetic source: frame_count >= 1, interval_s > 0
//! - explicit range override must stay ordered

use std::collections::HashSet;

use contracts::{ReplayBlueprint, ReplayError, ResampleMethod, SourceConfig};

/// Validate a blueprint.
///
/// Returns the first violation encountered, or Ok(()).
pub fn validate(blueprint: &ReplayBlueprint) -> Result<(), ReplayError> {
    validate_sensor(blueprint)?;
    validate_render(blueprint)?;
    validate_source(blueprint)?;
    validate_sinks(blueprint)?;
    Ok(())
}

fn validate_sensor(blueprint: &ReplayBlueprint) -> Result<(), ReplayError> {
    let sensor = &blueprint.sensor;

    if sensor.rows == 0 || sensor.cols == 0 {
        return Err(ReplayError::config_validation(
            "sensor.rows / sensor.cols",
            format!("grid must be non-empty, got {}x{}", sensor.rows, sensor.cols),
        ));
    }

    if sensor.min_value >= sensor.max_value {
        return Err(ReplayError::config_validation(
            "sensor.min_value / sensor.max_value",
            format!(
                "min_value ({}) must be < max_value ({})",
                sensor.min_value, sensor.max_value
            ),
        ));
    }

    Ok(())
}

fn validate_render(blueprint: &ReplayBlueprint) -> Result<(), ReplayError> {
    let render = &blueprint.render;

    if render.window_s <= 0.0 {
        return Err(ReplayError::config_validation(
            "render.window_s",
            format!("window must be > 0, got {}", render.window_s),
        ));
    }

    if render.target_width == 0 || render.target_height == 0 {
        return Err(ReplayError::config_validation(
            "render.target_width / render.target_height",
            format!(
                "target resolution must be >= 1x1, got {}x{}",
                render.target_width, render.target_height
            ),
        ));
    }

    if render.method == ResampleMethod::Bicubic
        && (blueprint.sensor.rows < 4 || blueprint.sensor.cols < 4)
    {
        return Err(ReplayError::config_validation(
            "render.method",
            format!(
                "bicubic needs a native grid of at least 4x4, sensor is {}x{}",
                blueprint.sensor.rows, blueprint.sensor.cols
            ),
        ));
    }

    if render.ramp.trim().is_empty() {
        return Err(ReplayError::config_validation(
            "render.ramp",
            "ramp name must be non-empty",
        ));
    }

    let (min, max) = render.effective_range(&blueprint.sensor);
    if min >= max {
        return Err(ReplayError::config_validation(
            "render.range_min / render.range_max",
            format!("effective range [{min}, {max}] must be ordered"),
        ));
    }

    Ok(())
}

fn validate_source(blueprint: &ReplayBlueprint) -> Result<(), ReplayError> {
    if let SourceConfig::Synthetic {
        frame_count,
        interval_s,
    } = &blueprint.source
    {
        if *frame_count == 0 {
            return Err(ReplayError::config_validation(
                "source.frame_count",
                "synthetic source needs at least one frame",
            ));
        }
        if *interval_s <= 0.0 {
            return Err(ReplayError::config_validation(
                "source.interval_s",
                format!("interval must be > 0, got {interval_s}"),
            ));
        }
    }
    Ok(())
}

fn validate_sinks(blueprint: &ReplayBlueprint) -> Result<(), ReplayError> {
    let mut seen = HashSet::new();
    for sink in &blueprint.sinks {
        if sink.name.trim().is_empty() {
            return Err(ReplayError::config_validation(
                "sinks[].name",
                "sink name must be non-empty",
            ));
        }
        if !seen.insert(&sink.name) {
            return Err(ReplayError::config_validation(
                format!("sinks[name={}]", sink.name),
                "duplicate sink name",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{SensorDescriptor, SensorId, SinkConfig, SinkType};
    use std::collections::HashMap;

    fn blueprint() -> ReplayBlueprint {
        ReplayBlueprint {
            version: Default::default(),
            sensor: SensorDescriptor {
                id: SensorId::new("pad"),
                rows: 8,
                cols: 8,
                min_value: 0.0,
                max_value: 1024.0,
                units: "raw".to_string(),
            },
            source: SourceConfig::Synthetic {
                frame_count: 10,
                interval_s: 0.1,
            },
            render: Default::default(),
            sinks: vec![],
        }
    }

    #[test]
    fn test_valid_blueprint_passes() {
        assert!(validate(&blueprint()).is_ok());
    }

    #[test]
    fn test_unordered_range_rejected() {
        let mut bp = blueprint();
        bp.sensor.min_value = 2000.0;
        let err = validate(&bp).unwrap_err();
        assert!(err.to_string().contains("min_value"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut bp = blueprint();
        bp.render.window_s = 0.0;
        assert!(validate(&bp).is_err());
    }

    #[test]
    fn test_bicubic_needs_4x4_native_grid() {
        let mut bp = blueprint();
        bp.render.method = ResampleMethod::Bicubic;
        bp.sensor.rows = 3;
        let err = validate(&bp).unwrap_err();
        assert!(err.to_string().contains("bicubic"));
    }

    #[test]
    fn test_range_override_must_stay_ordered() {
        let mut bp = blueprint();
        bp.render.range_min = Some(500.0);
        bp.render.range_max = Some(100.0);
        assert!(validate(&bp).is_err());
    }

    #[test]
    fn test_duplicate_sink_names_rejected() {
        let mut bp = blueprint();
        let sink = SinkConfig {
            name: "out".to_string(),
            sink_type: SinkType::Log,
            params: HashMap::new(),
        };
        bp.sinks = vec![sink.clone(), sink];
        let err = validate(&bp).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_zero_synthetic_frames_rejected() {
        let mut bp = blueprint();
        bp.source = SourceConfig::Synthetic {
            frame_count: 0,
            interval_s: 0.1,
        };
        assert!(validate(&bp).is_err());
    }
}
