//! # Ingestion
//!
//! Frame sources feeding the playback history.
//!
//! Responsibilities:
//! - JSONL frame recordings (load/save)
//! - Deterministic synthetic pressure field for hardware-free runs
//! - Building a [`FrameHistory`] from a [`SourceConfig`]

mod recording;
mod synth;

pub use recording::{load_frames, save_frames};
pub use synth::{SyntheticField, SyntheticFieldConfig};

use contracts::{ReplayError, SensorDescriptor, SourceConfig};
use playback::FrameHistory;
use tracing::info;

/// Build a frame history from the configured source.
pub fn build_history(
    source: &SourceConfig,
    sensor: &SensorDescriptor,
) -> Result<FrameHistory, ReplayError> {
    let frames = match source {
        SourceConfig::Recording { path } => {
            let frames = load_frames(path)?;
            info!(path = %path.display(), frames = frames.len(), "recording loaded");
            frames
        }
        SourceConfig::Synthetic {
            frame_count,
            interval_s,
        } => {
            let config = SyntheticFieldConfig {
                rows: sensor.rows,
                cols: sensor.cols,
                frame_count: *frame_count,
                interval_s: *interval_s,
                peak: sensor.max_value,
            };
            let frames = SyntheticField::new(config).generate();
            info!(frames = frames.len(), "synthetic history generated");
            frames
        }
    };

    // Shape check here so aggregation never sees a foreign grid
    for frame in &frames {
        if frame.readings.shape() != sensor.shape() {
            return Err(ReplayError::ShapeMismatch {
                expected: sensor.shape(),
                actual: frame.readings.shape(),
                timestamp: frame.timestamp,
            });
        }
    }

    Ok(FrameHistory::from_frames(frames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::SensorId;

    fn sensor(rows: usize, cols: usize) -> SensorDescriptor {
        SensorDescriptor {
            id: SensorId::new("pad"),
            rows,
            cols,
            min_value: 0.0,
            max_value: 1024.0,
            units: "raw".to_string(),
        }
    }

    #[test]
    fn test_build_synthetic_history() {
        let source = SourceConfig::Synthetic {
            frame_count: 10,
            interval_s: 0.5,
        };
        let history = build_history(&source, &sensor(8, 8)).unwrap();
        assert_eq!(history.len(), 10);
        let snap = history.snapshot();
        assert_eq!(snap.first().unwrap().timestamp, 0.0);
        assert_eq!(snap.last().unwrap().timestamp, 4.5);
    }
}
