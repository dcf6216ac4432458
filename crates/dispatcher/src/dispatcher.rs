//! Dispatcher - fan-out of rendered frames to sinks.

use contracts::{RenderSink, RenderedFrame, ReplayError, SinkConfig, SinkType};
use tracing::{error, info};

use crate::metrics::SinkMetrics;
use crate::sinks::{LogSink, PngSink};

struct SinkEntry {
    sink: Box<dyn RenderSink>,
    metrics: SinkMetrics,
}

/// Create a sink from configuration.
fn create_sink(config: &SinkConfig) -> Box<dyn RenderSink> {
    match config.sink_type {
        SinkType::Log => Box::new(LogSink::new(&config.name)),
        SinkType::Png => Box::new(PngSink::from_params(&config.name, &config.params)),
    }
}

/// Sequential fan-out of rendered frames to all configured sinks.
///
/// A failing sink is logged and counted; the frame still reaches the
/// remaining sinks.
pub struct Dispatcher {
    entries: Vec<SinkEntry>,
}

impl Dispatcher {
    /// Build a dispatcher from sink configurations.
    pub fn from_configs(configs: &[SinkConfig]) -> Self {
        let entries = configs
            .iter()
            .map(|config| {
                info!(sink = %config.name, sink_type = ?config.sink_type, "sink created");
                SinkEntry {
                    sink: create_sink(config),
                    metrics: SinkMetrics::new(),
                }
            })
            .collect();
        Self { entries }
    }

    /// Wrap pre-built sinks (for testing).
    pub fn with_sinks(sinks: Vec<Box<dyn RenderSink>>) -> Self {
        Self {
            entries: sinks
                .into_iter()
                .map(|sink| SinkEntry {
                    sink,
                    metrics: SinkMetrics::new(),
                })
                .collect(),
        }
    }

    /// Number of configured sinks
    pub fn sink_count(&self) -> usize {
        self.entries.len()
    }

    /// Write one frame to every sink. Returns the number of failed writes.
    pub fn dispatch(&mut self, frame: &RenderedFrame) -> usize {
        let mut failures = 0;
        for entry in &mut self.entries {
            match entry.sink.write(frame) {
                Ok(()) => entry.metrics.record_write(),
                Err(e) => {
                    entry.metrics.record_failure();
                    failures += 1;
                    error!(
                        sink = entry.sink.name(),
                        frame_id = frame.frame_id,
                        error = %e,
                        "sink write failed"
                    );
                }
            }
        }
        failures
    }

    /// Metrics snapshot per sink.
    pub fn metrics(&self) -> Vec<(String, SinkMetrics)> {
        self.entries
            .iter()
            .map(|e| (e.sink.name().to_string(), e.metrics))
            .collect()
    }

    /// Flush all sinks, reporting the first error.
    pub fn flush_all(&mut self) -> Result<(), ReplayError> {
        for entry in &mut self.entries {
            entry.sink.flush()?;
        }
        Ok(())
    }

    /// Close all sinks; errors are logged, not propagated.
    pub fn close_all(&mut self) {
        for entry in &mut self.entries {
            if let Err(e) = entry.sink.close() {
                error!(sink = entry.sink.name(), error = %e, "sink close failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{PixelBuffer, RenderMeta, Rgba};
    use std::collections::HashMap;

    struct FailingSink;

    impl RenderSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn write(&mut self, _frame: &RenderedFrame) -> Result<(), ReplayError> {
            Err(ReplayError::sink_write("failing", "disk full"))
        }
    }

    fn frame() -> RenderedFrame {
        RenderedFrame {
            frame_id: 0,
            t_current: 0.0,
            pixels: PixelBuffer::new(1, 1, vec![Rgba::new(0.0, 0.0, 0.0, 1.0)]),
            meta: RenderMeta::default(),
        }
    }

    #[test]
    fn test_from_configs_builds_all_sinks() {
        let configs = vec![SinkConfig {
            name: "log".to_string(),
            sink_type: SinkType::Log,
            params: HashMap::new(),
        }];
        let dispatcher = Dispatcher::from_configs(&configs);
        assert_eq!(dispatcher.sink_count(), 1);
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let mut dispatcher = Dispatcher::with_sinks(vec![
            Box::new(FailingSink),
            Box::new(LogSink::new("ok")),
        ]);
        let failures = dispatcher.dispatch(&frame());
        assert_eq!(failures, 1);

        let metrics = dispatcher.metrics();
        assert_eq!(metrics[0].1.failure_count(), 1);
        assert_eq!(metrics[1].1.write_count(), 1);
    }
}
