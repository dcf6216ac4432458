//! Replay run statistics.

use std::time::Duration;

use dispatcher::SinkMetrics;
use observability::RenderStatsAggregator;

/// Statistics from a replay run
#[derive(Debug, Clone, Default)]
pub struct ReplayStats {
    /// Total frames rendered
    pub frames_rendered: u64,

    /// Total sink writes that failed
    pub sink_failures: u64,

    /// Frames held in the history snapshot
    pub history_len: usize,

    /// Number of configured sinks
    pub sink_count: usize,

    /// Out-of-order frames observed during ingestion
    pub out_of_order: u64,

    /// Total duration of the replay run
    pub duration: Duration,

    /// Per-frame render metrics aggregator
    pub render: RenderStatsAggregator,

    /// Per-sink write/failure counts
    pub sink_metrics: Vec<(String, SinkMetrics)>,
}

impl ReplayStats {
    /// Calculate frames per second throughput
    pub fn fps(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.frames_rendered as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                      Replay Statistics                       ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");

        println!("📊 Overview");
        println!("   ├─ Duration: {:.2}s", self.duration.as_secs_f64());
        println!("   ├─ Frames rendered: {}", self.frames_rendered);
        println!("   ├─ FPS: {:.2}", self.fps());
        println!("   ├─ History frames: {}", self.history_len);
        println!("   ├─ Out-of-order frames: {}", self.out_of_order);
        println!("   └─ Sinks: {}", self.sink_count);

        let elapsed = self.render.elapsed_us();
        let in_window = self.render.frames_in_window();

        println!("\n📈 Render Pipeline");
        println!(
            "   ├─ Render time (us): mean {:.0}, min {:.0}, max {:.0}",
            elapsed.mean, elapsed.min, elapsed.max
        );
        println!(
            "   └─ Frames in window: mean {:.1}, min {:.0}, max {:.0}",
            in_window.mean, in_window.min, in_window.max
        );

        if !self.sink_metrics.is_empty() {
            println!("\n🗂  Sinks");
            for (name, metrics) in &self.sink_metrics {
                println!(
                    "   ├─ {}: {} written, {} failed",
                    name,
                    metrics.write_count(),
                    metrics.failure_count()
                );
            }
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_handles_zero_duration() {
        let stats = ReplayStats::default();
        assert_eq!(stats.fps(), 0.0);
    }

    #[test]
    fn test_fps() {
        let stats = ReplayStats {
            frames_rendered: 100,
            duration: Duration::from_secs(4),
            ..Default::default()
        };
        assert_eq!(stats.fps(), 25.0);
    }
}
