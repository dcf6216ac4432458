//! Render metric recording and running statistics.
//!
//! Collected from [`RenderMeta`] every time the pipeline produces a frame.

use contracts::RenderMeta;
use metrics::{counter, gauge, histogram};

/// Record metrics from one rendered frame.
///
/// # Example
///
/// ```ignore
/// use observability::metrics::record_render_metrics;
///
/// let frame = heatmap::render(&snapshot, cursor, frame_id, &options, &ramps)?;
/// record_render_metrics(&frame.meta, frame.frame_id);
/// ```
pub fn record_render_metrics(meta: &RenderMeta, frame_id: u64) {
    counter!("heatmap_replay_frames_total").increment(1);
    gauge!("heatmap_replay_last_frame_id").set(frame_id as f64);

    histogram!("heatmap_replay_render_elapsed_us").record(meta.elapsed_us as f64);

    gauge!("heatmap_replay_frames_in_window").set(meta.frames_in_window as f64);
    histogram!("heatmap_replay_frames_in_window_hist").record(meta.frames_in_window as f64);
    histogram!("heatmap_replay_window_size_ms").record(meta.window_s * 1000.0);

    counter!("heatmap_replay_frames_by_method_total", "method" => meta.method.clone())
        .increment(1);
}

/// Record frames appended to the history by ingestion.
pub fn record_frames_ingested(count: u64) {
    counter!("heatmap_replay_frames_ingested_total").increment(count);
}

/// Record per-sink write totals (end-of-run snapshot from the dispatcher).
pub fn record_sink_totals(sink: &str, writes: u64, failures: u64) {
    counter!("heatmap_replay_sink_writes_total", "sink" => sink.to_string()).increment(writes);
    counter!("heatmap_replay_sink_failures_total", "sink" => sink.to_string()).increment(failures);
}

/// Running min/mean/max over a stream of samples.
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn record(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            count: self.count,
            mean: self.mean(),
            min: if self.count > 0 { self.min } else { 0.0 },
            max: if self.count > 0 { self.max } else { 0.0 },
        }
    }
}

/// Point-in-time view of a [`RunningStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// In-process aggregation of render metrics for the end-of-run summary.
#[derive(Debug, Clone, Default)]
pub struct RenderStatsAggregator {
    frames: u64,
    elapsed_us: RunningStats,
    frames_in_window: RunningStats,
}

impl RenderStatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one rendered frame into the aggregate.
    pub fn record(&mut self, meta: &RenderMeta) {
        self.frames += 1;
        self.elapsed_us.record(meta.elapsed_us as f64);
        self.frames_in_window.record(meta.frames_in_window as f64);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_us(&self) -> StatsSummary {
        self.elapsed_us.summary()
    }

    pub fn frames_in_window(&self) -> StatsSummary {
        self.frames_in_window.summary()
    }
}
