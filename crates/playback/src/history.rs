//! Append-only frame history with timestamp-order tracking.

use std::sync::Arc;

use contracts::{Frame, HistorySnapshot};
use tracing::warn;

/// Ordered, append-only collection of sensor frames.
///
/// Intended to be non-decreasing by timestamp. Appends are never rejected;
/// out-of-order arrivals are counted and logged, and the aggregation side
/// sorts its window selection defensively, so results never depend on
/// insertion order.
#[derive(Debug, Default)]
pub struct FrameHistory {
    frames: Vec<Arc<Frame>>,
    out_of_order_count: u64,
    last_timestamp: Option<f64>,
}

impl FrameHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from a batch of frames (e.g. a loaded recording).
    pub fn from_frames(frames: impl IntoIterator<Item = Frame>) -> Self {
        let mut history = Self::new();
        for frame in frames {
            history.push(frame);
        }
        history
    }

    /// Append a frame.
    ///
    /// Frames are never mutated or removed afterwards.
    pub fn push(&mut self, frame: Frame) {
        if let Some(last) = self.last_timestamp {
            if frame.timestamp < last {
                self.out_of_order_count += 1;
                warn!(
                    timestamp = frame.timestamp,
                    last_timestamp = last,
                    out_of_order_total = self.out_of_order_count,
                    "frame appended out of timestamp order"
                );
            }
        }
        self.last_timestamp = Some(frame.timestamp);
        self.frames.push(Arc::new(frame));
    }

    /// Number of frames appended so far
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the history holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total out-of-order appends observed
    pub fn out_of_order_count(&self) -> u64 {
        self.out_of_order_count
    }

    /// Immutable snapshot for a pipeline invocation.
    ///
    /// O(n) pointer clones; the frames themselves are shared, so renders
    /// in progress can never race a concurrent append.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::new(self.frames.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ReadingGrid;

    fn frame(t: f64) -> Frame {
        Frame::new(t, ReadingGrid::filled(2, 2, 0))
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_appends() {
        let mut history = FrameHistory::new();
        history.push(frame(0.0));
        history.push(frame(1.0));

        let snapshot = history.snapshot();
        history.push(frame(2.0));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_out_of_order_appends_are_counted_not_rejected() {
        let mut history = FrameHistory::new();
        history.push(frame(10.0));
        history.push(frame(5.0));
        history.push(frame(7.0));

        assert_eq!(history.len(), 3);
        assert_eq!(history.out_of_order_count(), 1);
    }

    #[test]
    fn test_from_frames_preserves_order() {
        let history = FrameHistory::from_frames([frame(0.0), frame(1.0), frame(2.0)]);
        let snapshot = history.snapshot();
        assert_eq!(snapshot.first().unwrap().timestamp, 0.0);
        assert_eq!(snapshot.last().unwrap().timestamp, 2.0);
    }
}
