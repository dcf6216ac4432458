//! Temporal aggregation: reduce a window of frames to one median grid.

use std::sync::Arc;

use contracts::{Frame, HistorySnapshot, ReplayError};
use nalgebra::DMatrix;
use tracing::trace;

/// Result of aggregating one time window.
#[derive(Debug, Clone)]
pub struct WindowAggregate {
    /// Per-cell aggregated values at native resolution
    pub grid: DMatrix<f64>,

    /// Number of frames that fell inside the window
    pub frame_count: usize,
}

/// Aggregate the frames within `[current.timestamp - window_s, current.timestamp]`
/// (inclusive both ends) into one per-cell statistic grid.
///
/// Per cell the statistic is the sorted element at index `n / 2` - for even
/// window sizes this is the upper-middle element, not the mean of the two
/// middle elements. That tie-break is part of the contract.
///
/// The selection is sorted by timestamp before reduction; history insertion
/// order is not trusted here.
///
/// # Errors
/// - [`ReplayError::EmptyWindow`] when no frame qualifies
/// - [`ReplayError::ShapeMismatch`] when a selected frame's grid shape
///   differs from the current frame's
pub fn median_window(
    snapshot: &HistorySnapshot,
    current: &Frame,
    window_s: f64,
) -> Result<WindowAggregate, ReplayError> {
    let t_end = current.timestamp;
    let t_start = t_end - window_s;

    let mut selected: Vec<&Arc<Frame>> = snapshot
        .frames()
        .iter()
        .filter(|f| f.timestamp >= t_start && f.timestamp <= t_end)
        .collect();

    if selected.is_empty() {
        return Err(ReplayError::EmptyWindow {
            t_current: t_end,
            window_s,
        });
    }

    selected.sort_by(|a, b| {
        a.timestamp
            .partial_cmp(&b.timestamp)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let (rows, cols) = current.readings.shape();
    for frame in &selected {
        if frame.readings.shape() != (rows, cols) {
            return Err(ReplayError::ShapeMismatch {
                expected: (rows, cols),
                actual: frame.readings.shape(),
                timestamp: frame.timestamp,
            });
        }
    }

    trace!(
        t_start,
        t_end,
        frame_count = selected.len(),
        "aggregating window"
    );

    let n = selected.len();
    let mut cell = vec![0i32; n];
    let mut grid = DMatrix::<f64>::zeros(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            for (i, frame) in selected.iter().enumerate() {
                cell[i] = frame.readings.get(r, c);
            }
            cell.sort_unstable();
            grid[(r, c)] = f64::from(cell[n / 2]);
        }
    }

    Ok(WindowAggregate {
        grid,
        frame_count: n,
    })
}
