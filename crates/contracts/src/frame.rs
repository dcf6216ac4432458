//! Frame - one timestamped sample of the sensor's 2-D reading grid.

use serde::{Deserialize, Serialize};

use crate::ReplayError;

/// Row-major grid of raw integer readings at native sensor resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingGrid {
    rows: usize,
    cols: usize,
    values: Vec<i32>,
}

impl ReadingGrid {
    /// Create a grid, checking that `values` covers exactly `rows * cols` cells.
    pub fn new(rows: usize, cols: usize, values: Vec<i32>) -> Result<Self, ReplayError> {
        if rows == 0 || cols == 0 {
            return Err(ReplayError::grid_bounds(format!(
                "reading grid must be non-empty, got {rows}x{cols}"
            )));
        }
        if values.len() != rows * cols {
            return Err(ReplayError::grid_bounds(format!(
                "reading grid {rows}x{cols} expects {} values, got {}",
                rows * cols,
                values.len()
            )));
        }
        Ok(Self { rows, cols, values })
    }

    /// Grid filled with a single value. Mostly useful in tests and mocks.
    pub fn filled(rows: usize, cols: usize, value: i32) -> Self {
        Self {
            rows,
            cols,
            values: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols) pair, used for shape checks at the aggregation boundary.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Reading at `(row, col)`. Panics on out-of-range indices, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.rows && col < self.cols, "reading index out of range");
        self.values[row * self.cols + col]
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

/// One timestamped sensor sample. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Recording timestamp (seconds, f64) - primary clock
    pub timestamp: f64,

    /// Optional frame sequence number (for ordering/diagnostics)
    pub frame_id: Option<u64>,

    /// Native-resolution readings
    pub readings: ReadingGrid,
}

impl Frame {
    pub fn new(timestamp: f64, readings: ReadingGrid) -> Self {
        Self {
            timestamp,
            frame_id: None,
            readings,
        }
    }

    pub fn with_frame_id(mut self, frame_id: u64) -> Self {
        self.frame_id = Some(frame_id);
        self
    }
}
