//! Deterministic synthetic pressure field.
//!
//! Two Gaussian pressure blobs drift across the pad on slow sinusoidal
//! paths over a small noise floor. Fully deterministic in the config, so
//! integration tests can assert on rendered output.

use contracts::{Frame, ReadingGrid};

/// Synthetic field parameters.
#[derive(Debug, Clone)]
pub struct SyntheticFieldConfig {
    /// Native grid rows
    pub rows: usize,

    /// Native grid columns
    pub cols: usize,

    /// Number of frames to generate
    pub frame_count: usize,

    /// Spacing between frame timestamps (seconds)
    pub interval_s: f64,

    /// Peak reading at a blob center
    pub peak: f64,
}

impl Default for SyntheticFieldConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            frame_count: 100,
            interval_s: 0.1,
            peak: 1024.0,
        }
    }
}

/// Synthetic pressure field generator.
#[derive(Debug)]
pub struct SyntheticField {
    config: SyntheticFieldConfig,
}

impl SyntheticField {
    pub fn new(config: SyntheticFieldConfig) -> Self {
        Self { config }
    }

    /// Generate the full frame sequence, timestamps starting at 0.
    pub fn generate(&self) -> Vec<Frame> {
        (0..self.config.frame_count)
            .map(|i| self.frame_at(i))
            .collect()
    }

    fn frame_at(&self, index: usize) -> Frame {
        let cfg = &self.config;
        let t = index as f64 * cfg.interval_s;

        // Blob centers orbit the pad at different rates and phases
        let (rows, cols) = (cfg.rows as f64, cfg.cols as f64);
        let c1 = (
            rows * (0.5 + 0.3 * (0.40 * t).sin()),
            cols * (0.5 + 0.3 * (0.25 * t).cos()),
        );
        let c2 = (
            rows * (0.5 + 0.25 * (0.15 * t + 1.3).cos()),
            cols * (0.5 + 0.35 * (0.55 * t + 0.7).sin()),
        );
        let sigma = rows.min(cols) / 6.0;

        let mut values = Vec::with_capacity(cfg.rows * cfg.cols);
        for r in 0..cfg.rows {
            for c in 0..cfg.cols {
                let g1 = gaussian(r as f64, c as f64, c1, sigma);
                let g2 = gaussian(r as f64, c as f64, c2, sigma * 0.8);
                // Noise floor at 0.2% of peak keeps idle cells just above zero
                let floor = 0.002 * cfg.peak;
                let value = floor + cfg.peak * (g1 + 0.6 * g2).min(1.0);
                values.push(value.round() as i32);
            }
        }

        // Shape is rows x cols by construction
        let readings = ReadingGrid::new(cfg.rows, cfg.cols, values)
            .expect("synthetic grid matches its own shape");
        Frame::new(t, readings).with_frame_id(index as u64)
    }
}

fn gaussian(r: f64, c: f64, center: (f64, f64), sigma: f64) -> f64 {
    let dr = r - center.0;
    let dc = c - center.1;
    (-(dr * dr + dc * dc) / (2.0 * sigma * sigma)).exp()
}
