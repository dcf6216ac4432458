//! Value-to-color mapping through a named ramp.

use contracts::{ColorRamp, PixelBuffer, Rgba};
use nalgebra::DMatrix;

/// Alpha applied to near-zero readings so an idle pad reads as transparent.
pub const LOW_VALUE_ALPHA: f32 = 0.1;

/// Fraction of the range maximum below which a cell is treated as near-zero.
pub const LOW_VALUE_FRACTION: f64 = 0.01;

/// Map a resampled grid into an RGBA pixel buffer.
///
/// Per cell: clamp the value into `[min, max]`, remap linearly into
/// `[0, ramp.len())`, truncate to a ramp index (clamped to the last entry),
/// and look up the ramp color. Cells whose raw value sits below
/// `max * 0.01` get their alpha forced to [`LOW_VALUE_ALPHA`] regardless of
/// where the clamped value lands in the range.
///
/// Never errors: everything clamps by construction, and a degenerate range
/// (`max <= min`) maps every cell to ramp index 0.
pub fn map_grid(grid: &DMatrix<f64>, min: f64, max: f64, ramp: &ColorRamp) -> PixelBuffer {
    let (height, width) = (grid.nrows(), grid.ncols());
    let len = ramp.len();
    let span = max - min;
    let low_threshold = max * LOW_VALUE_FRACTION;

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = grid[(y, x)];
            let clamped = value.max(min).min(max);
            let index = if span > 0.0 {
                let mapped = (clamped - min) / span * len as f64;
                (mapped as usize).min(len - 1)
            } else {
                0
            };
            let color = ramp.color_at(index);
            pixels.push(apply_transparency(color, value, low_threshold));
        }
    }
    PixelBuffer::new(width, height, pixels)
}

fn apply_transparency(color: Rgba, value: f64, low_threshold: f64) -> Rgba {
    if value < low_threshold {
        color.with_alpha(LOW_VALUE_ALPHA)
    } else {
        color
    }
}
