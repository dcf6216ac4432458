//! Spatial resampling: rescale a value grid to a target resolution.
//!
//! Three interpolation strategies behind one trait, selected by
//! configuration. All neighbor indices are clamped into the source grid;
//! the rightmost/bottom target cell maps exactly onto the last source cell
//! and its `+1`/`+3` neighbor reads land on the clamp.

use std::f64::consts::PI;

use contracts::{ReplayError, ResampleMethod};
use nalgebra::DMatrix;

/// Resampling strategy: `(source grid, target size) -> target grid`.
pub trait Resampler: Sync {
    /// Strategy name (logging/metrics label)
    fn name(&self) -> &'static str;

    /// Rescale `src` to `height x width`.
    ///
    /// # Errors
    /// [`ReplayError::GridBounds`] when the target is empty or the source
    /// is too small for the kernel.
    fn resample(
        &self,
        src: &DMatrix<f64>,
        width: usize,
        height: usize,
    ) -> Result<DMatrix<f64>, ReplayError>;
}

/// Select the strategy implementation for a configured method.
pub fn resampler_for(method: ResampleMethod) -> &'static dyn Resampler {
    match method {
        ResampleMethod::Bilinear => &Bilinear,
        ResampleMethod::Cosine => &Cosine,
        ResampleMethod::Bicubic => &Bicubic,
    }
}

/// Continuous source coordinate for target index `i`.
///
/// `span` is the usable source extent (`len - 1` for 2x2 kernels, `len - 3`
/// for the 4x4 bicubic kernel). A single-cell target maps to coordinate 0.
fn axis_coord(i: usize, target_len: usize, span: usize) -> f64 {
    if target_len <= 1 {
        0.0
    } else {
        i as f64 / (target_len - 1) as f64 * span as f64
    }
}

/// Source sample with indices clamped into the grid.
fn sample(src: &DMatrix<f64>, row: i64, col: i64) -> f64 {
    let r = row.clamp(0, src.nrows() as i64 - 1) as usize;
    let c = col.clamp(0, src.ncols() as i64 - 1) as usize;
    src[(r, c)]
}

fn check_target(width: usize, height: usize) -> Result<(), ReplayError> {
    if width == 0 || height == 0 {
        return Err(ReplayError::grid_bounds(format!(
            "target resolution must be non-empty, got {width}x{height}"
        )));
    }
    Ok(())
}

fn check_source(src: &DMatrix<f64>) -> Result<(), ReplayError> {
    if src.nrows() == 0 || src.ncols() == 0 {
        return Err(ReplayError::grid_bounds(format!(
            "source grid must be non-empty, got {}x{}",
            src.nrows(),
            src.ncols()
        )));
    }
    Ok(())
}

/// Shared 2x2-neighborhood pass for bilinear and cosine: both sample the
/// same four neighbors and differ only in the blend applied along each axis.
fn resample_2x2(
    src: &DMatrix<f64>,
    width: usize,
    height: usize,
    blend: impl Fn(f64, f64, f64) -> f64,
) -> DMatrix<f64> {
    let (rows, cols) = (src.nrows(), src.ncols());
    DMatrix::from_fn(height, width, |y, x| {
        let gx = axis_coord(x, width, cols - 1);
        let gy = axis_coord(y, height, rows - 1);
        let (gxi, gyi) = (gx.floor() as i64, gy.floor() as i64);
        let (tx, ty) = (gx - gxi as f64, gy - gyi as f64);

        let top = blend(sample(src, gyi, gxi), sample(src, gyi, gxi + 1), tx);
        let bottom = blend(
            sample(src, gyi + 1, gxi),
            sample(src, gyi + 1, gxi + 1),
            tx,
        );
        blend(top, bottom, ty)
    })
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Bilinear interpolation over the 2x2 neighborhood.
pub struct Bilinear;

impl Resampler for Bilinear {
    fn name(&self) -> &'static str {
        "bilinear"
    }

    fn resample(
        &self,
        src: &DMatrix<f64>,
        width: usize,
        height: usize,
    ) -> Result<DMatrix<f64>, ReplayError> {
        check_target(width, height)?;
        check_source(src)?;
        Ok(resample_2x2(src, width, height, lerp))
    }
}

/// Cosine-eased interpolation: same neighbors as bilinear, blend factor
/// `f = (1 - cos(t * pi)) / 2`.
pub struct Cosine;

impl Resampler for Cosine {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn resample(
        &self,
        src: &DMatrix<f64>,
        width: usize,
        height: usize,
    ) -> Result<DMatrix<f64>, ReplayError> {
        check_target(width, height)?;
        check_source(src)?;
        Ok(resample_2x2(src, width, height, |a, b, t| {
            let f = (1.0 - (t * PI).cos()) / 2.0;
            a * (1.0 - f) + b * f
        }))
    }
}

/// Cubic kernel through four collinear samples, evaluated at `t` between
/// the middle pair.
fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let a = (p3 - p2) - (p0 - p1);
    let b = (p0 - p1) - a;
    let c = p2 - p0;
    let d = p1;
    ((a * t + b) * t + c) * t + d
}

/// Bicubic interpolation over a 4x4 neighborhood, rows first then the
/// resulting column.
pub struct Bicubic;

impl Resampler for Bicubic {
    fn name(&self) -> &'static str {
        "bicubic"
    }

    fn resample(
        &self,
        src: &DMatrix<f64>,
        width: usize,
        height: usize,
    ) -> Result<DMatrix<f64>, ReplayError> {
        check_target(width, height)?;
        let (rows, cols) = (src.nrows(), src.ncols());
        if rows < 4 || cols < 4 {
            return Err(ReplayError::grid_bounds(format!(
                "bicubic needs a source of at least 4x4, got {rows}x{cols}"
            )));
        }

        Ok(DMatrix::from_fn(height, width, |y, x| {
            let dx = axis_coord(x, width, cols - 3);
            let dy = axis_coord(y, height, rows - 3);
            let (x0, y0) = (dx.floor() as i64, dy.floor() as i64);
            let (tx, ty) = (dx - x0 as f64, dy - y0 as f64);

            let mut col = [0.0f64; 4];
            for (j, v) in col.iter_mut().enumerate() {
                let row = y0 + j as i64;
                *v = cubic(
                    sample(src, row, x0),
                    sample(src, row, x0 + 1),
                    sample(src, row, x0 + 2),
                    sample(src, row, x0 + 3),
                    tx,
                );
            }
            cubic(col[0], col[1], col[2], col[3], ty)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid_2x2() -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 2, &[0.0, 10.0, 20.0, 30.0])
    }

    #[test]
    fn test_bilinear_identity_reproduces_source() {
        let src = DMatrix::from_row_slice(3, 4, &[
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0,
        ]);
        let out = Bilinear.resample(&src, 4, 3).unwrap();
        for r in 0..3 {
            for c in 0..4 {
                assert_relative_eq!(out[(r, c)], src[(r, c)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_bilinear_upscale_corners_and_interior() {
        let out = Bilinear.resample(&grid_2x2(), 4, 4).unwrap();
        assert_eq!(out.nrows(), 4);
        assert_eq!(out.ncols(), 4);
        // Corners equal the original four values
        assert_relative_eq!(out[(0, 0)], 0.0);
        assert_relative_eq!(out[(0, 3)], 10.0);
        assert_relative_eq!(out[(3, 0)], 20.0);
        assert_relative_eq!(out[(3, 3)], 30.0);
        // Interior cells lie strictly between adjacent corner values
        for r in 1..3 {
            for c in 1..3 {
                let v = out[(r, c)];
                assert!(v > 0.0 && v < 30.0, "interior value {v} escaped range");
            }
        }
        // Top edge midpoints between 0 and 10
        assert!(out[(0, 1)] > 0.0 && out[(0, 1)] < 10.0);
        assert!(out[(0, 2)] > 0.0 && out[(0, 2)] < 10.0);
    }

    #[test]
    fn test_cosine_matches_bilinear_at_endpoints() {
        let src = grid_2x2();
        let bl = Bilinear.resample(&src, 5, 5).unwrap();
        let cs = Cosine.resample(&src, 5, 5).unwrap();
        // t = 0 and t = 1 ease to the same endpoints
        assert_relative_eq!(cs[(0, 0)], bl[(0, 0)], epsilon = 1e-12);
        assert_relative_eq!(cs[(4, 4)], bl[(4, 4)], epsilon = 1e-12);
        // Midpoint eases through 0.5 as well: cos(pi/2) = 0
        assert_relative_eq!(cs[(0, 2)], bl[(0, 2)], epsilon = 1e-12);
    }

    #[test]
    fn test_cosine_eases_between_samples() {
        let src = DMatrix::from_row_slice(1, 2, &[0.0, 100.0]);
        let out = Cosine.resample(&src, 5, 1).unwrap();
        // Eased curve stays monotone between the endpoints
        assert_relative_eq!(out[(0, 0)], 0.0);
        assert_relative_eq!(out[(0, 4)], 100.0);
        assert!(out[(0, 1)] < out[(0, 2)] && out[(0, 2)] < out[(0, 3)]);
        // Quarter point lags the linear blend (slow start of the easing)
        assert!(out[(0, 1)] < 25.0);
    }

    #[test]
    fn test_bicubic_flat_field_stays_flat() {
        let src = DMatrix::from_element(4, 4, 7.5);
        let out = Bicubic.resample(&src, 9, 9).unwrap();
        for v in out.iter() {
            assert_relative_eq!(*v, 7.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bicubic_rejects_small_source() {
        let err = Bicubic.resample(&grid_2x2(), 4, 4).unwrap_err();
        assert!(matches!(err, ReplayError::GridBounds { .. }));
    }

    #[test]
    fn test_boundary_neighbors_are_clamped() {
        // The last target cell maps onto the last source cell; its +1
        // neighbor reads must clamp instead of walking off the grid.
        let src = grid_2x2();
        let out = Bilinear.resample(&src, 7, 7).unwrap();
        assert_relative_eq!(out[(6, 6)], 30.0);

        let src4 = DMatrix::from_fn(5, 5, |r, c| (r * 5 + c) as f64);
        // +3 reads at the bottom-right of the bicubic window clamp too
        let out4 = Bicubic.resample(&src4, 10, 10).unwrap();
        assert!(out4.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_empty_target_is_rejected() {
        let err = Bilinear.resample(&grid_2x2(), 0, 4).unwrap_err();
        assert!(matches!(err, ReplayError::GridBounds { .. }));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let empty = DMatrix::<f64>::zeros(0, 0);
        let err = Bilinear.resample(&empty, 4, 4).unwrap_err();
        assert!(matches!(err, ReplayError::GridBounds { .. }));

        // A grid with rows but no columns must not reach the kernel either
        let no_cols = DMatrix::<f64>::zeros(2, 0);
        let err = Cosine.resample(&no_cols, 4, 4).unwrap_err();
        assert!(matches!(err, ReplayError::GridBounds { .. }));
    }

    #[test]
    fn test_single_cell_target_maps_to_origin() {
        let out = Bilinear.resample(&grid_2x2(), 1, 1).unwrap();
        assert_relative_eq!(out[(0, 0)], 0.0);
    }

    #[test]
    fn test_resampler_for_dispatch() {
        assert_eq!(resampler_for(ResampleMethod::Bilinear).name(), "bilinear");
        assert_eq!(resampler_for(ResampleMethod::Cosine).name(), "cosine");
        assert_eq!(resampler_for(ResampleMethod::Bicubic).name(), "bicubic");
    }
}
