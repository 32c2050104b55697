//! Local adaptive thresholding via integral-image window means.
//!
//! Each pixel is compared against the mean of a square neighborhood; at the
//! image borders the window is clipped rather than padded, so edge means
//! cover fewer samples. Pixels at or below `mean − threshold` become the
//! on value (dark foreground selected), everything else 0. The float and
//! fixed-point overloads are independent implementations with their own
//! rounding rules.

use crate::error::Error;
use crate::matrix::MatrixViewMut;
use crate::pixel::FIXED_ONE;
use crate::stats::{integral, integral_fixed, rect_sum, rect_sum_fixed};

/// Binarize a float matrix in place against its local means.
///
/// `neighborhood` is the window side; it must lie in (0, min(width, height)).
pub fn adaptive_threshold(
    mut m: MatrixViewMut<'_, f32>,
    threshold: f32,
    neighborhood: usize,
) -> Result<(), Error> {
    let (w, h) = (m.width(), m.height());
    ensure_neighborhood(neighborhood, w, h)?;
    let table = integral(m.as_view());
    let before = neighborhood / 2;
    let after = neighborhood - 1 - before;
    for y in 0..h {
        let y1 = y.saturating_sub(before);
        let y2 = (y + after).min(h - 1);
        let row = m.row_mut(y);
        for (x, v) in row.iter_mut().enumerate() {
            let x1 = x.saturating_sub(before);
            let x2 = (x + after).min(w - 1);
            let count = ((x2 - x1 + 1) * (y2 - y1 + 1)) as f32;
            let mean = rect_sum(table.view(), x1, y1, x2, y2) / count;
            *v = if *v <= mean - threshold { 1.0 } else { 0.0 };
        }
    }
    Ok(())
}

/// Fixed-point overload; the window mean rounds as `(sum + count/2) / count`.
pub fn adaptive_threshold_fixed(
    mut m: MatrixViewMut<'_, i32>,
    threshold: i32,
    neighborhood: usize,
) -> Result<(), Error> {
    let (w, h) = (m.width(), m.height());
    ensure_neighborhood(neighborhood, w, h)?;
    let table = integral_fixed(m.as_view());
    let before = neighborhood / 2;
    let after = neighborhood - 1 - before;
    for y in 0..h {
        let y1 = y.saturating_sub(before);
        let y2 = (y + after).min(h - 1);
        let row = m.row_mut(y);
        for (x, v) in row.iter_mut().enumerate() {
            let x1 = x.saturating_sub(before);
            let x2 = (x + after).min(w - 1);
            let count = ((x2 - x1 + 1) * (y2 - y1 + 1)) as i64;
            let sum = rect_sum_fixed(table.view(), x1, y1, x2, y2);
            let mean = (sum + count / 2) / count;
            *v = if i64::from(*v) <= mean - i64::from(threshold) {
                FIXED_ONE
            } else {
                0
            };
        }
    }
    Ok(())
}

fn ensure_neighborhood(neighborhood: usize, w: usize, h: usize) -> Result<(), Error> {
    if neighborhood == 0 || neighborhood >= w || neighborhood >= h {
        return Err(Error::ArgumentOutOfRange {
            param: "neighborhood",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn uniform_matrix_is_all_on_for_non_positive_threshold() {
        for t in [0.0f32, -0.5] {
            let mut m = Matrix::new_fill(8, 8, 0.5f32);
            adaptive_threshold(m.view_mut(), t, 3).expect("valid neighborhood");
            assert!(m.data().iter().all(|&v| v == 1.0), "t={t}");
        }
    }

    #[test]
    fn uniform_matrix_is_all_off_for_positive_threshold() {
        let mut m = Matrix::new_fill(8, 8, 0.5f32);
        adaptive_threshold(m.view_mut(), 0.01, 3).expect("valid neighborhood");
        assert!(m.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn fixed_overload_mirrors_the_uniform_property() {
        let mut m = Matrix::new_fill(8, 8, 0x0040_0000i32);
        adaptive_threshold_fixed(m.view_mut(), 0, 3).expect("valid neighborhood");
        assert!(m.data().iter().all(|&v| v == FIXED_ONE));

        let mut m = Matrix::new_fill(8, 8, 0x0040_0000i32);
        adaptive_threshold_fixed(m.view_mut(), 1, 3).expect("valid neighborhood");
        assert!(m.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn dark_spot_survives_as_foreground() {
        let mut m = Matrix::new_fill(9, 9, 0.8f32);
        m.row_mut(4)[4] = 0.1;
        adaptive_threshold(m.view_mut(), 0.05, 3).expect("valid neighborhood");
        assert_eq!(m.row(4)[4], 1.0);
        assert_eq!(m.row(0)[0], 0.0);
    }

    #[test]
    fn edge_windows_are_clipped_not_padded() {
        // 4x4 with a 3-wide window: interior windows cover 3x3 samples,
        // the corner windows only 2x2. The corner pixel equals its clipped
        // mean, so it binarizes by the non-positive-threshold rule.
        let mut m = Matrix::new_fill(4, 4, 0.5f32);
        adaptive_threshold(m.view_mut(), 0.0, 3).expect("valid neighborhood");
        assert_eq!(m.row(0)[0], 1.0);
        assert_eq!(m.row(3)[3], 1.0);
    }

    #[test]
    fn neighborhood_bounds_are_validated() {
        let err = Error::ArgumentOutOfRange {
            param: "neighborhood",
        };
        let mut m = Matrix::new_fill(8, 4, 0.5f32);
        assert_eq!(adaptive_threshold(m.view_mut(), 0.0, 0).unwrap_err(), err);
        assert_eq!(adaptive_threshold(m.view_mut(), 0.0, 4).unwrap_err(), err);
        assert_eq!(adaptive_threshold(m.view_mut(), 0.0, 8).unwrap_err(), err);
        assert!(adaptive_threshold(m.view_mut(), 0.0, 3).is_ok());
    }
}
