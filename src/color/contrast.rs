//! In-place linear contrast stretch.
//!
//! Maps the observed value range onto the full domain before thresholding;
//! scans with low dynamic range benefit the most. A flat matrix is left
//! unchanged.

use crate::matrix::MatrixViewMut;
use crate::pixel::FIXED_ONE;
use crate::stats;

/// Stretch the observed [min, max] of a float matrix onto [0, 1] in place.
pub fn stretch_contrast(mut m: MatrixViewMut<'_, f32>) {
    let (lo, hi) = stats::range(m.as_view());
    if !(hi > lo) {
        return;
    }
    let span = hi - lo;
    for y in 0..m.height() {
        for v in m.row_mut(y) {
            *v = (*v - lo) / span;
        }
    }
}

/// Fixed-point overload: stretches onto [0, `0x0100_0000`] with half-up
/// integer rounding.
pub fn stretch_contrast_fixed(mut m: MatrixViewMut<'_, i32>) {
    let (lo, hi) = stats::range_fixed(m.as_view());
    if hi <= lo {
        return;
    }
    let span = i64::from(hi) - i64::from(lo);
    for y in 0..m.height() {
        for v in m.row_mut(y) {
            let scaled = (i64::from(*v) - i64::from(lo)) * i64::from(FIXED_ONE);
            *v = ((scaled + span / 2) / span) as i32;
        }
    }
}
