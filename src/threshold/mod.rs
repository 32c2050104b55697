//! Threshold selection and application.

pub mod adaptive;
pub mod otsu;

pub use self::adaptive::{adaptive_threshold, adaptive_threshold_fixed};
pub use self::otsu::{otsu_threshold, otsu_threshold_fixed, DEFAULT_BUCKETS};

use crate::matrix::MatrixViewMut;
use crate::pixel::FIXED_ONE;

/// Binarize in place against a global threshold: values at or below it
/// become the on value (dark foreground selected), everything else 0.
pub fn apply_threshold(mut m: MatrixViewMut<'_, f32>, threshold: f32) {
    for y in 0..m.height() {
        for v in m.row_mut(y) {
            *v = if *v <= threshold { 1.0 } else { 0.0 };
        }
    }
}

/// Fixed-point overload of [`apply_threshold`].
pub fn apply_threshold_fixed(mut m: MatrixViewMut<'_, i32>, threshold: i32) {
    for y in 0..m.height() {
        for v in m.row_mut(y) {
            *v = if *v <= threshold { FIXED_ONE } else { 0 };
        }
    }
}
