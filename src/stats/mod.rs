//! Single-pass reductions over float and fixed-point matrices.
//!
//! Every reduction walks rows through the view accessors, so whole buffers
//! and strided sub-rectangles behave identically. Min/max come in masked
//! variants restricted to positions where a boolean mask is true; with an
//! all-false mask they return the reduction identity (the maximum
//! representable value for min, the minimum for max), which callers rely on
//! as defined behavior.

pub mod histogram;
pub mod integral;

pub use self::histogram::{histogram, histogram_fixed};
pub use self::integral::{integral, integral_fixed, rect_sum, rect_sum_fixed};

use crate::error::Error;
use crate::matrix::MatrixView;

pub fn sum(m: MatrixView<'_, f32>) -> f64 {
    let mut acc = 0.0f64;
    for row in m.rows() {
        for &v in row {
            acc += f64::from(v);
        }
    }
    acc
}

pub fn average(m: MatrixView<'_, f32>) -> f64 {
    let count = m.width() * m.height();
    if count == 0 {
        return 0.0;
    }
    sum(m) / count as f64
}

pub fn sum_fixed(m: MatrixView<'_, i32>) -> i64 {
    let mut acc = 0i64;
    for row in m.rows() {
        for &v in row {
            acc += i64::from(v);
        }
    }
    acc
}

pub fn average_fixed(m: MatrixView<'_, i32>) -> i32 {
    let count = (m.width() * m.height()) as i64;
    if count == 0 {
        return 0;
    }
    (sum_fixed(m) / count) as i32
}

pub fn min(m: MatrixView<'_, f32>) -> f32 {
    let mut acc = f32::MAX;
    for row in m.rows() {
        for &v in row {
            if v < acc {
                acc = v;
            }
        }
    }
    acc
}

pub fn max(m: MatrixView<'_, f32>) -> f32 {
    let mut acc = f32::MIN;
    for row in m.rows() {
        for &v in row {
            if v > acc {
                acc = v;
            }
        }
    }
    acc
}

pub fn min_fixed(m: MatrixView<'_, i32>) -> i32 {
    let mut acc = i32::MAX;
    for row in m.rows() {
        for &v in row {
            acc = acc.min(v);
        }
    }
    acc
}

pub fn max_fixed(m: MatrixView<'_, i32>) -> i32 {
    let mut acc = i32::MIN;
    for row in m.rows() {
        for &v in row {
            acc = acc.max(v);
        }
    }
    acc
}

/// Minimum and maximum in one pass.
pub fn range(m: MatrixView<'_, f32>) -> (f32, f32) {
    let mut lo = f32::MAX;
    let mut hi = f32::MIN;
    for row in m.rows() {
        for &v in row {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
    }
    (lo, hi)
}

pub fn range_fixed(m: MatrixView<'_, i32>) -> (i32, i32) {
    let mut lo = i32::MAX;
    let mut hi = i32::MIN;
    for row in m.rows() {
        for &v in row {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    (lo, hi)
}

/// Minimum over positions where `mask` is true. Masked-off positions are
/// read past but never enter the accumulator.
pub fn min_masked(m: MatrixView<'_, f32>, mask: MatrixView<'_, bool>) -> Result<f32, Error> {
    ensure_same_shape(m.width(), m.height(), mask.width(), mask.height())?;
    let mut acc = f32::MAX;
    for (row, keep) in m.rows().zip(mask.rows()) {
        for (&v, &k) in row.iter().zip(keep) {
            if k && v < acc {
                acc = v;
            }
        }
    }
    Ok(acc)
}

pub fn max_masked(m: MatrixView<'_, f32>, mask: MatrixView<'_, bool>) -> Result<f32, Error> {
    ensure_same_shape(m.width(), m.height(), mask.width(), mask.height())?;
    let mut acc = f32::MIN;
    for (row, keep) in m.rows().zip(mask.rows()) {
        for (&v, &k) in row.iter().zip(keep) {
            if k && v > acc {
                acc = v;
            }
        }
    }
    Ok(acc)
}

pub fn min_masked_fixed(m: MatrixView<'_, i32>, mask: MatrixView<'_, bool>) -> Result<i32, Error> {
    ensure_same_shape(m.width(), m.height(), mask.width(), mask.height())?;
    let mut acc = i32::MAX;
    for (row, keep) in m.rows().zip(mask.rows()) {
        for (&v, &k) in row.iter().zip(keep) {
            if k {
                acc = acc.min(v);
            }
        }
    }
    Ok(acc)
}

pub fn max_masked_fixed(m: MatrixView<'_, i32>, mask: MatrixView<'_, bool>) -> Result<i32, Error> {
    ensure_same_shape(m.width(), m.height(), mask.width(), mask.height())?;
    let mut acc = i32::MIN;
    for (row, keep) in m.rows().zip(mask.rows()) {
        for (&v, &k) in row.iter().zip(keep) {
            if k {
                acc = acc.max(v);
            }
        }
    }
    Ok(acc)
}

fn ensure_same_shape(w: usize, h: usize, mw: usize, mh: usize) -> Result<(), Error> {
    if (w, h) != (mw, mh) {
        return Err(Error::RegionMismatch {
            expected: (w, h),
            actual: (mw, mh),
        });
    }
    Ok(())
}
