//! Summed-area tables and O(1) rectangle sums.
//!
//! Cell (x, y) of the table holds the sum of every input sample with column
//! ≤ x and row ≤ y. Construction is one pass per row with a running row sum
//! plus the cell directly above, so rows must be processed in order.

use crate::matrix::{Matrix, MatrixView};

/// Build the summed-area table of a float matrix.
pub fn integral(m: MatrixView<'_, f32>) -> Matrix<f32> {
    let (w, h) = (m.width(), m.height());
    let mut data = vec![0.0f32; w * h];
    for y in 0..h {
        let src = m.row(y);
        let base = y * w;
        let mut run = 0.0f32;
        for x in 0..w {
            run += src[x];
            data[base + x] = if y == 0 {
                run
            } else {
                data[base - w + x] + run
            };
        }
    }
    Matrix::from_parts(w, h, data)
}

/// Fixed-point overload accumulating into an `i64` table, so 24-bit sums
/// stay exact at any image size.
pub fn integral_fixed(m: MatrixView<'_, i32>) -> Matrix<i64> {
    let (w, h) = (m.width(), m.height());
    let mut data = vec![0i64; w * h];
    for y in 0..h {
        let src = m.row(y);
        let base = y * w;
        let mut run = 0i64;
        for x in 0..w {
            run += i64::from(src[x]);
            data[base + x] = if y == 0 {
                run
            } else {
                data[base - w + x] + run
            };
        }
    }
    Matrix::from_parts(w, h, data)
}

/// Sum over the inclusive rectangle [x1, x2] × [y1, y2] by
/// inclusion–exclusion over the summed-area table.
#[inline]
pub fn rect_sum(table: MatrixView<'_, f32>, x1: usize, y1: usize, x2: usize, y2: usize) -> f32 {
    let d = table.row(y2)[x2];
    let b = if y1 > 0 { table.row(y1 - 1)[x2] } else { 0.0 };
    let c = if x1 > 0 { table.row(y2)[x1 - 1] } else { 0.0 };
    let a = if x1 > 0 && y1 > 0 {
        table.row(y1 - 1)[x1 - 1]
    } else {
        0.0
    };
    d - b - c + a
}

/// Fixed-point overload of [`rect_sum`].
#[inline]
pub fn rect_sum_fixed(
    table: MatrixView<'_, i64>,
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
) -> i64 {
    let d = table.row(y2)[x2];
    let b = if y1 > 0 { table.row(y1 - 1)[x2] } else { 0 };
    let c = if x1 > 0 { table.row(y2)[x1 - 1] } else { 0 };
    let a = if x1 > 0 && y1 > 0 {
        table.row(y1 - 1)[x1 - 1]
    } else {
        0
    };
    d - b - c + a
}
