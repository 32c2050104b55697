//! Grayscale conversion for each pixel encoding.
//!
//! Float results are normalized luminance in [0, 1]. Fixed-point results use
//! the 24-bit scale where `0x0100_0000` is 1.0; the integer coefficients are
//! chosen so a white byte maps exactly onto the top of the 24-bit range.
//! Conversions into a fresh buffer run rows in parallel; identity paths
//! return the input view unchanged.

use rayon::prelude::*;

use crate::error::Error;
use crate::matrix::{Matrix, MatrixCow, MatrixView};
use crate::pixel::{unpack_rgb, PixelKind, PixelView, FIXED_ONE};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

// Integer luma weights for the fixed-point path.
const LUMA_R_FIXED: i32 = 19672;
const LUMA_G_FIXED: i32 = 38620;
const LUMA_B_FIXED: i32 = 7500;

// 255 * 65793 == 0x00FF_FFFF: a white byte fills the 24-bit range exactly.
const BYTE_TO_FIXED: i32 = 65793;

/// Packed color to normalized float luminance.
pub fn gray_from_packed(src: MatrixView<'_, u32>) -> Matrix<f32> {
    map_rows(src, |p| {
        let (r, g, b) = unpack_rgb(p);
        (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32) / 255.0
    })
}

/// Byte channel to normalized float.
pub fn gray_from_bytes(src: MatrixView<'_, u8>) -> Matrix<f32> {
    map_rows(src, |v| f32::from(v) / 255.0)
}

/// Packed color to 24-bit fixed-point luminance.
pub fn gray_fixed_from_packed(src: MatrixView<'_, u32>) -> Matrix<i32> {
    map_rows(src, |p| {
        let (r, g, b) = unpack_rgb(p);
        LUMA_R_FIXED * r as i32 + LUMA_G_FIXED * g as i32 + LUMA_B_FIXED * b as i32
    })
}

/// Byte channel to 24-bit fixed point.
pub fn gray_fixed_from_bytes(src: MatrixView<'_, u8>) -> Matrix<i32> {
    map_rows(src, |v| i32::from(v) * BYTE_TO_FIXED)
}

/// Normalized float to 24-bit fixed point, rounding to nearest.
pub fn gray_fixed_from_float(src: MatrixView<'_, f32>) -> Matrix<i32> {
    map_rows(src, |v| (v * FIXED_ONE as f32).round() as i32)
}

/// Float-domain grayscale over the closed encoding set.
///
/// Float input passes through as a borrow of the same view; fixed-point
/// input is not part of the float grayscale family and is rejected with the
/// offending kind.
pub fn grayscale(src: PixelView<'_>) -> Result<MatrixCow<'_, f32>, Error> {
    match src {
        PixelView::Packed(m) => Ok(MatrixCow::Owned(gray_from_packed(m))),
        PixelView::Byte(m) => Ok(MatrixCow::Owned(gray_from_bytes(m))),
        PixelView::Float(m) => Ok(MatrixCow::Borrowed(m)),
        PixelView::Fixed(_) => Err(Error::UnsupportedFormat {
            kind: PixelKind::Fixed,
        }),
    }
}

/// Fixed-point grayscale over the closed encoding set; fixed input is the
/// identity pass-through.
pub fn grayscale_fixed(src: PixelView<'_>) -> MatrixCow<'_, i32> {
    match src {
        PixelView::Packed(m) => MatrixCow::Owned(gray_fixed_from_packed(m)),
        PixelView::Byte(m) => MatrixCow::Owned(gray_fixed_from_bytes(m)),
        PixelView::Float(m) => MatrixCow::Owned(gray_fixed_from_float(m)),
        PixelView::Fixed(m) => MatrixCow::Borrowed(m),
    }
}

/// Per-pixel conversion into a fresh owned matrix, parallel over output rows.
fn map_rows<S, D, F>(src: MatrixView<'_, S>, f: F) -> Matrix<D>
where
    S: Copy + Sync,
    D: Copy + Default + Send,
    F: Fn(S) -> D + Sync,
{
    let (w, h) = (src.width(), src.height());
    if w == 0 || h == 0 {
        return Matrix::from_parts(w, h, Vec::new());
    }
    let mut data = vec![D::default(); w * h];
    data.par_chunks_mut(w).enumerate().for_each(|(y, dst)| {
        for (d, &s) in dst.iter_mut().zip(src.row(y)) {
            *d = f(s);
        }
    });
    Matrix::from_parts(w, h, data)
}
