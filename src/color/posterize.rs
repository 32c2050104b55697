//! Color quantization ("posterize") to N evenly spaced levels per channel.
//!
//! Byte-depth encodings go through a 256-entry lookup table; float and
//! fixed-point inputs are quantized arithmetically with the same half-step
//! rounding. Quantization is idempotent: re-running with the same level
//! count leaves the output unchanged.

use crate::error::Error;
use crate::matrix::{Matrix, MatrixView};
use crate::pixel::{alpha, pack_rgb, unpack_rgb, PixelMatrix, PixelView};

// Clears the fractional 24 bits of a fixed-point intermediate.
const FIXED_WHOLE_MASK: i64 = !0x00FF_FFFF;

/// Posterize a packed-color matrix. The lookup is applied to R, G and B
/// independently; the alpha byte is carried through unchanged.
pub fn reduce_colors_packed(src: MatrixView<'_, u32>, levels: u32) -> Result<Matrix<u32>, Error> {
    let lut = level_lut(levels)?;
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        for &p in row {
            let (r, g, b) = unpack_rgb(p);
            out.push(pack_rgb(
                u32::from(lut[r as usize]),
                u32::from(lut[g as usize]),
                u32::from(lut[b as usize]),
                alpha(p),
            ));
        }
    }
    Ok(Matrix::from_parts(src.width(), src.height(), out))
}

/// Posterize a byte matrix.
pub fn reduce_colors_bytes(src: MatrixView<'_, u8>, levels: u32) -> Result<Matrix<u8>, Error> {
    let lut = level_lut(levels)?;
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        for &v in row {
            out.push(lut[v as usize]);
        }
    }
    Ok(Matrix::from_parts(src.width(), src.height(), out))
}

/// Posterize a normalized float matrix: `round(v × (N−1)) / (N−1)`.
pub fn reduce_colors_float(src: MatrixView<'_, f32>, levels: u32) -> Result<Matrix<f32>, Error> {
    ensure_levels(levels)?;
    let k = (levels - 1) as f32;
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        for &v in row {
            out.push((v * k).round() / k);
        }
    }
    Ok(Matrix::from_parts(src.width(), src.height(), out))
}

/// Posterize a 24-bit fixed-point matrix with half-step integer rounding.
pub fn reduce_colors_fixed(src: MatrixView<'_, i32>, levels: u32) -> Result<Matrix<i32>, Error> {
    ensure_levels(levels)?;
    let k = i64::from(levels - 1);
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        for &v in row {
            let quantized = ((i64::from(v) * k + 0x0080_0000) & FIXED_WHOLE_MASK) / k;
            out.push(quantized as i32);
        }
    }
    Ok(Matrix::from_parts(src.width(), src.height(), out))
}

/// Posterize over the closed encoding set.
pub fn reduce_colors(src: PixelView<'_>, levels: u32) -> Result<PixelMatrix, Error> {
    match src {
        PixelView::Packed(m) => reduce_colors_packed(m, levels).map(PixelMatrix::Packed),
        PixelView::Byte(m) => reduce_colors_bytes(m, levels).map(PixelMatrix::Byte),
        PixelView::Float(m) => reduce_colors_float(m, levels).map(PixelMatrix::Float),
        PixelView::Fixed(m) => reduce_colors_fixed(m, levels).map(PixelMatrix::Fixed),
    }
}

/// Byte lookup mapping a raw channel value to the nearest of N evenly
/// spaced output levels.
fn level_lut(levels: u32) -> Result<[u8; 256], Error> {
    ensure_levels(levels)?;
    let k = u64::from(levels - 1);
    let mut lut = [0u8; 256];
    for (v, entry) in lut.iter_mut().enumerate() {
        let level = (v as u64 * k + 128) / 255;
        *entry = ((level * 255 + k / 2) / k) as u8;
    }
    Ok(lut)
}

fn ensure_levels(levels: u32) -> Result<(), Error> {
    if levels < 2 {
        return Err(Error::ArgumentOutOfRange { param: "levels" });
    }
    Ok(())
}
