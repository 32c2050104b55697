//! Boundary I/O: decoded images in, binarized PNGs and JSON reports out.
//!
//! - `load_packed_image`: read a PNG/JPEG/etc. into a packed-color matrix.
//! - `load_gray_image`: read into an 8-bit single-channel matrix.
//! - `save_binary_f32`: write a float matrix to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.

use image::{ColorType, DynamicImage, GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::Matrix;

/// Load an image and pack it as 32-bit color: R in the low byte, then G, B
/// and alpha in the high byte.
pub fn load_packed_image(path: &Path) -> Result<Matrix<u32>, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let rgba = match img.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => img.into_rgba8(),
        other => {
            return Err(format!(
                "Unsupported color type {other:?} in {}",
                path.display()
            ))
        }
    };
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    let mut data = Vec::with_capacity(width * height);
    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        data.push(
            u32::from(r) | (u32::from(g) << 8) | (u32::from(b) << 16) | (u32::from(a) << 24),
        );
    }
    Matrix::from_vec(width, height, data)
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Load an image from disk and convert to an 8-bit grayscale matrix.
pub fn load_gray_image(path: &Path) -> Result<Matrix<u8>, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Matrix::from_vec(width, height, img.into_raw())
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save a float matrix to a grayscale PNG, mapping [0, 1] onto [0, 255].
pub fn save_binary_f32(matrix: &Matrix<f32>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(matrix.width() as u32, matrix.height() as u32);
    for y in 0..matrix.height() {
        for (x, &px) in matrix.row(y).iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    DynamicImage::ImageLuma8(out)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
