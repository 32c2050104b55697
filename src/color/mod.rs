//! Color-model operations: grayscale families, posterization, contrast.

pub mod contrast;
pub mod gray;
pub mod posterize;

pub use self::contrast::{stretch_contrast, stretch_contrast_fixed};
pub use self::gray::{
    gray_fixed_from_bytes, gray_fixed_from_float, gray_fixed_from_packed, gray_from_bytes,
    gray_from_packed, grayscale, grayscale_fixed,
};
pub use self::posterize::{
    reduce_colors, reduce_colors_bytes, reduce_colors_fixed, reduce_colors_float,
    reduce_colors_packed,
};
