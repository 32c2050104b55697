use core::fmt;

use crate::pixel::PixelKind;

/// Errors reported by the pixel kernels.
///
/// Argument validation is deterministic, so none of these are retryable;
/// they surface immediately to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scalar parameter is outside its documented range.
    ArgumentOutOfRange { param: &'static str },
    /// The operation does not support the supplied pixel encoding.
    UnsupportedFormat { kind: PixelKind },
    /// Two matrices that must share dimensions do not.
    RegionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Backing buffer shorter than the addressed region.
    SizeMismatch { expected: usize, actual: usize },
    /// Row stride smaller than the row width.
    InvalidStride,
    /// Offset or sub-rectangle outside the parent extent.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentOutOfRange { param } => {
                write!(f, "argument out of range: {param}")
            }
            Self::UnsupportedFormat { kind } => {
                write!(f, "unsupported pixel format: {kind}")
            }
            Self::RegionMismatch { expected, actual } => {
                write!(
                    f,
                    "region mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} elements, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

impl std::error::Error for Error {}
