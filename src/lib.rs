#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod binarize;
pub mod color;
pub mod error;
pub mod matrix;
pub mod pixel;
pub mod stats;
pub mod threshold;

// Support module for the demo binaries.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::binarize::{BinarizeParams, BinarizeReport, Binarizer, ThresholdMethod};
pub use crate::error::Error;
pub use crate::matrix::{Matrix, MatrixCow, MatrixView, MatrixViewMut};
pub use crate::pixel::{PixelKind, PixelMatrix, PixelView};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use scan_prep::prelude::*;
///
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let page = Matrix::from_vec(w, h, gray).expect("buffer matches dimensions");
///
/// let binarizer = Binarizer::new(BinarizeParams::default());
/// let (bw, report) = binarizer
///     .process(PixelView::Byte(page.view()))
///     .expect("byte input is supported");
/// println!("{}x{} in {:.3} ms", bw.width(), bw.height(), report.latency_ms);
/// ```
pub mod prelude {
    pub use crate::matrix::{Matrix, MatrixView, MatrixViewMut};
    pub use crate::pixel::{PixelKind, PixelView};
    pub use crate::{BinarizeParams, Binarizer};
}
