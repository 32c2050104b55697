//! End-to-end binarization pipeline for scanned documents.
//!
//! Chains the kernels in the order the acquisition pipeline uses them:
//! grayscale conversion, optional contrast stretch, optional posterization,
//! then global (Otsu) or local adaptive thresholding. The output is a
//! 0.0/1.0 float matrix ready for the recognition stage.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::pixel::PixelView;
use crate::threshold;

/// Threshold strategy for the final stage.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ThresholdMethod {
    /// Global threshold selected by Otsu's method over `buckets` buckets.
    Otsu { buckets: usize },
    /// Local mean over a square `neighborhood`, offset by `bias`.
    Adaptive { neighborhood: usize, bias: f32 },
}

impl Default for ThresholdMethod {
    fn default() -> Self {
        ThresholdMethod::Adaptive {
            neighborhood: 15,
            bias: 0.02,
        }
    }
}

/// Pipeline parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BinarizeParams {
    /// Stretch the grayscale range onto [0, 1] before thresholding.
    pub stretch_contrast: bool,
    /// Posterize to this many levels before thresholding.
    pub reduce_levels: Option<u32>,
    pub method: ThresholdMethod,
}

/// Summary of one pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarizeReport {
    pub width: usize,
    pub height: usize,
    /// Global threshold chosen by Otsu; `None` on the adaptive path.
    pub threshold: Option<f32>,
    pub latency_ms: f64,
}

/// Runs the preprocessing pipeline over any supported input encoding.
#[derive(Clone, Debug, Default)]
pub struct Binarizer {
    params: BinarizeParams,
}

impl Binarizer {
    pub fn new(params: BinarizeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BinarizeParams {
        &self.params
    }

    /// Binarize `src`, returning the 0.0/1.0 matrix and a run report.
    pub fn process(&self, src: PixelView<'_>) -> Result<(Matrix<f32>, BinarizeReport), Error> {
        let started = Instant::now();
        let kind = src.kind();
        let (width, height) = (src.width(), src.height());

        let mut work = color::grayscale(src)?.into_matrix();
        debug!("binarize: {width}x{height} {kind} input converted to gray");

        if self.params.stretch_contrast {
            color::stretch_contrast(work.view_mut());
            debug!("binarize: contrast stretched");
        }
        if let Some(levels) = self.params.reduce_levels {
            work = color::reduce_colors_float(work.view(), levels)?;
            debug!("binarize: posterized to {levels} levels");
        }

        let mut report = BinarizeReport {
            width,
            height,
            ..Default::default()
        };
        match self.params.method {
            ThresholdMethod::Otsu { buckets } => {
                let threshold = threshold::otsu_threshold(work.view(), buckets, 0.0, 1.0)?;
                threshold::apply_threshold(work.view_mut(), threshold);
                report.threshold = Some(threshold);
            }
            ThresholdMethod::Adaptive { neighborhood, bias } => {
                threshold::adaptive_threshold(work.view_mut(), bias, neighborhood)?;
            }
        }

        report.latency_ms = started.elapsed().as_secs_f64() * 1e3;
        debug!("binarize: done in {:.3} ms", report.latency_ms);
        Ok((work, report))
    }
}
