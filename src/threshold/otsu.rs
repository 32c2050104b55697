//! Global threshold selection via Otsu's method.

use log::debug;

use crate::error::Error;
use crate::matrix::MatrixView;
use crate::stats;

/// Bucket count matching byte-depth input.
pub const DEFAULT_BUCKETS: usize = 256;

/// Select the threshold maximizing between-class variance over a histogram
/// of `buckets` buckets spanning [min, max]. Returns a value in the input
/// domain.
pub fn otsu_threshold(
    m: MatrixView<'_, f32>,
    buckets: usize,
    min: f32,
    max: f32,
) -> Result<f32, Error> {
    let hist = stats::histogram(m, buckets, min, max)?;
    let split = best_split(&hist);
    let threshold =
        (split as f64 * (f64::from(max) - f64::from(min)) / buckets as f64 + f64::from(min)) as f32;
    debug!("otsu: split bucket {split}/{buckets} -> threshold {threshold:.6}");
    Ok(threshold)
}

/// Fixed-point overload; the bucket index maps back with +0.5 rounding
/// before truncation.
pub fn otsu_threshold_fixed(
    m: MatrixView<'_, i32>,
    buckets: usize,
    min: i32,
    max: i32,
) -> Result<i32, Error> {
    let hist = stats::histogram_fixed(m, buckets, min, max)?;
    let split = best_split(&hist);
    let threshold = (split as f64 * (f64::from(max) - f64::from(min)) / buckets as f64
        + f64::from(min)
        + 0.5) as i32;
    debug!("otsu: split bucket {split}/{buckets} -> fixed threshold {threshold}");
    Ok(threshold)
}

/// Ascending scan over the histogram. Each bucket is folded into the
/// background totals before the split is evaluated; the split is only
/// scored when both classes are populated, and ties go to the later bucket
/// (the comparison is `>=`, not `>`).
fn best_split(hist: &[u32]) -> usize {
    let total: f64 = hist.iter().map(|&c| f64::from(c)).sum();
    let sum_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * f64::from(c))
        .sum();

    let mut w_b = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut best_var = f64::MIN;
    let mut best_idx = 0usize;
    for (i, &count) in hist.iter().enumerate() {
        w_b += f64::from(count);
        sum_b += i as f64 * f64::from(count);
        let w_f = total - w_b;
        if w_b <= 0.0 || w_f <= 0.0 {
            continue;
        }
        let mean_b = sum_b / w_b;
        let mean_f = (sum_total - sum_b) / w_f;
        let between = w_b * w_f * (mean_b - mean_f) * (mean_b - mean_f);
        if between >= best_var {
            best_var = between;
            best_idx = i;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::pixel::FIXED_ONE;

    fn bimodal(w: usize, h: usize, lo: f32, hi: f32) -> Matrix<f32> {
        let mut data = vec![hi; w * h];
        for v in data.iter_mut().take(w * h / 2) {
            *v = lo;
        }
        Matrix::from_parts(w, h, data)
    }

    #[test]
    fn bimodal_threshold_separates_the_modes() {
        let m = bimodal(16, 16, 0.1, 0.9);
        let t = otsu_threshold(m.view(), 256, 0.0, 1.0).expect("valid domain");
        assert!(t > 0.1 && t < 0.9, "threshold {t} outside (0.1, 0.9)");
    }

    #[test]
    fn ties_resolve_to_the_later_bucket() {
        // One sample in the first bucket, one in the last: every interior
        // split scores the same variance, so the scan keeps the last one.
        let m = Matrix::from_vec(2, 1, vec![0.0f32, 1.0]).expect("2x1");
        let t = otsu_threshold(m.view(), 4, 0.0, 1.0).expect("valid domain");
        assert_eq!(t, 0.5);
    }

    #[test]
    fn uniform_input_keeps_the_first_bucket() {
        // All mass in one bucket: no split is ever scored and the threshold
        // falls back to the domain minimum.
        let m = Matrix::new_fill(4, 4, 0.5f32);
        let t = otsu_threshold(m.view(), 256, 0.0, 1.0).expect("valid domain");
        assert_eq!(t, 0.0);
    }

    #[test]
    fn fixed_overload_rounds_the_back_mapping() {
        let mut data = vec![FIXED_ONE / 8; 32];
        data.extend(vec![FIXED_ONE * 7 / 8; 32]);
        let m = Matrix::from_parts(8, 8, data);
        let t = otsu_threshold_fixed(m.view(), 256, 0, FIXED_ONE).expect("valid domain");
        assert!(
            t > FIXED_ONE / 8 && t < FIXED_ONE * 7 / 8,
            "threshold {t} outside the modes"
        );
    }

    #[test]
    fn invalid_domain_propagates() {
        let m = Matrix::new_fill(2, 2, 0.5f32);
        assert_eq!(
            otsu_threshold(m.view(), 0, 0.0, 1.0).unwrap_err(),
            Error::ArgumentOutOfRange { param: "buckets" }
        );
    }
}
