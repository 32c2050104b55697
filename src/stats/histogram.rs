//! Bucketed histograms over a closed value range.
//!
//! The boundary rule is asymmetric on purpose: a value exactly equal to
//! `max` is clamped into the last bucket, while values outside [min, max]
//! are silently excluded from every bucket. Otsu's threshold search is
//! built directly on these counts and depends on the rule exactly as
//! stated.

use crate::error::Error;
use crate::matrix::MatrixView;

/// Count samples of a float matrix into `buckets` buckets over [min, max].
///
/// Bucket index is `floor((v − min) × buckets / (max − min))`; NaN fails the
/// in-range test and is excluded like any other out-of-range value.
pub fn histogram(
    m: MatrixView<'_, f32>,
    buckets: usize,
    min: f32,
    max: f32,
) -> Result<Vec<u32>, Error> {
    ensure_domain(buckets, max > min)?;
    let mut counts = vec![0u32; buckets];
    let last = buckets - 1;
    let scale = buckets as f64 / (f64::from(max) - f64::from(min));
    for row in m.rows() {
        for &v in row {
            if !(v >= min && v <= max) {
                continue;
            }
            let idx = if v == max {
                last
            } else {
                (((f64::from(v) - f64::from(min)) * scale) as usize).min(last)
            };
            counts[idx] += 1;
        }
    }
    Ok(counts)
}

/// Fixed-point overload of [`histogram`] in integer arithmetic.
pub fn histogram_fixed(
    m: MatrixView<'_, i32>,
    buckets: usize,
    min: i32,
    max: i32,
) -> Result<Vec<u32>, Error> {
    ensure_domain(buckets, max > min)?;
    let mut counts = vec![0u32; buckets];
    let last = buckets - 1;
    let span = i64::from(max) - i64::from(min);
    for row in m.rows() {
        for &v in row {
            if v < min || v > max {
                continue;
            }
            let idx = if v == max {
                last
            } else {
                (((i64::from(v) - i64::from(min)) * buckets as i64 / span) as usize).min(last)
            };
            counts[idx] += 1;
        }
    }
    Ok(counts)
}

fn ensure_domain(buckets: usize, ordered: bool) -> Result<(), Error> {
    if buckets == 0 {
        return Err(Error::ArgumentOutOfRange { param: "buckets" });
    }
    if !ordered {
        return Err(Error::ArgumentOutOfRange { param: "max" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn counts_plus_out_of_range_cover_every_sample() {
        let m = Matrix::from_vec(3, 2, vec![0.1f32, 0.5, 0.9, -0.2, 1.3, f32::NAN])
            .expect("3x2");
        let counts = histogram(m.view(), 4, 0.0, 1.0).expect("valid domain");
        let in_range: u32 = counts.iter().sum();
        // Three samples land in buckets; -0.2, 1.3 and NaN are dropped.
        assert_eq!(in_range, 3);
        assert_eq!(counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn single_bucket_collects_every_in_range_value() {
        let m = Matrix::from_vec(4, 1, vec![0.0f32, 0.3, 0.999, 1.0]).expect("4x1");
        let counts = histogram(m.view(), 1, 0.0, 1.0).expect("valid domain");
        assert_eq!(counts, vec![4]);
    }

    #[test]
    fn max_clamps_into_the_last_bucket() {
        let m = Matrix::from_vec(2, 1, vec![1.0f32, 0.999]).expect("2x1");
        let counts = histogram(m.view(), 10, 0.0, 1.0).expect("valid domain");
        assert_eq!(counts[9], 2);

        let fixed = Matrix::from_vec(1, 1, vec![100i32]).expect("1x1");
        let counts = histogram_fixed(fixed.view(), 10, 0, 100).expect("valid domain");
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn invalid_domains_are_rejected() {
        let m = Matrix::new_fill(1, 1, 0.0f32);
        assert_eq!(
            histogram(m.view(), 0, 0.0, 1.0).unwrap_err(),
            Error::ArgumentOutOfRange { param: "buckets" }
        );
        assert_eq!(
            histogram(m.view(), 4, 1.0, 1.0).unwrap_err(),
            Error::ArgumentOutOfRange { param: "max" }
        );
        let fixed = Matrix::new_fill(1, 1, 0i32);
        assert_eq!(
            histogram_fixed(fixed.view(), 4, 5, -5).unwrap_err(),
            Error::ArgumentOutOfRange { param: "max" }
        );
    }

    #[test]
    fn fixed_bucket_scaling_floors() {
        let fixed = Matrix::from_vec(4, 1, vec![0i32, 24, 25, 99]).expect("4x1");
        let counts = histogram_fixed(fixed.view(), 4, 0, 100).expect("valid domain");
        // 0 and 24 fall in bucket 0, 25 starts bucket 1, 99 tops bucket 3.
        assert_eq!(counts, vec![2, 1, 0, 1]);
    }
}
