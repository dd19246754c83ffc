//! Batch statistics over scalars and color triplets.
//!
//! All functions return `None` for an empty batch instead of inventing a
//! value; the caller decides what an empty cluster means.

use crate::Vec3;

/// Component-wise mean of a batch of triplets.
///
/// # Example
///
/// ```rust
/// use bidr_math::{mean_vec3, Vec3};
///
/// let c = mean_vec3(&[Vec3::ZERO, Vec3::splat(2.0)]).unwrap();
/// assert_eq!(c, Vec3::ONE);
/// ```
pub fn mean_vec3(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().sum::<Vec3>() / points.len() as f64)
}

/// Smallest and largest value of a batch, ignoring NaN.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Percentile with linear interpolation between closest ranks.
///
/// `p` is in percent and clamped to [0, 100]. The rank of the `p`-th
/// percentile is `p / 100 * (n - 1)`; fractional ranks interpolate between
/// the two neighbouring sorted values.
///
/// # Example
///
/// ```rust
/// use bidr_math::percentile;
///
/// let v = [4.0, 1.0, 3.0, 2.0, 5.0];
/// assert_eq!(percentile(&v, 0.0), Some(1.0));
/// assert_eq!(percentile(&v, 50.0), Some(3.0));
/// assert_eq!(percentile(&v, 100.0), Some(5.0));
/// assert_eq!(percentile(&v, 12.5), Some(1.5));
/// ```
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
