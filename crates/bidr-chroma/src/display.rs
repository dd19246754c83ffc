//! Display mapping helpers.
//!
//! Small utilities for turning linear or log values into something a viewer
//! can show: min-max scaling, luma, and the normalized log tone curve used
//! to compare linear and log encodings. The inverse log transform is
//! re-exported here for viewers that work from log data.

use bidr_core::ColorSample;
use bidr_math::{Vec3, linspace, min_max};

pub use crate::log::{from_log, from_log_batch};

/// Rec.601 luma weights.
pub const LUMA_WEIGHTS: Vec3 = Vec3::new(0.2989, 0.5870, 0.1140);

/// Denominator guard for [`normalize_unit_range`].
const RANGE_EPS: f64 = 1e-8;

/// Weighted sum of the RGB channels.
#[inline]
pub fn luma(sample: ColorSample) -> f64 {
    sample.dot(LUMA_WEIGHTS)
}

/// Min-max scales `values` to roughly `[0, 1)`: `(x - min) / (max - min + 1e-8)`.
///
/// A constant input maps to all zeros. NaN entries are ignored when finding
/// the range and stay NaN.
pub fn normalize_unit_range(values: &[f64]) -> Vec<f64> {
    let Some((lo, hi)) = min_max(values) else {
        return Vec::new();
    };
    let scale = hi - lo + RANGE_EPS;
    values.iter().map(|v| (v - lo) / scale).collect()
}

/// Log tone curve mapping `[0, 1]` onto `[0, 1]`.
///
/// `(ln(x + eps) - ln(eps)) / (ln(1 + eps) - ln(eps))`
///
/// # Example
///
/// ```rust
/// use bidr_chroma::display::log_display_curve;
///
/// assert_eq!(log_display_curve(0.0, 1e-6), 0.0);
/// assert!((log_display_curve(1.0, 1e-6) - 1.0).abs() < 1e-12);
/// assert!(log_display_curve(0.01, 1e-6) > 0.5);
/// ```
pub fn log_display_curve(x: f64, eps: f64) -> f64 {
    let floor = eps.ln();
    ((x + eps).ln() - floor) / ((1.0 + eps).ln() - floor)
}

/// Samples of the linear and log display curves over `count` inputs in `[0, 1]`.
///
/// Returns `(x, linear, log)` triples.
pub fn display_curves(count: usize, eps: f64) -> Vec<(f64, f64, f64)> {
    linspace(0.0, 1.0, count)
        .into_iter()
        .map(|x| (x, x, log_display_curve(x, eps)))
        .collect()
}
