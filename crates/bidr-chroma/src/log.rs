//! Linear radiance to log-color conversion.
//!
//! Each component is clamped to `max(x, eps)` before the natural log, so
//! zero, negative and NaN input map to `ln(eps)` instead of `-inf` or NaN.
//! Clamping is the only safety mechanism; nothing here fails.
//!
//! The transform is reversible above the clamp floor only:
//!
//! ```rust
//! use bidr_chroma::log::{from_log, to_log};
//! use bidr_math::Vec3;
//!
//! let rgb = Vec3::new(0.9, 0.7, 0.6);
//! let back = from_log(to_log(rgb, 1e-8));
//! assert!(back.abs_diff_eq(rgb, 1e-12));
//!
//! // Clamped: the zero channel does not come back.
//! let dark = from_log(to_log(Vec3::new(0.0, 0.5, 0.5), 1e-8));
//! assert!((dark.x - 1e-8).abs() < 1e-20);
//! ```

use bidr_core::{ColorSample, LogColorSample};
use bidr_math::Vec3;
use tracing::trace;

use crate::batch::map_batch;

/// Converts one linear sample to log space.
#[inline]
pub fn to_log(sample: ColorSample, eps: f64) -> LogColorSample {
    sample.max(Vec3::splat(eps)).ln()
}

/// Converts a batch of linear samples to log space, preserving order.
pub fn to_log_batch(samples: &[ColorSample], eps: f64) -> Vec<LogColorSample> {
    trace!(count = samples.len(), eps, "log::to_log_batch");
    map_batch(samples, |&s| to_log(s, eps))
}

/// Component-wise exponential, the inverse of [`to_log`] above `eps`.
#[inline]
pub fn from_log(sample: LogColorSample) -> ColorSample {
    sample.exp()
}

/// Exponentiates a batch of log samples, preserving order.
pub fn from_log_batch(samples: &[LogColorSample]) -> Vec<ColorSample> {
    map_batch(samples, |&s| from_log(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_to_log_values() {
        let l = to_log(Vec3::new(1.0, std::f64::consts::E, 0.5), 1e-8);
        assert_abs_diff_eq!(l.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(l.y, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(l.z, 0.5f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn test_clamp_zero_negative_nan() {
        let eps = 1e-6;
        let l = to_log(Vec3::new(0.0, -3.0, f64::NAN), eps);
        let floor = eps.ln();
        assert_eq!(l, Vec3::splat(floor));
        assert!(l.is_finite());
    }

    #[test]
    fn test_roundtrip_above_eps() {
        let samples = [
            Vec3::new(0.45, 0.42, 0.54),
            Vec3::new(1e-5, 2.0, 0.999),
            Vec3::splat(3.0),
        ];
        let back = from_log_batch(&to_log_batch(&samples, 1e-8));
        for (orig, rec) in samples.iter().zip(back.iter()) {
            assert_abs_diff_eq!(orig.x, rec.x, epsilon = 1e-12);
            assert_abs_diff_eq!(orig.y, rec.y, epsilon = 1e-12);
            assert_abs_diff_eq!(orig.z, rec.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_batch_order() {
        let samples: Vec<Vec3> = (1..=10_000).map(|i| Vec3::splat(i as f64)).collect();
        let logs = to_log_batch(&samples, 1e-8);
        assert_eq!(logs.len(), samples.len());
        for (i, l) in logs.iter().enumerate() {
            assert_abs_diff_eq!(l.x, ((i + 1) as f64).ln(), epsilon = 1e-12);
        }
    }
}
