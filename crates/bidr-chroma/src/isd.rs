//! Illuminant Spectral Direction estimation.
//!
//! The ISD is the unit vector in log-color space along which a material's
//! color moves when the mix of ambient and direct light changes. It can be
//! estimated from three kinds of input, all described by [`IsdSource`]:
//!
//! | Variant | Raw vector |
//! |---------|------------|
//! | [`SamplePairs`](IsdSource::SamplePairs) | mean of `lit[i] - shadow[i]` |
//! | [`ClusterMeans`](IsdSource::ClusterMeans) | `mean(lit) - mean(shadow)` |
//! | [`IlluminantVectors`](IsdSource::IlluminantVectors) | `to_log(A + D) - to_log(A)` |
//!
//! Every variant ends in the same guarded normalization: a raw vector whose
//! norm is below [`EngineConfig::min_norm`] is rejected with
//! [`BidrError::DegenerateDirection`], anything else is divided by
//! `norm + stabilizer`. The sign is canonical: the ISD points from shadow
//! towards lit.
//!
//! # Example
//!
//! ```rust
//! use bidr_chroma::isd::estimate_isd;
//! use bidr_chroma::log::to_log;
//! use bidr_core::EngineConfig;
//! use bidr_math::Vec3;
//!
//! let cfg = EngineConfig::synthetic();
//! let lit = [to_log(Vec3::new(0.9, 0.7, 0.6), cfg.eps)];
//! let shadow = [to_log(Vec3::new(0.45, 0.42, 0.54), cfg.eps)];
//!
//! let isd = estimate_isd(&lit, &shadow, &cfg).unwrap();
//! assert_eq!(isd.as_vec3().argmax(), 0); // red is attenuated most in shadow
//! ```

use bidr_core::{
    BidrError, BidrResult, ColorSample, Direction, EngineConfig, LogColorSample,
};
use bidr_math::{Vec3, mean_vec3};
use tracing::{debug, trace};

use crate::log::to_log;

/// Input to ISD estimation.
#[derive(Debug, Clone, Copy)]
pub enum IsdSource<'a> {
    /// Index-aligned log-color pairs: `lit[i]` and `shadow[i]` are the same
    /// surface point under direct light and in shadow.
    SamplePairs {
        /// Lit log-color samples.
        lit: &'a [LogColorSample],
        /// Shadow log-color samples, same length as `lit`.
        shadow: &'a [LogColorSample],
    },
    /// Independent log-color clusters of one material; sizes may differ.
    ClusterMeans {
        /// Lit cluster.
        lit: &'a [LogColorSample],
        /// Shadow cluster.
        shadow: &'a [LogColorSample],
    },
    /// Linear illuminant vectors: ambient `A` and direct `D`.
    IlluminantVectors {
        /// Ambient illuminant.
        ambient: ColorSample,
        /// Direct illuminant.
        direct: ColorSample,
    },
}

impl IsdSource<'_> {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SamplePairs { .. } => "sample pairs",
            Self::ClusterMeans { .. } => "cluster means",
            Self::IlluminantVectors { .. } => "illuminant vectors",
        }
    }

    /// The shadow-to-lit vector before normalization.
    pub fn raw_difference(&self, config: &EngineConfig) -> BidrResult<Vec3> {
        match *self {
            Self::SamplePairs { lit, shadow } => {
                if lit.len() != shadow.len() {
                    return Err(BidrError::count_mismatch(lit.len(), shadow.len()));
                }
                if lit.is_empty() {
                    return Err(BidrError::insufficient_samples(1, 0, "ISD sample pairs"));
                }
                let sum: Vec3 = lit.iter().zip(shadow).map(|(&l, &s)| l - s).sum();
                Ok(sum / lit.len() as f64)
            }
            Self::ClusterMeans { lit, shadow } => {
                let lit_mean = centroid_of(lit, "ISD lit cluster")?;
                let shadow_mean = centroid_of(shadow, "ISD shadow cluster")?;
                Ok(lit_mean - shadow_mean)
            }
            Self::IlluminantVectors { ambient, direct } => {
                Ok(to_log(ambient + direct, config.eps) - to_log(ambient, config.eps))
            }
        }
    }
}

/// ISD estimator bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsdEstimator {
    config: EngineConfig,
}

impl IsdEstimator {
    /// Creates an estimator using `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Estimates the ISD from any [`IsdSource`].
    pub fn estimate(&self, source: &IsdSource<'_>) -> BidrResult<Direction> {
        trace!(source = source.name(), "isd::estimate");
        let raw = source.raw_difference(&self.config)?;
        let isd = normalize_isd(raw, &self.config)?;
        debug!(
            source = source.name(),
            norm = raw.length(),
            isd = ?isd.to_array(),
            "estimated ISD"
        );
        Ok(isd)
    }
}

/// Estimates the ISD from index-aligned lit/shadow log samples.
pub fn estimate_isd(
    lit_log_points: &[LogColorSample],
    shadow_log_points: &[LogColorSample],
    config: &EngineConfig,
) -> BidrResult<Direction> {
    IsdEstimator::new(*config).estimate(&IsdSource::SamplePairs {
        lit: lit_log_points,
        shadow: shadow_log_points,
    })
}

/// Estimates the ISD from an ambient illuminant and a direct illuminant.
pub fn isd_from_illuminants(
    ambient: ColorSample,
    direct: ColorSample,
    config: &EngineConfig,
) -> BidrResult<Direction> {
    IsdEstimator::new(*config).estimate(&IsdSource::IlluminantVectors { ambient, direct })
}

/// Component-wise mean of a log-color cluster.
///
/// Fails with [`BidrError::InsufficientSamples`] on an empty cluster.
pub fn centroid(points: &[LogColorSample]) -> BidrResult<LogColorSample> {
    centroid_of(points, "centroid")
}

fn centroid_of(points: &[LogColorSample], context: &'static str) -> BidrResult<LogColorSample> {
    mean_vec3(points).ok_or_else(|| BidrError::insufficient_samples(1, 0, context))
}

/// The normalization step shared by every estimator variant.
fn normalize_isd(raw: Vec3, config: &EngineConfig) -> BidrResult<Direction> {
    Direction::normalize(raw, config.min_norm, config.stabilizer, "ISD estimation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::to_log_batch;
    use approx::assert_abs_diff_eq;

    fn toy_lit() -> Vec<Vec3> {
        vec![
            Vec3::new(0.9, 0.7, 0.6),
            Vec3::new(0.85, 0.65, 0.55),
            Vec3::new(0.8, 0.6, 0.5),
        ]
    }

    fn toy_shadow() -> Vec<Vec3> {
        toy_lit()
            .into_iter()
            .map(|l| l * Vec3::new(0.5, 0.6, 0.9))
            .collect()
    }

    #[test]
    fn test_pairs_uniform_ratio() {
        let cfg = EngineConfig::synthetic();
        let lit = to_log_batch(&toy_lit(), cfg.eps);
        let shadow = to_log_batch(&toy_shadow(), cfg.eps);
        let isd = estimate_isd(&lit, &shadow, &cfg).unwrap();

        // Every pair differs by -ln(ratio), so the ISD is that vector normalized.
        let expected = -Vec3::new(0.5f64.ln(), 0.6f64.ln(), 0.9f64.ln());
        let expected = expected / expected.length();
        assert_abs_diff_eq!(isd.x(), expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(isd.y(), expected.y, epsilon = 1e-9);
        assert_abs_diff_eq!(isd.z(), expected.z, epsilon = 1e-9);
    }

    #[test]
    fn test_sign_points_shadow_to_lit() {
        let cfg = EngineConfig::synthetic();
        let lit = to_log_batch(&toy_lit(), cfg.eps);
        let shadow = to_log_batch(&toy_shadow(), cfg.eps);
        let isd = estimate_isd(&lit, &shadow, &cfg).unwrap();
        assert!(isd.as_vec3().min_element() > 0.0);

        let reversed = estimate_isd(&shadow, &lit, &cfg).unwrap();
        assert!(reversed.as_vec3().abs_diff_eq(isd.flipped().as_vec3(), 1e-12));
    }

    #[test]
    fn test_pairs_match_cluster_means() {
        let cfg = EngineConfig::synthetic();
        let lit = to_log_batch(&toy_lit(), cfg.eps);
        let shadow = to_log_batch(&toy_shadow(), cfg.eps);
        let est = IsdEstimator::new(cfg);
        let a = est.estimate(&IsdSource::SamplePairs { lit: &lit, shadow: &shadow }).unwrap();
        let b = est.estimate(&IsdSource::ClusterMeans { lit: &lit, shadow: &shadow }).unwrap();
        assert!(a.as_vec3().abs_diff_eq(b.as_vec3(), 1e-12));
    }

    #[test]
    fn test_cluster_means_unequal_sizes() {
        let cfg = EngineConfig::synthetic();
        let lit = [Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 3.0)];
        let shadow = [Vec3::ZERO];
        let isd = IsdEstimator::new(cfg)
            .estimate(&IsdSource::ClusterMeans { lit: &lit, shadow: &shadow })
            .unwrap();
        assert!(isd.as_vec3().abs_diff_eq(Vec3::Z, 1e-9));
    }

    #[test]
    fn test_illuminant_vectors() {
        let cfg = EngineConfig::synthetic();
        let a = Vec3::new(0.25, 0.35, 0.95);
        let d = Vec3::new(1.0, 0.95, 0.8);
        let isd = isd_from_illuminants(a, d, &cfg).unwrap();

        let raw = (a + d).ln() - a.ln();
        let expected = raw / raw.length();
        assert!(isd.as_vec3().abs_diff_eq(expected, 1e-9));
        assert_abs_diff_eq!(isd.as_vec3().length(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_identical_samples() {
        let cfg = EngineConfig::synthetic();
        let pts = to_log_batch(&toy_lit(), cfg.eps);
        let err = estimate_isd(&pts, &pts, &cfg).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_rejects_unchecked_guard_values() {
        let cfg = EngineConfig::synthetic();
        let pts = to_log_batch(&toy_lit(), cfg.eps);
        let err = estimate_isd(&pts, &pts, &cfg.with_min_norm(0.0)).unwrap_err();
        assert!(matches!(err, BidrError::InvalidParameter(_)));

        let loose = EngineConfig {
            stabilizer: 1.0,
            ..cfg
        };
        let err = estimate_isd(&[Vec3::X], &[Vec3::ZERO], &loose).unwrap_err();
        assert!(matches!(err, BidrError::InvalidParameter(_)));

        let err = isd_from_illuminants(Vec3::splat(0.5), Vec3::ONE, &loose).unwrap_err();
        assert!(matches!(err, BidrError::InvalidParameter(_)));
    }

    #[test]
    fn test_degenerate_zero_direct() {
        let cfg = EngineConfig::synthetic();
        let err = isd_from_illuminants(Vec3::splat(0.5), Vec3::ZERO, &cfg).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_empty_and_mismatched_input() {
        let cfg = EngineConfig::synthetic();
        let err = estimate_isd(&[], &[], &cfg).unwrap_err();
        assert!(err.is_insufficient_samples());

        let err = estimate_isd(&[Vec3::ONE], &[], &cfg).unwrap_err();
        assert!(matches!(err, BidrError::SampleCountMismatch { lit: 1, shadow: 0 }));

        let err = IsdEstimator::new(cfg)
            .estimate(&IsdSource::ClusterMeans { lit: &[Vec3::ONE], shadow: &[] })
            .unwrap_err();
        assert!(err.is_insufficient_samples());
    }

    #[test]
    fn test_centroid() {
        let c = centroid(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 2.0, 1.0)]).unwrap();
        assert_eq!(c, Vec3::splat(2.0));
        assert!(centroid(&[]).unwrap_err().is_insufficient_samples());
    }
}
