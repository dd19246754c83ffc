//! Shadow-to-lit trajectories in log-color space.
//!
//! Under the BIDR model a single material traces a straight segment from its
//! fully shadowed log color to its fully lit log color. Sampling uses
//! `shadow·(1 - t) + lit·t` over `t = linspace(0, 1, n)`, which reproduces
//! both endpoints exactly.

use bidr_core::{BidrError, BidrResult, EngineConfig, LogColorSample, Trajectory};
use bidr_math::linspace;
use tracing::trace;

use crate::isd::centroid;

/// Samples `sample_count` evenly spaced points from `shadow_log` to `lit_log`.
///
/// Fails with [`BidrError::InsufficientSamples`] when `sample_count < 2`,
/// since a single point cannot describe a segment.
///
/// # Example
///
/// ```rust
/// use bidr_chroma::trajectory::build_trajectory;
/// use bidr_math::Vec3;
///
/// let t = build_trajectory(Vec3::ZERO, Vec3::ONE, 3).unwrap();
/// assert_eq!(t.points(), &[Vec3::ZERO, Vec3::splat(0.5), Vec3::ONE]);
/// ```
pub fn build_trajectory(
    shadow_log: LogColorSample,
    lit_log: LogColorSample,
    sample_count: usize,
) -> BidrResult<Trajectory> {
    if sample_count < 2 {
        return Err(BidrError::insufficient_samples(2, sample_count, "trajectory"));
    }
    trace!(sample_count, "trajectory::build_trajectory");
    let points = linspace(0.0, 1.0, sample_count)
        .into_iter()
        .map(|t| shadow_log.lerp(lit_log, t))
        .collect();
    Ok(Trajectory::new(points))
}

/// Trajectory between the centroids of a lit and a shadow cluster, using
/// `config.sample_count` samples.
pub fn trajectory_between_clusters(
    lit_cluster: &[LogColorSample],
    shadow_cluster: &[LogColorSample],
    config: &EngineConfig,
) -> BidrResult<Trajectory> {
    let lit = centroid(lit_cluster)?;
    let shadow = centroid(shadow_cluster)?;
    build_trajectory(shadow, lit, config.sample_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidr_math::Vec3;

    #[test]
    fn test_three_samples_exact() {
        let t = build_trajectory(Vec3::ZERO, Vec3::ONE, 3).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.points()[0], Vec3::ZERO);
        assert_eq!(t.points()[1], Vec3::splat(0.5));
        assert_eq!(t.points()[2], Vec3::ONE);
    }

    #[test]
    fn test_endpoints_exact() {
        let shadow = Vec3::new(-0.798, -0.868, -0.616);
        let lit = Vec3::new(-0.105, -0.357, -0.511);
        let t = build_trajectory(shadow, lit, 50).unwrap();
        assert_eq!(t.len(), 50);
        assert_eq!(t.shadow(), Some(shadow));
        assert_eq!(t.lit(), Some(lit));
    }

    #[test]
    fn test_collinear_and_monotone() {
        let shadow = Vec3::new(-2.0, -1.0, -0.5);
        let lit = Vec3::new(0.5, 0.0, 0.25);
        let dir = lit - shadow;
        let t = build_trajectory(shadow, lit, 17).unwrap();
        let mut last = f64::NEG_INFINITY;
        for p in &t {
            let rel = *p - shadow;
            assert!(rel.cross(dir).abs_diff_eq(Vec3::ZERO, 1e-12));
            let s = rel.dot(dir);
            assert!(s >= last);
            last = s;
        }
    }

    #[test]
    fn test_identical_endpoints() {
        let p = Vec3::new(0.1, 0.2, 0.3);
        let t = build_trajectory(p, p, 4).unwrap();
        assert!(t.iter().all(|q| q.abs_diff_eq(p, 1e-15)));
    }

    #[test]
    fn test_rejects_short() {
        for n in [0, 1] {
            let err = build_trajectory(Vec3::ZERO, Vec3::ONE, n).unwrap_err();
            assert!(err.is_insufficient_samples());
        }
        assert_eq!(build_trajectory(Vec3::ZERO, Vec3::ONE, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_between_clusters() {
        let cfg = EngineConfig::synthetic().with_sample_count(5);
        let lit = [Vec3::splat(1.0), Vec3::splat(3.0)];
        let shadow = [Vec3::splat(-1.0)];
        let t = trajectory_between_clusters(&lit, &shadow, &cfg).unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(t.shadow(), Some(Vec3::splat(-1.0)));
        assert_eq!(t.lit(), Some(Vec3::splat(2.0)));

        assert!(trajectory_between_clusters(&[], &shadow, &cfg).is_err());
    }
}
