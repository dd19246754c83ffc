//! One-call chromaticity analysis.
//!
//! Runs the whole pipeline on a batch of linear samples:
//!
//! ```text
//! linear ─▶ to_log ─▶ log points ──────────────┐
//!                                              ▼
//! IsdSource ─▶ estimate ─▶ ISD ─▶ basis ─▶ plane(origin = centroid) ─▶ projections
//! ```

use bidr_core::{
    BidrResult, ColorSample, Direction, EngineConfig, LogColorSample, OrthonormalBasis, Plane,
    Projection,
};
use tracing::debug;

use crate::basis::build_basis_stabilized;
use crate::isd::{IsdEstimator, IsdSource, centroid};
use crate::log::to_log_batch;
use crate::patch::PlanePatch;
use crate::project::project;

/// Everything computed for one batch of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaticityAnalysis {
    /// Log-color points, index-aligned with the input samples.
    pub log_points: Vec<LogColorSample>,
    /// Estimated Illuminant Spectral Direction.
    pub isd: Direction,
    /// Basis built around the ISD.
    pub basis: OrthonormalBasis,
    /// Chromaticity plane through the centroid of `log_points`.
    pub plane: Plane,
    /// Projections, index-aligned with `log_points`.
    pub projections: Vec<Projection>,
}

impl ChromaticityAnalysis {
    /// The 2-D coordinates `(a, b)` of every projection.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.projections.iter().map(Projection::coords).collect()
    }

    /// Display patch covering the projected cloud, sized by `config.patch`.
    pub fn patch(&self, config: &EngineConfig) -> BidrResult<PlanePatch> {
        PlanePatch::fit(&self.plane, &self.projections, &config.patch)
    }
}

/// Analyzes `linear_samples`, estimating the ISD from `source`.
///
/// `source` is independent of the samples: pass illuminant vectors for a
/// synthetic scene, or lit/shadow log clusters picked from the same image.
///
/// # Example
///
/// ```rust
/// use bidr_chroma::analysis::analyze;
/// use bidr_chroma::isd::IsdSource;
/// use bidr_chroma::model::{observe, Illuminants};
/// use bidr_core::EngineConfig;
/// use bidr_math::Vec3;
///
/// let cfg = EngineConfig::synthetic();
/// let il = Illuminants::skylight_sun();
/// let samples: Vec<Vec3> = [0.0, 0.5, 1.0]
///     .iter()
///     .map(|&g| observe(Vec3::splat(0.55), &il, g).unwrap())
///     .collect();
///
/// let source = IsdSource::IlluminantVectors { ambient: il.ambient, direct: il.direct };
/// let result = analyze(&samples, &source, &cfg).unwrap();
/// assert_eq!(result.coordinates().len(), 3);
/// ```
pub fn analyze(
    linear_samples: &[ColorSample],
    source: &IsdSource<'_>,
    config: &EngineConfig,
) -> BidrResult<ChromaticityAnalysis> {
    config.validate()?;

    let log_points = to_log_batch(linear_samples, config.eps);
    let isd = IsdEstimator::new(*config).estimate(source)?;
    let basis = build_basis_stabilized(isd, config.stabilizer);
    basis.validate(config.basis_tolerance)?;

    let origin = centroid(&log_points)?;
    let plane = Plane::new(origin, &basis);
    let projections = project(&log_points, &plane);

    debug!(
        samples = log_points.len(),
        origin = ?origin.to_array(),
        "chromaticity analysis complete"
    );
    Ok(ChromaticityAnalysis {
        log_points,
        isd,
        basis,
        plane,
        projections,
    })
}
