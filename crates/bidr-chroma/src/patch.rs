//! Finite display patch of a chromaticity plane.
//!
//! A plane is unbounded; to draw it next to a point cloud we need a grid
//! that covers the projected points. Outliers are ignored by spanning the
//! `[lower, upper]` percentile range of each coordinate, then padding the
//! range by a fraction of its width.

use bidr_core::{BidrError, BidrResult, PatchConfig, Plane, Projection};
use bidr_math::{Vec3, linspace, percentile};
use tracing::debug;

/// A `resolution × resolution` grid of 3-D points on a plane.
///
/// Points are stored row-major: row `i` has constant `b`, column `j` has
/// constant `a`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanePatch {
    a_range: (f64, f64),
    b_range: (f64, f64),
    resolution: usize,
    points: Vec<Vec3>,
}

impl PlanePatch {
    /// Fits a patch to the projected cloud.
    ///
    /// Fails with [`BidrError::InsufficientSamples`] on an empty cloud and
    /// with [`BidrError::InvalidParameter`] on a bad `config`.
    pub fn fit(plane: &Plane, projections: &[Projection], config: &PatchConfig) -> BidrResult<Self> {
        config.validate()?;
        if projections.is_empty() {
            return Err(BidrError::insufficient_samples(1, 0, "plane patch"));
        }

        let a: Vec<f64> = projections.iter().map(|p| p.a).collect();
        let b: Vec<f64> = projections.iter().map(|p| p.b).collect();
        let a_range = padded_range(&a, config)?;
        let b_range = padded_range(&b, config)?;

        let res = config.resolution;
        let a_grid = linspace(a_range.0, a_range.1, res);
        let b_grid = linspace(b_range.0, b_range.1, res);
        let points = b_grid
            .iter()
            .flat_map(|&bv| a_grid.iter().map(move |&av| (av, bv)))
            .map(|(av, bv)| plane.point_at(av, bv))
            .collect();

        debug!(?a_range, ?b_range, resolution = res, "fitted plane patch");
        Ok(Self {
            a_range,
            b_range,
            resolution: res,
            points,
        })
    }

    /// All grid points, row-major.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Grid rows, one per `b` value.
    pub fn rows(&self) -> impl Iterator<Item = &[Vec3]> {
        self.points.chunks(self.resolution)
    }

    /// Padded extent along `u1`.
    pub fn a_range(&self) -> (f64, f64) {
        self.a_range
    }

    /// Padded extent along `u2`.
    pub fn b_range(&self) -> (f64, f64) {
        self.b_range
    }

    /// Grid points per axis.
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

fn padded_range(values: &[f64], config: &PatchConfig) -> BidrResult<(f64, f64)> {
    let lo = percentile(values, config.lower_percentile);
    let hi = percentile(values, config.upper_percentile);
    let (Some(lo), Some(hi)) = (lo, hi) else {
        return Err(BidrError::insufficient_samples(1, 0, "plane patch"));
    };
    let pad = config.padding * (hi - lo + 1e-12);
    Ok((lo - pad, hi + pad))
}
