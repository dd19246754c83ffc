//! Orthogonal projection of log-color points onto a chromaticity plane.
//!
//! For a point `p` and plane `(origin, u1, u2)`:
//!
//! ```text
//! d     = p - origin
//! a, b  = d·u1, d·u2
//! proj  = origin + a·u1 + b·u2
//! ```
//!
//! Output is index-aligned with input. Large batches run on the rayon pool
//! when the `parallel` feature is on; ordering is preserved either way.

use bidr_core::{BidrResult, LogColorSample, Plane, Projection};
use bidr_math::Vec3;
use tracing::trace;

use crate::batch::map_batch;

/// Projects one point onto `plane`.
#[inline]
pub fn project_point(point: LogColorSample, plane: &Plane) -> Projection {
    let d = point - plane.origin;
    let a = d.dot(plane.u1);
    let b = d.dot(plane.u2);
    Projection {
        point: plane.point_at(a, b),
        a,
        b,
    }
}

/// Projects every point onto `plane`, preserving order.
pub fn project(points: &[LogColorSample], plane: &Plane) -> Vec<Projection> {
    trace!(count = points.len(), "project::project");
    map_batch(points, |&p| project_point(p, plane))
}

/// Projects onto the plane spanned by caller-supplied axes.
///
/// Fails with [`BidrError::InvalidBasis`](bidr_core::BidrError::InvalidBasis)
/// unless `u1` and `u2` are orthonormal within `tol`.
pub fn project_with_axes(
    points: &[LogColorSample],
    origin: Vec3,
    u1: Vec3,
    u2: Vec3,
    tol: f64,
) -> BidrResult<Vec<Projection>> {
    let plane = Plane::from_axes(origin, u1, u2, tol)?;
    Ok(project(points, &plane))
}
