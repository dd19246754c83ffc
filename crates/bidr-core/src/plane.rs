//! Chromaticity planes and projections onto them.

use bidr_math::Vec3;

use crate::basis::OrthonormalBasis;
use crate::error::{BidrError, BidrResult};

/// The affine plane `{origin + a·u1 + b·u2 : a, b ∈ ℝ}`.
///
/// # Example
///
/// ```rust
/// use bidr_core::Plane;
/// use bidr_math::Vec3;
///
/// let plane = Plane::from_axes(Vec3::splat(-1.0), Vec3::X, Vec3::Y, 1e-6).unwrap();
/// assert_eq!(plane.point_at(2.0, 3.0), Vec3::new(1.0, 2.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Point the 2-D coordinates are measured from.
    pub origin: Vec3,
    /// First in-plane axis.
    pub u1: Vec3,
    /// Second in-plane axis.
    pub u2: Vec3,
}

impl Plane {
    /// Plane through `origin` spanned by the in-plane axes of `basis`.
    pub fn new(origin: Vec3, basis: &OrthonormalBasis) -> Self {
        Self {
            origin,
            u1: basis.u1,
            u2: basis.u2,
        }
    }

    /// Plane from caller-supplied axes.
    ///
    /// Fails with [`BidrError::InvalidBasis`] unless `u1` and `u2` are unit
    /// length and orthogonal within `tol`; projection is only exact for an
    /// orthonormal pair.
    pub fn from_axes(origin: Vec3, u1: Vec3, u2: Vec3, tol: f64) -> BidrResult<Self> {
        for (name, axis) in [("u1", u1), ("u2", u2)] {
            let len = axis.length();
            if !axis.is_finite() || (len - 1.0).abs() > tol {
                return Err(BidrError::invalid_basis(format!(
                    "|{name}| = {len}, expected 1"
                )));
            }
        }
        let dot = u1.dot(u2);
        if dot.abs() > tol {
            return Err(BidrError::invalid_basis(format!("u1·u2 = {dot}, expected 0")));
        }
        Ok(Self { origin, u1, u2 })
    }

    /// The point with plane coordinates `(a, b)`.
    #[inline]
    pub fn point_at(&self, a: f64, b: f64) -> Vec3 {
        self.origin + self.u1 * a + self.u2 * b
    }

    /// Unit normal `u1 × u2`.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.u1.cross(self.u2)
    }
}

/// Orthogonal projection of one point onto a [`Plane`].
///
/// `point - origin` has no component along the plane normal, up to
/// floating-point error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Projected point in log-color space.
    pub point: Vec3,
    /// Coordinate along `u1`.
    pub a: f64,
    /// Coordinate along `u2`.
    pub b: f64,
}

impl Projection {
    /// The 2-D chromaticity coordinates `(a, b)`.
    #[inline]
    pub fn coords(&self) -> (f64, f64) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_plane_from_basis() {
        let basis = OrthonormalBasis {
            v: Direction::Z,
            u1: Vec3::X,
            u2: Vec3::Y,
        };
        let plane = Plane::new(Vec3::ONE, &basis);
        assert_eq!(plane.normal(), Vec3::Z);
        assert_eq!(plane.point_at(0.0, 0.0), Vec3::ONE);
    }

    #[test]
    fn test_from_axes_rejects_bad_axes() {
        assert!(Plane::from_axes(Vec3::ZERO, Vec3::X, Vec3::X, 1e-6)
            .unwrap_err()
            .is_invalid_basis());
        assert!(Plane::from_axes(Vec3::ZERO, Vec3::X * 0.5, Vec3::Y, 1e-6)
            .unwrap_err()
            .is_invalid_basis());
    }

    #[test]
    fn test_projection_coords() {
        let p = Projection {
            point: Vec3::ZERO,
            a: 0.25,
            b: -1.5,
        };
        assert_eq!(p.coords(), (0.25, -1.5));
    }
}
