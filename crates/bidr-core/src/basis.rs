//! Right-handed orthonormal bases.

use bidr_math::Vec3;

use crate::direction::Direction;
use crate::error::{BidrError, BidrResult};

/// A triple `(v, u1, u2)` of mutually orthogonal unit vectors.
///
/// `v` is the direction the basis was built around (the ISD); `u1` and `u2`
/// span the plane perpendicular to it. The triple is right-handed:
/// `u2 = v × u1`.
///
/// Fields are public so callers can assemble a basis from external data;
/// run [`validate`](Self::validate) on such a basis before projecting with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalBasis {
    /// Normal of the chromaticity plane.
    pub v: Direction,
    /// First in-plane axis.
    pub u1: Vec3,
    /// Second in-plane axis, `v × u1`.
    pub u2: Vec3,
}

impl OrthonormalBasis {
    /// Assembles a basis from raw axes and validates it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bidr_core::OrthonormalBasis;
    /// use bidr_math::Vec3;
    ///
    /// let b = OrthonormalBasis::try_from_axes(Vec3::Z, Vec3::X, Vec3::Y, 1e-6).unwrap();
    /// assert_eq!(b.u2, Vec3::Y);
    ///
    /// // Left-handed triple is rejected.
    /// assert!(OrthonormalBasis::try_from_axes(Vec3::Z, Vec3::Y, Vec3::X, 1e-6).is_err());
    /// ```
    pub fn try_from_axes(v: Vec3, u1: Vec3, u2: Vec3, tol: f64) -> BidrResult<Self> {
        let v = Direction::new(v).map_err(|e| BidrError::invalid_basis(format!("v: {e}")))?;
        let basis = Self { v, u1, u2 };
        basis.validate(tol)?;
        Ok(basis)
    }

    /// Checks unit length, pairwise orthogonality and handedness within `tol`.
    pub fn validate(&self, tol: f64) -> BidrResult<()> {
        let v = self.v.as_vec3();
        for (name, axis) in [("v", v), ("u1", self.u1), ("u2", self.u2)] {
            let len = axis.length();
            if !axis.is_finite() || (len - 1.0).abs() > tol {
                return Err(BidrError::invalid_basis(format!(
                    "|{name}| = {len}, expected 1"
                )));
            }
        }
        for (name, dot) in [
            ("v·u1", v.dot(self.u1)),
            ("v·u2", v.dot(self.u2)),
            ("u1·u2", self.u1.dot(self.u2)),
        ] {
            if dot.abs() > tol {
                return Err(BidrError::invalid_basis(format!(
                    "{name} = {dot}, expected 0"
                )));
            }
        }
        if !v.cross(self.u1).abs_diff_eq(self.u2, tol) {
            return Err(BidrError::invalid_basis("basis is not right-handed (u2 != v × u1)"));
        }
        Ok(())
    }

    /// Expresses `d` in basis coordinates `(d·u1, d·u2, d·v)`.
    #[inline]
    pub fn coordinates(&self, d: Vec3) -> Vec3 {
        Vec3::new(d.dot(self.u1), d.dot(self.u2), self.v.dot(d))
    }
}
