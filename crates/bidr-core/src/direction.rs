//! Unit directions in log-color space.
//!
//! A [`Direction`] can only be obtained through a constructor that either
//! checks unit length or performs the guarded normalization shared by every
//! direction-producing path in the engine.

use bidr_math::Vec3;

use crate::error::{BidrError, BidrResult};

/// Tolerance for the unit-length invariant of [`Direction`].
pub const UNIT_TOLERANCE: f64 = 1e-6;

/// A unit-length 3-vector.
///
/// Two directions are equal only when their components are; `d` and `-d`
/// are different directions. The ISD carries a canonical sign given by
/// lit-minus-shadow ordering.
///
/// # Example
///
/// ```rust
/// use bidr_core::Direction;
/// use bidr_math::Vec3;
///
/// let d = Direction::normalize(Vec3::new(3.0, 0.0, 4.0), 1e-6, 1e-12, "example").unwrap();
/// assert!((d.x() - 0.6).abs() < 1e-9);
///
/// assert!(Direction::normalize(Vec3::ZERO, 1e-6, 1e-12, "example").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction(Vec3);

impl Direction {
    /// World X axis.
    pub const X: Self = Self(Vec3::X);
    /// World Y axis.
    pub const Y: Self = Self(Vec3::Y);
    /// World Z axis.
    pub const Z: Self = Self(Vec3::Z);

    /// Wraps a vector that is already unit length.
    ///
    /// Fails with [`BidrError::InvalidParameter`] if the norm differs from 1
    /// by more than [`UNIT_TOLERANCE`] or a component is not finite.
    pub fn new(v: Vec3) -> BidrResult<Self> {
        let len = v.length();
        if !v.is_finite() || (len - 1.0).abs() > UNIT_TOLERANCE {
            return Err(BidrError::invalid_parameter(format!(
                "direction must be unit length, got norm {len}"
            )));
        }
        Ok(Self(v))
    }

    /// Guarded normalization.
    ///
    /// Rejects `v` with [`BidrError::DegenerateDirection`] when its norm is
    /// below `min_norm` (or not finite), otherwise divides by
    /// `norm + stabilizer`.
    ///
    /// Fails with [`BidrError::InvalidParameter`] when `min_norm` is not a
    /// positive finite value, `stabilizer` is negative or not finite, or the
    /// stabilizer is large enough to pull the result off unit length.
    pub fn normalize(
        v: Vec3,
        min_norm: f64,
        stabilizer: f64,
        context: &'static str,
    ) -> BidrResult<Self> {
        if !min_norm.is_finite() || min_norm <= 0.0 {
            return Err(BidrError::invalid_parameter(format!(
                "{context}: min_norm must be positive and finite, got {min_norm}"
            )));
        }
        if !stabilizer.is_finite() || stabilizer < 0.0 {
            return Err(BidrError::invalid_parameter(format!(
                "{context}: stabilizer must be non-negative and finite, got {stabilizer}"
            )));
        }
        let norm = v.length();
        if !norm.is_finite() || norm < min_norm {
            return Err(BidrError::degenerate(norm, min_norm, context));
        }
        let unit = v.normalize_stabilized(stabilizer);
        let len = unit.length();
        if (len - 1.0).abs() > UNIT_TOLERANCE {
            return Err(BidrError::invalid_parameter(format!(
                "{context}: stabilizer {stabilizer} leaves norm {len} for input norm {norm}"
            )));
        }
        Ok(Self(unit))
    }

    /// The underlying unit vector.
    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        self.0
    }

    /// R component.
    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    /// G component.
    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// B component.
    #[inline]
    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Dot product with an arbitrary vector.
    #[inline]
    pub fn dot(self, v: Vec3) -> f64 {
        self.0.dot(v)
    }

    /// The opposite direction.
    #[inline]
    pub fn flipped(self) -> Self {
        Self(-self.0)
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        self.0.to_array()
    }
}

impl From<Direction> for Vec3 {
    #[inline]
    fn from(d: Direction) -> Vec3 {
        d.0
    }
}
