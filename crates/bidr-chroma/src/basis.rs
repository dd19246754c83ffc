//! Orthonormal basis construction around the ISD.
//!
//! The first in-plane axis is obtained by Gram-Schmidt against a helper
//! axis: world X, unless the ISD is within `acos(0.9)` of X, in which case
//! world Y. The second axis is `isd × u1`, so `(isd, u1, u2)` is always
//! right-handed.

use bidr_core::config::DEFAULT_STABILIZER;
use bidr_core::{BidrResult, Direction, EngineConfig, OrthonormalBasis};
use bidr_math::Vec3;
use tracing::trace;

/// `|isd · X|` at or above which the helper axis switches from X to Y.
pub const HELPER_AXIS_THRESHOLD: f64 = 0.9;

/// The world axis Gram-Schmidt starts from for `isd`.
#[inline]
pub fn helper_axis(isd: Direction) -> Vec3 {
    if isd.dot(Vec3::X).abs() >= HELPER_AXIS_THRESHOLD {
        Vec3::Y
    } else {
        Vec3::X
    }
}

/// Builds `(isd, u1, u2)` with `u1, u2` spanning the plane perpendicular to `isd`.
///
/// Cannot fail: the helper choice keeps the Gram-Schmidt residual above
/// `sqrt(1 - 0.9²)`.
///
/// # Example
///
/// ```rust
/// use bidr_chroma::basis::build_basis;
/// use bidr_core::Direction;
/// use bidr_math::Vec3;
///
/// let b = build_basis(Direction::Z);
/// assert!(b.u1.abs_diff_eq(Vec3::X, 1e-9));
/// assert!(b.u2.abs_diff_eq(Vec3::Y, 1e-9));
/// ```
pub fn build_basis(isd: Direction) -> OrthonormalBasis {
    build_basis_stabilized(isd, DEFAULT_STABILIZER)
}

/// [`build_basis`] with an explicit stabilizer for the in-plane normalizations.
pub fn build_basis_stabilized(isd: Direction, stabilizer: f64) -> OrthonormalBasis {
    let v = isd.as_vec3();
    let a = helper_axis(isd);
    let u1 = (a - v * a.dot(v)).normalize_stabilized(stabilizer);
    let u2 = v.cross(u1).normalize_stabilized(stabilizer);
    trace!(isd = ?isd.to_array(), helper = ?a.to_array(), stabilizer, "basis::build_basis");
    OrthonormalBasis { v: isd, u1, u2 }
}

/// Normalizes `v` with the configured guard, then builds the basis around it.
///
/// `config.stabilizer` is used for all three axes.
///
/// Fails with [`BidrError::DegenerateDirection`](bidr_core::BidrError::DegenerateDirection)
/// when `|v| < config.min_norm`, and with
/// [`BidrError::InvalidParameter`](bidr_core::BidrError::InvalidParameter) when
/// the guard values are unusable.
pub fn build_basis_from_vector(v: Vec3, config: &EngineConfig) -> BidrResult<OrthonormalBasis> {
    let isd = Direction::normalize(v, config.min_norm, config.stabilizer, "basis construction")?;
    Ok(build_basis_stabilized(isd, config.stabilizer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bidr_core::BidrError;

    fn assert_orthonormal(b: &OrthonormalBasis) {
        assert!(b.validate(1e-6).is_ok(), "{b:?}");
        assert_abs_diff_eq!(b.v.dot(b.u1), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.v.dot(b.u2), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.u1.dot(b.u2), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_z_axis() {
        let b = build_basis(Direction::Z);
        assert!(b.u1.abs_diff_eq(Vec3::X, 1e-9));
        assert!(b.u2.abs_diff_eq(Vec3::Y, 1e-9));
        assert_orthonormal(&b);
    }

    #[test]
    fn test_x_axis_uses_y_helper() {
        assert_eq!(helper_axis(Direction::X), Vec3::Y);
        let b = build_basis(Direction::X);
        // u1 = Y, u2 = X × Y = Z
        assert!(b.u1.abs_diff_eq(Vec3::Y, 1e-9));
        assert!(b.u2.abs_diff_eq(Vec3::Z, 1e-9));
        assert_orthonormal(&b);
    }

    #[test]
    fn test_negative_x_uses_y_helper() {
        let b = build_basis(Direction::X.flipped());
        assert!(b.u1.abs_diff_eq(Vec3::Y, 1e-9));
        assert!(b.u2.abs_diff_eq(-Vec3::Z, 1e-9));
        assert_orthonormal(&b);
    }

    #[test]
    fn test_helper_threshold_boundary() {
        let just_below = Direction::new(Vec3::new(0.89, (1.0f64 - 0.89 * 0.89).sqrt(), 0.0)).unwrap();
        assert_eq!(helper_axis(just_below), Vec3::X);
        let at = Direction::new(Vec3::new(0.9, (1.0f64 - 0.81).sqrt(), 0.0)).unwrap();
        assert_eq!(helper_axis(at), Vec3::Y);
    }

    #[test]
    fn test_typical_isd() {
        let cfg = EngineConfig::synthetic();
        let b = build_basis_from_vector(Vec3::new(0.7, 0.5, 0.1), &cfg).unwrap();
        assert_orthonormal(&b);
        assert!(b.v.as_vec3().cross(b.u1).abs_diff_eq(b.u2, 1e-9));
    }

    #[test]
    fn test_from_vector_degenerate() {
        let cfg = EngineConfig::synthetic();
        let err = build_basis_from_vector(Vec3::splat(1e-9), &cfg).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_from_vector_rejects_unchecked_guard() {
        let cfg = EngineConfig::synthetic().with_min_norm(0.0);
        let err = build_basis_from_vector(Vec3::ZERO, &cfg).unwrap_err();
        assert!(matches!(err, BidrError::InvalidParameter(_)));

        let cfg = EngineConfig {
            stabilizer: 1.0,
            ..EngineConfig::synthetic()
        };
        let err = build_basis_from_vector(Vec3::X, &cfg).unwrap_err();
        assert!(matches!(err, BidrError::InvalidParameter(_)));
    }

    #[test]
    fn test_from_vector_uses_config_stabilizer() {
        let cfg = EngineConfig {
            stabilizer: 0.0,
            ..EngineConfig::synthetic()
        };
        let b = build_basis_from_vector(Vec3::new(0.0, 0.0, 2.0), &cfg).unwrap();
        assert_eq!(b.u1, Vec3::X);
        assert_eq!(b.u2, Vec3::Y);
        assert_eq!(b, build_basis_stabilized(Direction::Z, 0.0));
    }
}
