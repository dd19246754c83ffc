//! The Bi-illumination Dichromatic Reflection forward model.
//!
//! A surface with reflectance `R` under ambient light `A` and a direct
//! source `D` is observed as `I = R · (A + γ·D)`, with `γ ∈ [0, 1]` the
//! fraction of direct light reaching it (0 in full shadow, 1 fully lit).
//! All products are component-wise.

use bidr_core::{BidrError, BidrResult, ColorSample, Direction, EngineConfig};
use bidr_math::Vec3;

use crate::isd::isd_from_illuminants;

/// An ambient/direct illuminant pair in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illuminants {
    /// Ambient illuminant `A`, present everywhere.
    pub ambient: Vec3,
    /// Direct illuminant `D`, blocked in shadow.
    pub direct: Vec3,
}

impl Illuminants {
    /// Creates an illuminant pair.
    pub const fn new(ambient: Vec3, direct: Vec3) -> Self {
        Self { ambient, direct }
    }

    /// Outdoor reference: bluish skylight ambient and yellowish sun.
    pub const fn skylight_sun() -> Self {
        Self::new(Vec3::new(0.25, 0.35, 0.95), Vec3::new(1.00, 0.95, 0.80))
    }

    /// Effective illuminant `A + γ·D`.
    pub fn mix(&self, gamma: f64) -> BidrResult<Vec3> {
        check_gamma(gamma)?;
        Ok(self.ambient + self.direct * gamma)
    }

    /// Per-channel fraction of light remaining in full shadow, `A / (A + D)`.
    pub fn shadow_ratio(&self) -> Vec3 {
        self.ambient / (self.ambient + self.direct)
    }

    /// The ISD this pair induces, `normalize(ln(A + D) - ln(A))`.
    pub fn isd(&self, config: &EngineConfig) -> BidrResult<Direction> {
        isd_from_illuminants(self.ambient, self.direct, config)
    }
}

impl Default for Illuminants {
    fn default() -> Self {
        Self::skylight_sun()
    }
}

/// Observed radiance of reflectance `r` under `illuminants` at direct fraction `gamma`.
///
/// # Example
///
/// ```rust
/// use bidr_chroma::model::{observe, Illuminants};
/// use bidr_math::Vec3;
///
/// let illum = Illuminants::skylight_sun();
/// let shadow = observe(Vec3::splat(0.5), &illum, 0.0).unwrap();
/// assert_eq!(shadow, illum.ambient * 0.5);
///
/// assert!(observe(Vec3::ONE, &illum, 1.5).is_err());
/// ```
pub fn observe(reflectance: Vec3, illuminants: &Illuminants, gamma: f64) -> BidrResult<ColorSample> {
    Ok(reflectance * illuminants.mix(gamma)?)
}

fn check_gamma(gamma: f64) -> BidrResult<()> {
    if !(0.0..=1.0).contains(&gamma) {
        return Err(BidrError::invalid_parameter(format!(
            "gamma must be in [0, 1], got {gamma}"
        )));
    }
    Ok(())
}
