//! Engine configuration.
//!
//! Every tunable the engine reads is carried by an explicit
//! [`EngineConfig`] value passed into each call; there are no module-level
//! knobs. Two presets cover the common cases:
//!
//! | Preset | `eps` | Use |
//! |--------|-------|-----|
//! | [`EngineConfig::synthetic`] | 1e-8 | Clean synthetic data |
//! | [`EngineConfig::image`] | 1e-6 | Image data with quantization noise |
//!
//! Configurations can also be read from YAML; missing keys take defaults:
//!
//! ```rust
//! use bidr_core::EngineConfig;
//!
//! let cfg = EngineConfig::from_yaml_str("eps: 1.0e-6\nsample_count: 10\n").unwrap();
//! assert_eq!(cfg.sample_count, 10);
//! assert_eq!(cfg.min_norm, 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BidrError, BidrResult};

/// Log clamp floor for clean synthetic data.
pub const DEFAULT_EPS_SYNTHETIC: f64 = 1e-8;

/// Log clamp floor for quantized image data.
pub const DEFAULT_EPS_IMAGE: f64 = 1e-6;

/// Minimum pre-normalization norm accepted as a direction.
pub const DEFAULT_MIN_NORM: f64 = 1e-6;

/// Added to norms before dividing.
pub const DEFAULT_STABILIZER: f64 = 1e-12;

/// Trajectory resolution of the reference visualizations.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Orthonormality tolerance for caller-supplied bases.
pub const DEFAULT_BASIS_TOLERANCE: f64 = 1e-6;

/// Configuration shared by all engine components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Floor applied to each component before the logarithm.
    pub eps: f64,
    /// Directions whose pre-normalization norm is below this are rejected.
    pub min_norm: f64,
    /// Added to the norm in every normalization.
    pub stabilizer: f64,
    /// Number of trajectory points, at least 2.
    pub sample_count: usize,
    /// Tolerance for validating externally supplied bases.
    pub basis_tolerance: f64,
    /// Plane patch fitting.
    pub patch: PatchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::synthetic()
    }
}

impl EngineConfig {
    /// Defaults for clean synthetic data (`eps = 1e-8`).
    pub const fn synthetic() -> Self {
        Self {
            eps: DEFAULT_EPS_SYNTHETIC,
            min_norm: DEFAULT_MIN_NORM,
            stabilizer: DEFAULT_STABILIZER,
            sample_count: DEFAULT_SAMPLE_COUNT,
            basis_tolerance: DEFAULT_BASIS_TOLERANCE,
            patch: PatchConfig::new(),
        }
    }

    /// Defaults for image data (`eps = 1e-6`).
    pub const fn image() -> Self {
        Self {
            eps: DEFAULT_EPS_IMAGE,
            ..Self::synthetic()
        }
    }

    /// Sets the log clamp floor.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Sets the trajectory resolution.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Sets the degenerate-direction guard.
    pub fn with_min_norm(mut self, min_norm: f64) -> Self {
        self.min_norm = min_norm;
        self
    }

    /// Sets the plane patch configuration.
    pub fn with_patch(mut self, patch: PatchConfig) -> Self {
        self.patch = patch;
        self
    }

    /// Parses YAML and validates the result.
    pub fn from_yaml_str(yaml: &str) -> BidrResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field for a usable value.
    pub fn validate(&self) -> BidrResult<()> {
        positive("eps", self.eps)?;
        positive("min_norm", self.min_norm)?;
        positive("stabilizer", self.stabilizer)?;
        positive("basis_tolerance", self.basis_tolerance)?;
        if self.sample_count < 2 {
            return Err(BidrError::invalid_parameter(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        self.patch.validate()
    }
}

/// How a display patch of the chromaticity plane is sized.
///
/// The patch spans the `[lower, upper]` percentile range of the projected
/// coordinates on each axis, widened by `padding` times that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// Lower percentile, in percent.
    pub lower_percentile: f64,
    /// Upper percentile, in percent.
    pub upper_percentile: f64,
    /// Fraction of the percentile range added on each side.
    pub padding: f64,
    /// Grid points per axis.
    pub resolution: usize,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchConfig {
    /// 2nd to 98th percentile, 15% padding, 20x20 grid.
    pub const fn new() -> Self {
        Self {
            lower_percentile: 2.0,
            upper_percentile: 98.0,
            padding: 0.15,
            resolution: 20,
        }
    }

    /// Checks percentile order, padding sign and grid size.
    pub fn validate(&self) -> BidrResult<()> {
        let (lo, hi) = (self.lower_percentile, self.upper_percentile);
        if !(0.0..=100.0).contains(&lo) || !(0.0..=100.0).contains(&hi) || lo >= hi {
            return Err(BidrError::invalid_parameter(format!(
                "patch percentiles must satisfy 0 <= lower < upper <= 100, got {lo}..{hi}"
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(BidrError::invalid_parameter(format!(
                "patch padding must be non-negative, got {}",
                self.padding
            )));
        }
        if self.resolution < 2 {
            return Err(BidrError::invalid_parameter(format!(
                "patch resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> BidrResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BidrError::invalid_parameter(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
