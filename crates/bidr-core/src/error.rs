//! Error types for bidr-core operations.
//!
//! Every failure in the engine is a local input-validation failure detected
//! at the boundary of the component that owns the input. Nothing here is
//! transient, so nothing is retried; recovery is up to the caller.
//!
//! # Usage
//!
//! ```rust
//! use bidr_core::{BidrError, BidrResult};
//!
//! fn need_two(n: usize) -> BidrResult<()> {
//!     if n < 2 {
//!         return Err(BidrError::insufficient_samples(2, n, "trajectory"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(need_two(1).unwrap_err().is_insufficient_samples());
//! ```

use thiserror::Error;

/// Result type alias using [`BidrError`] as the error type.
pub type BidrResult<T> = std::result::Result<T, BidrError>;

/// Errors raised by direction estimation, basis construction, projection
/// and trajectory generation.
///
/// # Categories
///
/// - **Geometry**: [`DegenerateDirection`](BidrError::DegenerateDirection),
///   [`InvalidBasis`](BidrError::InvalidBasis)
/// - **Input size**: [`InsufficientSamples`](BidrError::InsufficientSamples),
///   [`SampleCountMismatch`](BidrError::SampleCountMismatch)
/// - **Configuration**: [`InvalidParameter`](BidrError::InvalidParameter),
///   [`Config`](BidrError::Config)
#[derive(Debug, Error)]
pub enum BidrError {
    /// A vector that must define a direction has near-zero norm.
    ///
    /// Raised before normalization when lit and shadow samples are
    /// indistinguishable, when an illuminant pair produces no log-space
    /// change, or when a caller hands in a zero vector.
    #[error("degenerate direction in {context}: norm {norm:e} is below threshold {threshold:e}")]
    DegenerateDirection {
        /// Norm of the vector before normalization
        norm: f64,
        /// Configured minimum norm
        threshold: f64,
        /// Operation that detected the degeneracy
        context: &'static str,
    },

    /// Too few samples to perform the operation.
    ///
    /// Raised for an empty lit/shadow set, an empty cluster, or a
    /// trajectory of fewer than two points.
    #[error("insufficient samples for {context}: need at least {required}, got {got}")]
    InsufficientSamples {
        /// Minimum sample count
        required: usize,
        /// Actual sample count
        got: usize,
        /// Operation that rejected the input
        context: &'static str,
    },

    /// A supplied basis violates the orthonormality or handedness invariant.
    #[error("invalid basis: {0}")]
    InvalidBasis(String),

    /// Paired lit/shadow inputs are not index-aligned.
    #[error("sample count mismatch: {lit} lit samples vs {shadow} shadow samples")]
    SampleCountMismatch {
        /// Number of lit samples
        lit: usize,
        /// Number of shadow samples
        shadow: usize,
    },

    /// A configuration value or call parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl BidrError {
    /// Creates a [`BidrError::DegenerateDirection`] error.
    #[inline]
    pub fn degenerate(norm: f64, threshold: f64, context: &'static str) -> Self {
        Self::DegenerateDirection {
            norm,
            threshold,
            context,
        }
    }

    /// Creates a [`BidrError::InsufficientSamples`] error.
    #[inline]
    pub fn insufficient_samples(required: usize, got: usize, context: &'static str) -> Self {
        Self::InsufficientSamples {
            required,
            got,
            context,
        }
    }

    /// Creates a [`BidrError::InvalidBasis`] error.
    #[inline]
    pub fn invalid_basis(msg: impl Into<String>) -> Self {
        Self::InvalidBasis(msg.into())
    }

    /// Creates a [`BidrError::SampleCountMismatch`] error.
    #[inline]
    pub fn count_mismatch(lit: usize, shadow: usize) -> Self {
        Self::SampleCountMismatch { lit, shadow }
    }

    /// Creates a [`BidrError::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns `true` for [`BidrError::DegenerateDirection`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateDirection { .. })
    }

    /// Returns `true` for [`BidrError::InsufficientSamples`].
    #[inline]
    pub fn is_insufficient_samples(&self) -> bool {
        matches!(self, Self::InsufficientSamples { .. })
    }

    /// Returns `true` for [`BidrError::InvalidBasis`].
    #[inline]
    pub fn is_invalid_basis(&self) -> bool {
        matches!(self, Self::InvalidBasis(_))
    }

    /// Returns `true` for configuration and parameter errors.
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_) | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_message() {
        let err = BidrError::degenerate(0.0, 1e-6, "isd");
        let msg = err.to_string();
        assert!(msg.contains("isd"));
        assert!(msg.contains("1e-6"));
        assert!(err.is_degenerate());
        assert!(!err.is_invalid_basis());
    }

    #[test]
    fn test_insufficient_samples_message() {
        let err = BidrError::insufficient_samples(2, 1, "trajectory");
        let msg = err.to_string();
        assert!(msg.contains("trajectory"));
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("got 1"));
        assert!(err.is_insufficient_samples());
    }

    #[test]
    fn test_count_mismatch_message() {
        let err = BidrError::count_mismatch(3, 2);
        assert!(err.to_string().contains("3 lit"));
        assert!(err.to_string().contains("2 shadow"));
    }

    #[test]
    fn test_config_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: BidrError = yaml_err.into();
        assert!(err.is_config_error());
        assert!(BidrError::invalid_parameter("eps").is_config_error());
    }
}
