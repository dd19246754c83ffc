//! # bidr-core
//!
//! Core types for bi-illumination log-color analysis.
//!
//! Under the Bi-illumination Dichromatic Reflection model a surface lit by
//! ambient light `A` and a direct source `D` is observed as
//! `I = R · (A + γ·D)`. In log space the lit/shadow change becomes additive
//! and every material moves along the same direction, the Illuminant
//! Spectral Direction (ISD). This crate holds the values that flow through
//! the engine:
//!
//! - [`ColorSample`], [`LogColorSample`] - RGB triplets in linear and log space
//! - [`Direction`] - Unit vectors such as the ISD
//! - [`OrthonormalBasis`] - `(v, u1, u2)` with `u2 = v × u1`
//! - [`Plane`], [`Projection`] - The chromaticity plane and points on it
//! - [`Trajectory`] - Shadow-to-lit line of one material
//! - [`EngineConfig`] - Explicit configuration for every engine call
//! - [`BidrError`] - Error taxonomy
//!
//! All of them are plain values: computed once, never mutated, never shared.
//!
//! ## Crate Structure
//!
//! ```text
//! bidr-math
//!    ^
//!    |
//! bidr-core (this crate)
//!    ^
//!    |
//!    +-- bidr-chroma (estimation, basis, projection, trajectory)
//!    +-- bidr-cli (demo harness)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod basis;
pub mod config;
pub mod direction;
pub mod error;
pub mod plane;
pub mod sample;

// Re-exports for convenience
pub use basis::OrthonormalBasis;
pub use config::{EngineConfig, PatchConfig};
pub use direction::{Direction, UNIT_TOLERANCE};
pub use error::{BidrError, BidrResult};
pub use plane::{Plane, Projection};
pub use sample::{ColorSample, LogColorSample, Trajectory};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use bidr_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::basis::OrthonormalBasis;
    pub use crate::config::{EngineConfig, PatchConfig};
    pub use crate::direction::Direction;
    pub use crate::error::{BidrError, BidrResult};
    pub use crate::plane::{Plane, Projection};
    pub use crate::sample::{ColorSample, LogColorSample, Trajectory};
    pub use bidr_math::Vec3;
}
