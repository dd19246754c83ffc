//! # bidr-math
//!
//! Math utilities for bi-illumination log-color analysis.
//!
//! This crate provides the numeric primitives the rest of the workspace is
//! built on:
//!
//! - [`Vec3`] - 3D vectors for RGB triplets in linear or log space
//! - Interpolation utilities ([`lerp`], [`linspace`])
//! - Batch statistics ([`mean_vec3`], [`percentile`], [`min_max`])
//!
//! # Design
//!
//! All arithmetic is `f64`. Log-color geometry works with tolerances around
//! 1e-6 and stabilizers around 1e-12, which single precision cannot honor.
//! [`Vec3`] converts to and from `glam::DVec3` for callers that want glam's
//! wider API.
//!
//! # Usage
//!
//! ```rust
//! use bidr_math::Vec3;
//!
//! let lit = Vec3::new(0.9, 0.7, 0.6);
//! let shadow = lit * Vec3::new(0.5, 0.6, 0.9);
//! let step = lit.ln() - shadow.ln();
//! assert!(step.min_element() > 0.0);
//! ```
//!
//! # Used By
//!
//! - `bidr-core` - Directions, bases and planes
//! - `bidr-chroma` - Log transform, ISD estimation, projection

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod stats;
mod vec3;

pub use interp::*;
pub use stats::*;
pub use vec3::*;
