//! # bidr-chroma
//!
//! Illumination-invariant chromaticity from the Bi-illumination Dichromatic
//! Reflection (BIDR) model.
//!
//! In log-RGB space a shadow boundary on one material is a pure translation
//! along the Illuminant Spectral Direction (ISD). Projecting log colors onto
//! the plane perpendicular to the ISD removes that translation, leaving a
//! 2-D chromaticity that no longer depends on how much direct light a
//! surface receives.
//!
//! - **Log transform** - clamp-then-log, batch and single ([`log`])
//! - **ISD estimation** - from sample pairs, cluster means or illuminants ([`isd`])
//! - **Basis construction** - right-handed frame around the ISD ([`basis`])
//! - **Projection** - orthogonal projection onto the chromaticity plane ([`project`])
//! - **Trajectories** - shadow-to-lit line of a material ([`trajectory`])
//! - **Forward model** - `I = R · (A + γ·D)` for synthetic data ([`model`])
//! - **Display helpers** - plane patch, luma, log tone curve ([`patch`], [`display`])
//!
//! # Architecture
//!
//! ```text
//! linear samples ─▶ log ─▶ log points ─────────────┐
//!                                                  ▼
//! lit/shadow ─▶ isd ─▶ ISD ─▶ basis ─▶ (u1, u2) ─▶ project ─▶ (a, b)
//!                                   │
//!                                   └─▶ trajectory
//! ```
//!
//! Every operation is a pure function of its inputs and an explicit
//! [`EngineConfig`](bidr_core::EngineConfig); nothing is cached between
//! calls, so all of it is safe to call from many threads at once.
//!
//! # Quick Start
//!
//! ```rust
//! use bidr_chroma::prelude::*;
//!
//! let cfg = EngineConfig::synthetic();
//! let lit = [to_log(Vec3::new(0.9, 0.7, 0.6), cfg.eps)];
//! let shadow = [to_log(Vec3::new(0.45, 0.42, 0.54), cfg.eps)];
//!
//! let isd = estimate_isd(&lit, &shadow, &cfg).unwrap();
//! let basis = build_basis(isd);
//! let plane = Plane::new(centroid(&lit).unwrap(), &basis);
//!
//! // Lit and shadow of the same surface land on the same plane point.
//! let p = project(&[lit[0], shadow[0]], &plane);
//! assert!((p[0].a - p[1].a).abs() < 1e-9);
//! assert!((p[0].b - p[1].b).abs() < 1e-9);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - split large batches across the rayon pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod batch;

pub mod analysis;
pub mod basis;
pub mod display;
pub mod isd;
pub mod log;
pub mod model;
pub mod patch;
pub mod project;
pub mod trajectory;

// Re-exports for convenience
pub use analysis::{ChromaticityAnalysis, analyze};
pub use basis::{
    HELPER_AXIS_THRESHOLD, build_basis, build_basis_from_vector, build_basis_stabilized,
    helper_axis,
};
pub use display::{LUMA_WEIGHTS, display_curves, log_display_curve, luma, normalize_unit_range};
pub use isd::{IsdEstimator, IsdSource, centroid, estimate_isd, isd_from_illuminants};
pub use log::{from_log, from_log_batch, to_log, to_log_batch};
pub use model::{Illuminants, observe};
pub use patch::PlanePatch;
pub use project::{project, project_point, project_with_axes};
pub use trajectory::{build_trajectory, trajectory_between_clusters};

/// Prelude module for convenient imports.
///
/// Pulls in the engine functions together with the `bidr-core` types they
/// take and return.
///
/// # Usage
///
/// ```
/// use bidr_chroma::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analysis::{ChromaticityAnalysis, analyze};
    pub use crate::basis::{build_basis, build_basis_from_vector};
    pub use crate::isd::{IsdEstimator, IsdSource, centroid, estimate_isd, isd_from_illuminants};
    pub use crate::log::{from_log, from_log_batch, to_log, to_log_batch};
    pub use crate::model::{Illuminants, observe};
    pub use crate::patch::PlanePatch;
    pub use crate::project::{project, project_point, project_with_axes};
    pub use crate::trajectory::{build_trajectory, trajectory_between_clusters};
    pub use bidr_core::prelude::*;
}
