//! Integration tests for BIDR-RS crates.
//!
//! This crate contains end-to-end tests that check the engine's geometric
//! properties across many directions and inputs, beyond the single cases
//! covered by each crate's unit tests.

use bidr_core::Direction;
use bidr_math::Vec3;

/// `n` unit directions spread evenly over the sphere (Fibonacci lattice).
///
/// Includes near-axis directions on both sides of the helper-axis switch.
pub fn sphere_directions(n: usize) -> Vec<Direction> {
    let golden = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..n)
        .filter_map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f64;
            let v = Vec3::new(r * theta.cos(), y, r * theta.sin());
            Direction::normalize(v, 1e-6, 0.0, "sphere lattice").ok()
        })
        .chain([Direction::X, Direction::Y, Direction::Z, Direction::X.flipped()])
        .collect()
}
