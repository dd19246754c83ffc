//! Interpolation utilities.
//!
//! - Linear interpolation ([`lerp`])
//! - Evenly spaced parameter sequences ([`linspace`])
//!
//! # Usage
//!
//! ```rust
//! use bidr_math::{lerp, linspace};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use bidr_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `count` values evenly spaced over `[start, end]`, both endpoints included.
///
/// The first element is `start` and the last is `end` exactly. A count of
/// one yields `[start]`, zero yields an empty vector.
///
/// # Example
///
/// ```rust
/// use bidr_math::linspace;
///
/// let t = linspace(0.0, 1.0, 5);
/// assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    let t = i as f64 / last;
                    start * (1.0 - t) + end * t
                })
                .collect()
        }
    }
}
