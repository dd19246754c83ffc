//! Color samples and lit-to-shadow trajectories.

use bidr_math::Vec3;

/// Linear radiance sample (R, G, B), components expected non-negative.
pub type ColorSample = Vec3;

/// A [`ColorSample`] after the log transform; components may be negative.
pub type LogColorSample = Vec3;

/// Ordered log-color points from the shadow anchor (t = 0) to the lit
/// anchor (t = 1).
///
/// All points lie on the segment between the anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<LogColorSample>,
}

impl Trajectory {
    /// Wraps points that are already ordered shadow-to-lit.
    pub fn new(points: Vec<LogColorSample>) -> Self {
        Self { points }
    }

    /// All points, shadow first.
    #[inline]
    pub fn points(&self) -> &[LogColorSample] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trajectory holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The shadow anchor.
    #[inline]
    pub fn shadow(&self) -> Option<LogColorSample> {
        self.points.first().copied()
    }

    /// The lit anchor.
    #[inline]
    pub fn lit(&self) -> Option<LogColorSample> {
        self.points.last().copied()
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LogColorSample> {
        self.points.iter()
    }

    /// Consumes the trajectory and returns its points.
    pub fn into_points(self) -> Vec<LogColorSample> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a LogColorSample;
    type IntoIter = std::slice::Iter<'a, LogColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
