//! Configuration for interval generation.

/// Default cap on the number of points one interval may hold.
pub const DEFAULT_MAX_POINTS: usize = 1_000_000;

/// Options for [`interval_with`](crate::interval::interval_with).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalConfig {
    /// Largest interval, in points, that will be materialized.
    pub max_points: usize,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl IntervalConfig {
    /// Creates a configuration with no limit on interval length.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_points: usize::MAX,
        }
    }

    /// Sets the maximum number of points.
    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }
}
