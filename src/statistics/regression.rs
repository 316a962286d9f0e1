//! Running simple linear regression over an `(x, y)` stream
//!
//! Maintains two [`RunningStats`] plus the running co-moment `Sxy`, so
//! slope, intercept, and correlation come out of a single pass with O(1)
//! memory. Supports exact merging for distributed computation.

use crate::statistics::RunningStats;
use crate::traits::{Estimator, MergeError};

/// Streaming least-squares fit of `y = slope * x + intercept`
///
/// Folds `(x, y)` pairs one at a time, tracking per-coordinate moments
/// and the cross-moment `Sxy` (sum of products of deviations). `Sxy` is
/// not recoverable from the two coordinate estimators alone and is
/// carried explicitly.
///
/// [`slope`](Self::slope), [`intercept`](Self::intercept), and
/// [`correlation`](Self::correlation) require at least two non-degenerate
/// pairs; below that the divisions are mathematically undefined and not
/// guarded (NaN/infinity results). Callers should check
/// [`len`](Self::len) first.
///
/// # Example
///
/// ```
/// use runstats::statistics::RunningRegression;
///
/// let mut reg = RunningRegression::new();
///
/// // Points on y = 2x + 3
/// for x in [0.0, 1.0, 2.0, 3.0, 4.0] {
///     reg.add(x, 2.0 * x + 3.0);
/// }
///
/// assert!((reg.slope() - 2.0).abs() < 1e-9);
/// assert!((reg.intercept() - 3.0).abs() < 1e-9);
/// assert!((reg.correlation() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningRegression {
    /// Moments of the x coordinate stream
    x_stats: RunningStats,
    /// Moments of the y coordinate stream
    y_stats: RunningStats,
    /// Running sum of products of deviations from the means
    sxy: f64,
    /// Number of pairs seen; always equals both sub-estimator counts
    count: u64,
}

impl RunningRegression {
    /// Create a new empty regression accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an `(x, y)` pair
    ///
    /// The cross-moment update uses the pre-update means, so it must
    /// run before either sub-estimator observes the new point. A NaN in
    /// either coordinate drops the whole pair, keeping the paired-count
    /// invariant.
    pub fn add(&mut self, x: f64, y: f64) {
        if x.is_nan() || y.is_nan() {
            return;
        }

        let n = self.count as f64;
        self.sxy += (self.x_stats.mean() - x) * (self.y_stats.mean() - y) * n / (n + 1.0);

        self.x_stats.add(x);
        self.y_stats.add(y);
        self.count += 1;
    }

    /// Get the number of pairs
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the slope of the fitted line
    pub fn slope(&self) -> f64 {
        let sxx = self.x_stats.variance() * (self.count as f64 - 1.0);
        self.sxy / sxx
    }

    /// Get the intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.y_stats.mean() - self.slope() * self.x_stats.mean()
    }

    /// Get the Pearson correlation coefficient
    pub fn correlation(&self) -> f64 {
        let t = self.x_stats.stddev() * self.y_stats.stddev();
        self.sxy / ((self.count as f64 - 1.0) * t)
    }

    /// Get the moments of the x coordinate stream
    pub fn x_stats(&self) -> &RunningStats {
        &self.x_stats
    }

    /// Get the moments of the y coordinate stream
    pub fn y_stats(&self) -> &RunningStats {
        &self.y_stats
    }

    /// Combine two regressions into the regression for the concatenated
    /// pair stream
    ///
    /// Pure function; neither input is modified. Sub-estimators combine
    /// with the moment rule; the cross-moment combines as
    /// `a.sxy + b.sxy + na*nb*Δx*Δy/n`. Either side being empty returns
    /// the other side unchanged.
    pub fn combine(a: &Self, b: &Self) -> Self {
        if b.count == 0 {
            return a.clone();
        }
        if a.count == 0 {
            return b.clone();
        }

        let na = a.count as f64;
        let nb = b.count as f64;
        let n = na + nb;

        let delta_x = b.x_stats.mean() - a.x_stats.mean();
        let delta_y = b.y_stats.mean() - a.y_stats.mean();
        let sxy = a.sxy + b.sxy + na * nb * delta_x * delta_y / n;

        Self {
            x_stats: RunningStats::combine(&a.x_stats, &b.x_stats),
            y_stats: RunningStats::combine(&a.y_stats, &b.y_stats),
            sxy,
            count: a.count + b.count,
        }
    }

    /// Merge another regression into this one in place
    pub fn merge_from(&mut self, other: &Self) {
        *self = Self::combine(self, other);
    }
}

impl Estimator for RunningRegression {
    type Item = (f64, f64);

    fn update(&mut self, item: &Self::Item) {
        self.add(item.0, item.1);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        self.merge_from(other);
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn count(&self) -> u64 {
        self.count
    }
}
