//! Running moments (mean, variance, skewness, kurtosis, min, max)
//!
//! Computes streaming statistics using the Welford-family one-pass
//! recurrence extended to the third and fourth central moments.
//! Supports exact merging for distributed computation.

use crate::math;
use crate::traits::{Estimator, MergeError};

/// Running moment statistics over a stream of `f64` samples
///
/// Computes mean, variance, standard deviation, skewness, excess
/// kurtosis, min, and max in a single pass with O(1) memory. Uses the
/// numerically stable one-pass central-moment recurrence to avoid
/// catastrophic cancellation.
///
/// Variance is the unbiased sample variance (Bessel's correction,
/// `M2 / (n - 1)`). For fewer than two samples it is mathematically
/// undefined and this type does not guard it: with no samples the
/// division yields `-0.0`, with one sample it yields NaN. Callers that
/// cannot tolerate non-finite results should check [`len`](Self::len)
/// first. The same applies to the variance-derived
/// [`stddev`](Self::stddev), [`skewness`](Self::skewness), and
/// [`kurtosis`](Self::kurtosis).
///
/// # Example
///
/// ```
/// use runstats::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
/// assert_eq!(stats.min(), Some(2.0));
/// assert_eq!(stats.max(), Some(9.0));
/// ```
///
/// # Distributed Usage
///
/// ```
/// use runstats::statistics::RunningStats;
/// use runstats::traits::Estimator;
///
/// let mut stats1 = RunningStats::new();
/// let mut stats2 = RunningStats::new();
///
/// // Worker 1
/// for v in [1.0, 2.0, 3.0] {
///     stats1.add(v);
/// }
///
/// // Worker 2
/// for v in [4.0, 5.0, 6.0] {
///     stats2.add(v);
/// }
///
/// // Merge
/// stats1.merge(&stats2).unwrap();
/// assert!((stats1.mean() - 3.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean (M1)
    m1: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
    /// Third central-moment accumulator
    m3: f64,
    /// Fourth central-moment accumulator
    m4: f64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Create a new empty statistics accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            m1: 0.0,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value to the statistics
    ///
    /// Folds one sample into all four moment accumulators and the
    /// extrema in O(1). NaN values are ignored to prevent poisoning
    /// the statistics.
    pub fn add(&mut self, value: f64) {
        // Ignore NaN to prevent poisoning statistics
        if value.is_nan() {
            return;
        }

        let n0 = self.count as f64;
        self.count += 1;
        let n = self.count as f64;

        let delta = value - self.m1;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n0;

        // M4 and M3 read the pre-update lower moments, so the update
        // order is mean, M4, M3, M2.
        self.m1 += delta_n;
        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean (average)
    ///
    /// Returns 0 for an empty accumulator.
    pub fn mean(&self) -> f64 {
        self.m1
    }

    /// Get the sample variance (`M2 / (n - 1)`, Bessel-corrected)
    ///
    /// Undefined for fewer than two samples; see the type-level
    /// documentation.
    pub fn variance(&self) -> f64 {
        self.m2 / (self.count as f64 - 1.0)
    }

    /// Get the sample standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Get the skewness (`sqrt(n) * M3 / M2^1.5`)
    ///
    /// Zero for symmetric distributions. Undefined when the variance is
    /// zero or fewer than two samples have been seen.
    pub fn skewness(&self) -> f64 {
        math::sqrt(self.count as f64) * self.m3 / math::powf(self.m2, 1.5)
    }

    /// Get the excess kurtosis (`n * M4 / M2^2 - 3`)
    ///
    /// Zero for a normal distribution. Undefined when the variance is
    /// zero or fewer than two samples have been seen.
    pub fn kurtosis(&self) -> f64 {
        self.count as f64 * self.m4 / (self.m2 * self.m2) - 3.0
    }

    /// Get the minimum value
    pub fn min(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Get the maximum value
    pub fn max(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.m1 * self.count as f64
    }

    /// Combine two accumulators into the accumulator for the
    /// concatenated stream
    ///
    /// Pure function; neither input is modified. Uses Chan et al.'s
    /// parallel update rule for all four central moments, so the result
    /// agrees with sequential single-sample updates over the
    /// concatenation up to floating-point rounding. The operation is
    /// associative. Either side being empty returns the other side
    /// unchanged.
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

        let delta = b.m1 - a.m1;
        let delta2 = delta * delta;
        let delta3 = delta * delta2;
        let delta4 = delta2 * delta2;

        let m1 = (na * a.m1 + nb * b.m1) / n;

        let m2 = a.m2 + b.m2 + delta2 * na * nb / n;

        let m3 = a.m3 + b.m3 + delta3 * na * nb * (na - nb) / (n * n)
            + 3.0 * delta * (na * b.m2 - nb * a.m2) / n;

        let m4 = a.m4 + b.m4
            + delta4 * na * nb * (na * na - na * nb + nb * nb) / (n * n * n)
            + 6.0 * delta2 * (na * na * b.m2 + nb * nb * a.m2) / (n * n)
            + 4.0 * delta * (na * b.m3 - nb * a.m3) / n;

        Self {
            count: a.count + b.count,
            m1,
            m2,
            m3,
            m4,
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Merge another accumulator into this one in place
    ///
    /// Equivalent to `*self = RunningStats::combine(self, other)`.
    pub fn merge_from(&mut self, other: &Self) {
        *self = Self::combine(self, other);
    }
}

impl Estimator for RunningStats {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_dataset() {
        let mut stats = RunningStats::new();

        // Mean = 40/8 = 5.0, sample variance = 32/7 ≈ 4.5714
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.add(v);
        }

        assert_eq!(stats.len(), 8);
        assert!((stats.mean() - 5.0).abs() < 1e-12);
        assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
        assert!((stats.stddev() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(stats.min(), Some(2.0));
        assert_eq!(stats.max(), Some(9.0));
        assert!((stats.sum() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_value() {
        let mut stats = RunningStats::new();
        stats.add(42.0);

        assert_eq!(stats.len(), 1);
        assert!((stats.mean() - 42.0).abs() < 1e-12);
        assert_eq!(stats.min(), Some(42.0));
        assert_eq!(stats.max(), Some(42.0));
        // One sample: variance is 0/0
        assert!(stats.variance().is_nan());
    }

    #[test]
    fn test_empty() {
        let stats = RunningStats::new();

        assert!(stats.is_empty());
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
        assert_eq!(stats.range(), None);
    }

    #[test]
    fn test_skewness_symmetric() {
        let mut stats = RunningStats::new();
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            stats.add(v);
        }
        assert!(stats.skewness().abs() < 1e-12);
    }

    #[test]
    fn test_skewness_asymmetric() {
        let mut stats = RunningStats::new();
        // Right-skewed: long tail on the right
        for v in [1.0, 1.0, 1.0, 1.0, 10.0] {
            stats.add(v);
        }
        assert!(stats.skewness() > 0.0);
    }

    #[test]
    fn test_kurtosis_uniform_negative() {
        // A uniform distribution is platykurtic (excess kurtosis ≈ -1.2)
        let mut stats = RunningStats::new();
        for i in 0..10_000 {
            stats.add(i as f64);
        }
        assert!((stats.kurtosis() - (-1.2)).abs() < 0.01);
    }

    #[test]
    fn test_combine_matches_sequential() {
        let data: Vec<f64> = (0..100).map(|i| (i as f64) * 0.37 - 11.0).collect();

        let mut whole = RunningStats::new();
        for &v in &data {
            whole.add(v);
        }

        for split in [0, 1, 17, 50, 99, 100] {
            let mut prefix = RunningStats::new();
            let mut suffix = RunningStats::new();
            for &v in &data[..split] {
                prefix.add(v);
            }
            for &v in &data[split..] {
                suffix.add(v);
            }

            let combined = RunningStats::combine(&prefix, &suffix);

            assert_eq!(combined.len(), whole.len(), "split={}", split);
            assert!((combined.mean() - whole.mean()).abs() < 1e-9, "split={}", split);
            assert!(
                (combined.variance() - whole.variance()).abs() < 1e-9,
                "split={}",
                split
            );
            assert!(
                (combined.skewness() - whole.skewness()).abs() < 1e-9,
                "split={}",
                split
            );
            assert!(
                (combined.kurtosis() - whole.kurtosis()).abs() < 1e-9,
                "split={}",
                split
            );
            assert_eq!(combined.min(), whole.min(), "split={}", split);
            assert_eq!(combined.max(), whole.max(), "split={}", split);
        }
    }

    #[test]
    fn test_combine_associative() {
        let mut a = RunningStats::new();
        let mut b = RunningStats::new();
        let mut c = RunningStats::new();
        for i in 0..10 {
            a.add(i as f64);
        }
        for i in 10..25 {
            b.add((i as f64) * 1.5);
        }
        for i in 25..40 {
            c.add((i as f64) - 100.0);
        }

        let left = RunningStats::combine(&RunningStats::combine(&a, &b), &c);
        let right = RunningStats::combine(&a, &RunningStats::combine(&b, &c));

        assert_eq!(left.len(), right.len());
        assert!((left.mean() - right.mean()).abs() < 1e-9);
        assert!((left.variance() - right.variance()).abs() < 1e-9);
        assert!((left.skewness() - right.skewness()).abs() < 1e-9);
        assert!((left.kurtosis() - right.kurtosis()).abs() < 1e-9);
    }

    #[test]
    fn test_combine_with_empty() {
        let mut stats = RunningStats::new();
        stats.add(1.0);
        stats.add(2.0);

        let empty = RunningStats::new();

        let left = RunningStats::combine(&empty, &stats);
        let right = RunningStats::combine(&stats, &empty);

        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert!((left.mean() - 1.5).abs() < 1e-12);
        assert!((right.mean() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut stats = RunningStats::new();

        stats.add(1.0);
        stats.add(2.0);
        stats.add(3.0);

        stats.reset();

        assert!(stats.is_empty());
        assert_eq!(stats.min(), None);
        // A single post-reset update must re-establish the extrema
        stats.add(-7.0);
        assert_eq!(stats.min(), Some(-7.0));
        assert_eq!(stats.max(), Some(-7.0));
    }

    #[test]
    fn test_numerical_stability() {
        // Large common offset that defeats the naive sum-of-squares method
        let mut stats = RunningStats::new();

        let base = 1e12;
        for i in 0..1000 {
            stats.add(base + i as f64);
        }

        let expected_mean = base + 499.5;
        assert!(
            (stats.mean() - expected_mean).abs() < 1.0,
            "Mean: {} expected: {}",
            stats.mean(),
            expected_mean
        );
        // Variance of 0..1000 shifted by any constant is unchanged:
        // sum of squared deviations is (n^3 - n)/12, over n - 1
        let expected_var = (1000.0f64.powi(3) - 1000.0) / 12.0 / 999.0;
        assert!((stats.variance() - expected_var).abs() < 1.0);
    }

    #[test]
    fn test_nan_ignored() {
        let mut stats = RunningStats::new();

        stats.add(1.0);
        stats.add(f64::NAN);
        stats.add(2.0);
        stats.add(f64::NAN);
        stats.add(3.0);

        assert_eq!(stats.len(), 3);
        assert!((stats.mean() - 2.0).abs() < 1e-12);
        assert_eq!(stats.min(), Some(1.0));
        assert_eq!(stats.max(), Some(3.0));
        assert!(!stats.variance().is_nan());
    }
}
