//! Running histogram with fixed bins over a half-open range
//!
//! Counts stream values into a fixed number of bins covering
//! `[range_min, range_max)` in a single pass. Out-of-range values are
//! silently dropped. Histograms with identical configuration merge
//! exactly by adding per-bin counts.

use crate::math;
use crate::traits::{Estimator, MergeError};

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

/// Streaming fixed-bin histogram
///
/// Values inside `[range_min, range_max)` are normalized to `[0, 1)` and
/// mapped to a bin via `round(t * (bins - 1))`. The rounding (rather
/// than flooring) rule means the first and last bins cover roughly half
/// the value span of interior bins; it is kept for compatibility with
/// round-to-nearest binning schemes. Values outside the range are
/// silently dropped and do not count toward [`len`](Self::len).
///
/// Changing the bin count or either range bound is a full reset: all
/// bin counts and the sample count return to zero.
///
/// # Example
///
/// ```
/// use runstats::statistics::RunningHistogram;
///
/// let mut hist = RunningHistogram::new(10, 0.0, 10.0);
///
/// hist.add(0.0);
/// hist.add(9.99);
/// hist.add(10.0); // at the open upper bound: dropped
/// hist.add(-1.0); // below range: dropped
///
/// assert_eq!(hist.len(), 2);
/// assert_eq!(hist.counts().iter().sum::<u64>(), 2);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningHistogram {
    /// Number of bins
    bins: usize,
    /// Inclusive lower bound of the covered range
    range_min: f64,
    /// Exclusive upper bound of the covered range
    range_max: f64,
    /// Per-bin occurrence counts, length `bins`
    counts: Vec<u64>,
    /// Number of in-range values seen; always equals the sum of counts
    count: u64,
}

impl RunningHistogram {
    /// Create a histogram with `bins` bins covering `[lo, hi)`
    ///
    /// An inverted range is normalized by swapping the bounds.
    ///
    /// # Panics
    ///
    /// Panics if `bins == 0`.
    pub fn new(bins: usize, lo: f64, hi: f64) -> Self {
        assert!(bins >= 1, "bins must be positive");

        Self {
            bins,
            range_min: lo.min(hi),
            range_max: lo.max(hi),
            counts: vec![0; bins],
            count: 0,
        }
    }

    /// Add a value to the histogram
    ///
    /// Values outside `[range_min, range_max)` are silently dropped;
    /// this is the filtering policy, not an error.
    pub fn add(&mut self, value: f64) {
        if value >= self.range_min && value < self.range_max {
            let t = (value - self.range_min) / (self.range_max - self.range_min);
            let bin = math::round(t * (self.bins - 1) as f64) as usize;
            self.counts[bin] += 1;
            self.count += 1;
        }
    }

    /// Get the number of in-range values counted
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the per-bin counts, oldest bin (lowest range) first
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Get the number of bins
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Get the inclusive lower bound of the covered range
    pub fn range_min(&self) -> f64 {
        self.range_min
    }

    /// Get the exclusive upper bound of the covered range
    pub fn range_max(&self) -> f64 {
        self.range_max
    }

    /// Set the number of bins, discarding all counts
    ///
    /// # Panics
    ///
    /// Panics if `bins == 0`.
    pub fn set_bins(&mut self, bins: usize) {
        assert!(bins >= 1, "bins must be positive");
        self.bins = bins;
        self.reset();
    }

    /// Set the lower range bound, discarding all counts
    ///
    /// Swaps the bounds if the new minimum exceeds the current maximum.
    pub fn set_range_min(&mut self, lo: f64) {
        self.range_min = lo;
        if self.range_min > self.range_max {
            core::mem::swap(&mut self.range_min, &mut self.range_max);
        }
        self.reset();
    }

    /// Set the upper range bound, discarding all counts
    ///
    /// Swaps the bounds if the new maximum falls below the current
    /// minimum.
    pub fn set_range_max(&mut self, hi: f64) {
        self.range_max = hi;
        if self.range_min > self.range_max {
            core::mem::swap(&mut self.range_min, &mut self.range_max);
        }
        self.reset();
    }

    /// Iterate over the per-bin counts
    pub fn iter(&self) -> core::slice::Iter<'_, u64> {
        self.counts.iter()
    }

    fn config_label(&self) -> String {
        format!(
            "bins={} range=[{}, {})",
            self.bins, self.range_min, self.range_max
        )
    }
}

impl Estimator for RunningHistogram {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    /// Merge by adding per-bin counts
    ///
    /// Exact, not an approximation, but only defined when both sides
    /// were configured with the same bin count and range.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.bins != other.bins
            || self.range_min != other.range_min
            || self.range_max != other.range_max
        {
            return Err(MergeError::IncompatibleConfig {
                expected: self.config_label(),
                found: other.config_label(),
            });
        }

        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
        self.count += other.count;
        Ok(())
    }

    fn reset(&mut self) {
        self.count = 0;
        self.counts.clear();
        self.counts.resize(self.bins, 0);
    }

    fn count(&self) -> u64 {
        self.count
    }
}
