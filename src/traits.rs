//! Core traits for streaming estimators
//!
//! All estimators implement the base [`Estimator`] trait: single-value
//! updates, state reset, and a merge operation for combining two
//! independently accumulated estimators into the estimator for the
//! concatenated stream.

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error during estimator merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Estimators have incompatible configurations
    IncompatibleConfig {
        expected: String,
        found: String,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::IncompatibleConfig { expected, found } => {
                write!(f, "incompatible config: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Base trait for all streaming estimators
///
/// An estimator folds one item at a time into O(1) internal state and
/// answers queries without storing the stream. Estimators built on
/// disjoint partitions of a stream can be merged into the estimator for
/// the whole stream.
pub trait Estimator {
    /// Type of items this estimator consumes
    type Item;

    /// Fold one item into the estimator
    fn update(&mut self, item: &Self::Item);

    /// Merge another estimator of the same type into this one
    ///
    /// After a successful merge, `self` reports the statistics of the
    /// concatenation of both input streams. Fails if the two estimators
    /// were configured incompatibly (e.g. histograms over different
    /// ranges).
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Reset the estimator to its freshly constructed state
    fn reset(&mut self);

    /// Number of items folded in since construction or the last reset
    fn count(&self) -> u64;

    /// Check if the estimator has seen no items
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
