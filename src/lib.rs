//! # Runstats
//!
//! Single-pass streaming statistics for Rust.
//!
//! Runstats computes exact moment-based statistics, bivariate regression,
//! and binned histograms over data arriving one value at a time, in O(1)
//! memory, without retaining the sample history. It also provides a
//! capacity-bounded observable FIFO buffer that estimators can attach to,
//! and a without-replacement permutation sampler.
//!
//! ## Features
//!
//! - **Running Moments**: mean, variance, skewness, kurtosis, min, max
//!   via a numerically stable one-pass update
//! - **Running Regression**: slope, intercept, and correlation of an
//!   `(x, y)` stream
//! - **Running Histogram**: fixed-bin counting over a half-open range
//! - **Full Mergeability**: every estimator supports exact merge for
//!   distributed/parallel aggregation
//! - **Observable Accumulation**: a bounded FIFO that notifies attached
//!   estimators on push/pop/clear/capacity changes
//!
//! ## Quick Start
//!
//! ```rust
//! use runstats::prelude::*;
//!
//! let mut stats = RunningStats::new();
//! for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     stats.add(value);
//! }
//!
//! assert!((stats.mean() - 5.0).abs() < 1e-12);
//! assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
//! ```
//!
//! ## Distributed Computing
//!
//! All estimators implement the [`Estimator`](traits::Estimator) trait,
//! which includes a `merge` operation. Estimators built on disjoint
//! partitions of a stream combine into exactly (up to floating-point
//! rounding) the estimator for the whole stream:
//!
//! ```rust
//! use runstats::statistics::RunningStats;
//! use runstats::traits::Estimator;
//!
//! let mut worker1 = RunningStats::new();
//! let mut worker2 = RunningStats::new();
//!
//! // Each worker processes its partition
//! for v in [1.0, 2.0, 3.0] {
//!     worker1.add(v);
//! }
//! for v in [4.0, 5.0, 6.0] {
//!     worker2.add(v);
//! }
//!
//! // Merge results
//! worker1.merge(&worker2).unwrap();
//! assert!((worker1.mean() - 3.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families (pick what you need):
//! - `statistics` (default): running moments, regression, histogram
//! - `sampling` (default): permutation sampling without replacement
//! - `accumulator` (default): observable bounded FIFO
//! - `full`: enable all algorithm families
//!
//! Platform features:
//! - `std` (default): standard library support
//! - `serde`: enable serialization of estimator snapshots
//!
//! ## Concurrency
//!
//! Every type here is single-writer: one logical thread performs
//! mutations on a given instance. Queries are side-effect-free. Callers
//! needing concurrent read/write must synchronize externally. Merges are
//! pure functions over snapshots and safe to compute in parallel.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

#[cfg(feature = "statistics")]
pub(crate) mod math;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "sampling")]
#[cfg_attr(docsrs, doc(cfg(feature = "sampling")))]
pub mod sampling;

#[cfg(feature = "accumulator")]
#[cfg_attr(docsrs, doc(cfg(feature = "accumulator")))]
pub mod accumulator;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::{RunningHistogram, RunningRegression, RunningStats};

    #[cfg(feature = "sampling")]
    pub use crate::sampling::RandomSampler;

    #[cfg(feature = "accumulator")]
    pub use crate::accumulator::{Accumulator, AccumulatorSubscriber, SubscriberToken};
}

#[cfg(feature = "statistics")]
pub use statistics::{RunningHistogram, RunningRegression, RunningStats};

#[cfg(feature = "sampling")]
pub use sampling::RandomSampler;

#[cfg(feature = "accumulator")]
pub use accumulator::Accumulator;
