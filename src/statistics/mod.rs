//! Statistical summaries for streaming data
//!
//! This module provides estimators that compute exact statistics over
//! streams in a single pass with constant memory: running moments,
//! simple linear regression, and a fixed-bin histogram.
//!
//! # Example
//!
//! ```
//! use runstats::statistics::RunningStats;
//!
//! let mut stats = RunningStats::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stddev: {}", stats.stddev());
//! println!("Min: {:?}", stats.min());
//! println!("Max: {:?}", stats.max());
//! ```

mod histogram;
mod moments;
mod regression;

pub use histogram::RunningHistogram;
pub use moments::RunningStats;
pub use regression::RunningRegression;
