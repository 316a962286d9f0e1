//! Index sampling without replacement
//!
//! This module provides permutation-based sampling: random draws from a
//! fixed index space where every index appears exactly once per pass.
//! Useful for visiting a collection in random order without repeats.
//!
//! # Example
//!
//! ```
//! use runstats::sampling::RandomSampler;
//!
//! let items = ["a", "b", "c", "d"];
//! let mut sampler = RandomSampler::new(items.len());
//!
//! // Visit every item exactly once, in random order
//! for _ in 0..items.len() {
//!     let _item = items[sampler.next()];
//! }
//! ```

mod permutation;

pub use permutation::RandomSampler;
