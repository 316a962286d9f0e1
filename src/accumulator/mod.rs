//! Observable bounded accumulation
//!
//! This module provides a capacity-bounded FIFO buffer that announces
//! every content change to registered subscribers. Streaming estimators
//! implement the subscriber protocol, so attaching one to an
//! accumulator keeps it updated by the accumulator's own pushes.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use runstats::accumulator::Accumulator;
//! use runstats::statistics::RunningStats;
//!
//! let stats = Rc::new(RefCell::new(RunningStats::new()));
//!
//! let mut acc = Accumulator::<f64>::new(64);
//! acc.attach(&stats);
//!
//! acc.push(1.0);
//! acc.push(3.0);
//!
//! // The attached estimator followed the pushes
//! assert!((stats.borrow().mean() - 2.0).abs() < 1e-12);
//! ```

mod fifo;
mod subscriber;

pub use fifo::{Accumulator, SubscriberHandle};
pub use subscriber::{AccumulatorSubscriber, SubscriberToken};
