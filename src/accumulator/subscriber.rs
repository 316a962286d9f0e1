//! Subscriber protocol for the observable accumulator
//!
//! The accumulator announces four events: a value pushed, a value
//! popped (evicted), the container cleared, and the capacity changed.
//! Subscribers register through [`Accumulator::attach`] and receive the
//! events synchronously, in the mutating call, before it returns.
//!
//! [`Accumulator::attach`]: crate::accumulator::Accumulator::attach

#[cfg(feature = "statistics")]
use crate::statistics::{RunningHistogram, RunningStats};
#[cfg(feature = "statistics")]
use crate::traits::Estimator;

/// Token identifying a registered subscriber
///
/// Returned from [`Accumulator::attach`] and accepted by
/// [`Accumulator::detach`]. Tokens are unique per accumulator and never
/// reused within one.
///
/// [`Accumulator::attach`]: crate::accumulator::Accumulator::attach
/// [`Accumulator::detach`]: crate::accumulator::Accumulator::detach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberToken(pub(crate) u64);

/// Receiver for accumulator notifications
///
/// All methods default to no-ops so implementors only override the
/// events they care about. The accumulator holds subscribers by weak
/// handle: dropping the subscriber silently ends its registration.
pub trait AccumulatorSubscriber<T> {
    /// A value was appended to the accumulator
    fn on_pushed(&mut self, value: &T) {
        let _ = value;
    }

    /// The oldest value was evicted from the accumulator
    fn on_popped(&mut self, value: &T) {
        let _ = value;
    }

    /// The accumulator was cleared (no per-element pop events follow)
    fn on_cleared(&mut self) {}

    /// The accumulator capacity changed (the contents were cleared)
    fn on_capacity_changed(&mut self, capacity: usize) {
        let _ = capacity;
    }
}

/// Attachment binding for running moments
///
/// Pushed values feed [`RunningStats::add`]; a clear or capacity change
/// resets the statistics. Evictions are deliberately ignored: an
/// attached `RunningStats` reports statistics over the **full history**
/// of pushed values since the last clear, not over the values currently
/// retained by the bounded accumulator. Callers wanting windowed
/// statistics must reset and replay, or keep per-window estimators.
#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
impl AccumulatorSubscriber<f64> for RunningStats {
    fn on_pushed(&mut self, value: &f64) {
        self.add(*value);
    }

    fn on_cleared(&mut self) {
        Estimator::reset(self);
    }

    fn on_capacity_changed(&mut self, _capacity: usize) {
        Estimator::reset(self);
    }
}

/// Attachment binding for the running histogram
///
/// Same full-history semantics as the [`RunningStats`] binding: pushed
/// values are counted, evictions are ignored, clear and capacity
/// changes reset the histogram.
#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
impl AccumulatorSubscriber<f64> for RunningHistogram {
    fn on_pushed(&mut self, value: &f64) {
        self.add(*value);
    }

    fn on_cleared(&mut self) {
        Estimator::reset(self);
    }

    fn on_capacity_changed(&mut self, _capacity: usize) {
        Estimator::reset(self);
    }
}
