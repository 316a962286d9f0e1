//! Capacity-bounded observable FIFO buffer
//!
//! A fixed-capacity container that evicts oldest-first and announces
//! every content change to registered subscribers, so streaming
//! estimators can shadow its input without the caller wiring each push
//! twice.

use crate::accumulator::{AccumulatorSubscriber, SubscriberToken};

#[cfg(feature = "std")]
use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::{Rc, Weak},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{
    collections::VecDeque,
    rc::{Rc, Weak},
    vec::Vec,
};
#[cfg(not(feature = "std"))]
use core::cell::RefCell;

/// Weak, non-owning handle to a registered subscriber
pub type SubscriberHandle<T> = Weak<RefCell<dyn AccumulatorSubscriber<T>>>;

/// Capacity-bounded FIFO with change notifications
///
/// Holds at most `capacity` elements, oldest first. Pushing at capacity
/// evicts the single oldest element before the new one is appended;
/// each eviction is announced individually. A capacity of 0 is legal:
/// every pushed value is announced and then immediately evicted, so the
/// container never retains it.
///
/// Subscribers are held by weak handle (no ownership is implied between
/// accumulator and subscriber) and notified synchronously, in
/// registration order, before the mutating call returns. Handles whose
/// subscriber has been dropped are pruned during delivery.
///
/// Single-writer: one logical thread mutates a given accumulator at a
/// time; no internal locking.
///
/// # Example
///
/// ```
/// use runstats::accumulator::Accumulator;
///
/// let mut acc = Accumulator::<i32>::new(3);
///
/// for v in [1, 2, 3, 4] {
///     acc.push(v);
/// }
///
/// // Oldest element evicted to make room for 4
/// let contents: Vec<i32> = acc.iter().copied().collect();
/// assert_eq!(contents, vec![2, 3, 4]);
/// ```
///
/// # Attaching an estimator
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use runstats::accumulator::Accumulator;
/// use runstats::statistics::RunningStats;
///
/// let stats = Rc::new(RefCell::new(RunningStats::new()));
/// let mut acc = Accumulator::<f64>::new(100);
/// let token = acc.attach(&stats);
///
/// acc.push(2.0);
/// acc.push(4.0);
///
/// assert_eq!(stats.borrow().len(), 2);
/// assert!((stats.borrow().mean() - 3.0).abs() < 1e-12);
///
/// acc.detach(token);
/// acc.push(100.0);
/// assert_eq!(stats.borrow().len(), 2);
/// ```
#[derive(Debug)]
pub struct Accumulator<T: 'static> {
    /// Maximum number of retained elements
    capacity: usize,
    /// Retained elements, oldest first
    items: VecDeque<T>,
    /// Registered subscribers in registration order
    subscribers: Vec<(SubscriberToken, SubscriberHandle<T>)>,
    /// Source of the next subscriber token
    next_token: u64,
}

impl<T: 'static> Accumulator<T> {
    /// The capacity used by [`Default`]
    pub const DEFAULT_CAPACITY: usize = 1;

    /// Create an accumulator holding at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::new(),
            subscribers: Vec::new(),
            next_token: 0,
        }
    }

    /// Get the capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Set the capacity, clearing the accumulator
    ///
    /// The contents are discarded unconditionally (one cleared event),
    /// then the new capacity is announced. No attempt is made to carry
    /// prior elements over to the new capacity.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.clear();
        self.capacity = capacity;
        deliver(&mut self.subscribers, |s| s.on_capacity_changed(capacity));
    }

    /// Get the number of retained elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no elements are retained
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the accumulator is at capacity
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Push a value, evicting oldest-first to stay within capacity
    ///
    /// Every eviction is announced with the evicted value, then the new
    /// value is appended and announced. All notifications complete
    /// before this call returns.
    pub fn push(&mut self, value: T) {
        // Make room: evict oldest while at capacity
        while !self.items.is_empty() && self.items.len() >= self.capacity {
            self.pop_oldest();
        }

        self.items.push_back(value);
        if let Some(newest) = self.items.back() {
            deliver(&mut self.subscribers, |s| s.on_pushed(newest));
        }

        // Capacity 0 never retains: the value was announced, now evict it
        while self.items.len() > self.capacity {
            self.pop_oldest();
        }
    }

    /// Remove all elements
    ///
    /// Announces a single cleared event; no per-element pop events.
    pub fn clear(&mut self) {
        self.items.clear();
        deliver(&mut self.subscribers, |s| s.on_cleared());
    }

    /// Get the oldest retained element
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Get the newest retained element
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Get the element at `index`, oldest first
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the retained elements, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Register a subscriber for all four notification events
    ///
    /// The accumulator keeps only a weak handle; the caller retains
    /// ownership of the subscriber. Returns a token for [`detach`].
    ///
    /// [`detach`]: Self::detach
    pub fn attach<S>(&mut self, subscriber: &Rc<RefCell<S>>) -> SubscriberToken
    where
        S: AccumulatorSubscriber<T> + 'static,
    {
        let handle: Rc<RefCell<dyn AccumulatorSubscriber<T>>> = subscriber.clone();
        self.subscribe(Rc::downgrade(&handle))
    }

    /// Register a subscriber from an existing weak handle
    pub fn subscribe(&mut self, handle: SubscriberHandle<T>) -> SubscriberToken {
        let token = SubscriberToken(self.next_token);
        self.next_token += 1;
        self.subscribers.push((token, handle));
        token
    }

    /// Unregister a previously attached subscriber
    ///
    /// Returns `false` if the token was already detached (or its
    /// subscriber dropped and pruned).
    pub fn detach(&mut self, token: SubscriberToken) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(t, _)| *t != token);
        self.subscribers.len() != before
    }

    /// Number of live subscriber registrations
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|(_, handle)| handle.strong_count() > 0)
            .count()
    }

    fn pop_oldest(&mut self) {
        if let Some(oldest) = self.items.pop_front() {
            deliver(&mut self.subscribers, |s| s.on_popped(&oldest));
        }
    }
}

impl<T: 'static> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Deliver one event to every live subscriber, pruning dead handles
fn deliver<T: 'static>(
    subscribers: &mut Vec<(SubscriberToken, SubscriberHandle<T>)>,
    event: impl Fn(&mut dyn AccumulatorSubscriber<T>),
) {
    subscribers.retain(|(_, handle)| match handle.upgrade() {
        Some(subscriber) => {
            event(&mut *subscriber.borrow_mut());
            true
        }
        None => false,
    });
}
