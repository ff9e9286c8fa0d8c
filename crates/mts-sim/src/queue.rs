//! `StationQueue` — per-direction holding area for loaded trains.
//!
//! # Locking
//!
//! The queue has no internal lock.  Every operation is called while the
//! caller holds the yard mutex, so queue work composes with the arbiter's
//! larger critical section (decision + pop + counter update happen under
//! one lock acquisition).
//!
//! # Ordering
//!
//! The ordering key is arrival order: the moment a train finishes loading
//! and is pushed.  Pushes happen under the yard lock, so push order *is*
//! arrival order.  Two same-direction trains whose load delays expire at
//! the same instant are serialized by whichever acquires the lock first —
//! within a queue there is no observable simultaneity to tie-break, so the
//! ascending-id rule only surfaces at decision time, when the arbiter
//! compares the two queue heads before any train has crossed.

use std::collections::VecDeque;

use mts_core::{Priority, Train};

/// Ordered sequence of trains that finished loading and wait to cross.
#[derive(Default, Debug)]
pub struct StationQueue {
    inner: VecDeque<Train>,
}

impl StationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `train` at the tail (arrival order).
    pub fn push(&mut self, train: Train) {
        self.inner.push_back(train);
    }

    /// Remove and return the head.
    ///
    /// The arbiter only pops a queue it has just observed non-empty under
    /// the same lock, so `None` here indicates a defect in the caller.
    pub fn pop_front(&mut self) -> Option<Train> {
        self.inner.pop_front()
    }

    /// The head train, without removing it.
    pub fn front(&self) -> Option<&Train> {
        self.inner.front()
    }

    /// Priority class of the head, or `None` if the queue is empty.
    pub fn peek_priority(&self) -> Option<Priority> {
        self.inner.front().map(|t| t.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}
