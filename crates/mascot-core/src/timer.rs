//! `TimerQueue`: cancellable one-shot timers ordered by deadline.
//!
//! # Model
//!
//! Every component that waits (the decision cycle, the idle monitor, a
//! behavior's nested steps, an emotion revert) arms a timer here and keeps
//! the returned [`TimerId`].  Stopping a component cancels its ids, so no
//! orphaned callback can fire after a logical stop.
//!
//! Timers are keyed by `(deadline, id)`.  Ids increase monotonically, so two
//! timers with the same deadline fire in the order they were armed.  Interval
//! timers are modelled by re-arming from the fire handler.

use std::collections::BTreeMap;

use crate::{Millis, TimerId};

#[cfg(feature = "fx-hash")]
type DeadlineIndex = rustc_hash::FxHashMap<TimerId, Millis>;
#[cfg(not(feature = "fx-hash"))]
type DeadlineIndex = std::collections::HashMap<TimerId, Millis>;

/// A priority queue of pending timers carrying an event payload `E`.
pub struct TimerQueue<E> {
    inner:     BTreeMap<(Millis, TimerId), E>,
    /// Reverse index used by `cancel` to find an entry's key.
    deadlines: DeadlineIndex,
    next_id:   TimerId,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            inner:     BTreeMap::new(),
            deadlines: DeadlineIndex::default(),
            next_id:   TimerId(0),
        }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer that fires at `at` with `event`.
    pub fn arm(&mut self, at: Millis, event: impl Into<E>) -> TimerId {
        let id = self.next_id;
        self.next_id = id.next();
        self.inner.insert((at, id), event.into());
        self.deadlines.insert(id, at);
        id
    }

    /// Cancel a pending timer.  Returns `false` if it already fired or was
    /// already cancelled; cancelling twice is harmless.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => self.inner.remove(&(at, id)).is_some(),
            None     => false,
        }
    }

    /// `true` while `id` is armed and has not fired.
    #[inline]
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Deadline of a pending timer.
    #[inline]
    pub fn deadline(&self, id: TimerId) -> Option<Millis> {
        self.deadlines.get(&id).copied()
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, Millis, E)> {
        let (&(at, _), _) = self.inner.first_key_value()?;
        if at > now {
            return None;
        }
        let ((at, id), event) = self.inner.pop_first()?;
        self.deadlines.remove(&id);
        Some((id, at, event))
    }

    /// The earliest pending deadline, or `None` if no timer is armed.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.inner.keys().next().map(|&(at, _)| at)
    }

    /// Cancel every pending timer.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.deadlines.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
