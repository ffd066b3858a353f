// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::vec::Vec;

#[derive(Clone, Debug)]
struct Entry<K> {
    deadline: u64,
    seq: u64,
    key: K,
}

/// A small queue of pending deadlines keyed by `K`.
///
/// The queue is tuned for the handful of timers a single widget keeps alive at
/// once: entries live in a `Vec` sorted by `(deadline, insertion order)`, so
/// [`TimerQueue::next_deadline`] is O(1) and insertion is a binary search plus
/// a shift.
///
/// Keys are not required to be unique. Use [`TimerQueue::cancel`] before
/// scheduling if a key should only ever have one pending deadline.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules `key` to expire at `deadline`.
    ///
    /// Timers sharing a deadline expire in insertion order.
    pub fn schedule(&mut self, key: K, deadline: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let at = self
            .entries
            .partition_point(|entry| (entry.deadline, entry.seq) <= (deadline, seq));
        self.entries.insert(at, Entry { deadline, seq, key });
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is at or before `now`.
    pub fn pop_expired(&mut self, now: u64) -> Option<K> {
        match self.entries.first() {
            Some(entry) if entry.deadline <= now => Some(self.entries.remove(0).key),
            _ => None,
        }
    }

    /// Removes every timer expired at `now`, returning their keys in expiry order.
    pub fn drain_expired(&mut self, now: u64) -> Vec<K> {
        let split = self.entries.partition_point(|entry| entry.deadline <= now);
        self.entries.drain(..split).map(|entry| entry.key).collect()
    }

    /// Removes all pending timers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: PartialEq> TimerQueue<K> {
    /// Returns `true` if at least one timer for `key` is pending.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|entry| entry.key == *key)
    }

    /// Returns the earliest pending deadline for `key`.
    #[must_use]
    pub fn deadline_of(&self, key: &K) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.deadline)
    }

    /// Cancels every pending timer for `key`, returning how many were removed.
    pub fn cancel(&mut self, key: &K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != *key);
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_queue_has_no_deadline() {
        let mut queue = TimerQueue::<u8>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert_eq!(queue.pop_expired(u64::MAX), None);
    }

    #[test]
    fn entries_are_ordered_by_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule('c', 300);
        queue.schedule('a', 100);
        queue.schedule('b', 200);

        assert_eq!(queue.next_deadline(), Some(100));
        assert_eq!(queue.drain_expired(250), vec!['a', 'b']);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(300));
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(1, 500);
        queue.schedule(2, 500);
        queue.schedule(3, 500);

        assert_eq!(queue.pop_expired(500), Some(1));
        assert_eq!(queue.pop_expired(500), Some(2));
        assert_eq!(queue.pop_expired(500), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_removes_all_matching() {
        let mut queue = TimerQueue::new();
        queue.schedule("wheel", 500);
        queue.schedule("click", 300);
        queue.schedule("wheel", 900);

        assert_eq!(queue.deadline_of(&"wheel"), Some(500));
        assert_eq!(queue.cancel(&"wheel"), 2);
        assert!(!queue.contains(&"wheel"));
        assert!(queue.contains(&"click"));
        assert_eq!(queue.cancel(&"wheel"), 0);
    }
}
