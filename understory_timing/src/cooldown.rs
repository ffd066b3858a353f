// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration cooldown locks.

/// A boolean lock that stays engaged for a fixed duration.
///
/// A `Cooldown` does not release itself: the owner observes the deadline
/// returned by [`Cooldown::engage`] (usually through a [`TimerQueue`]) and
/// calls [`Cooldown::release`] once it has passed. This mirrors a "flag plus
/// delayed callback" pattern while keeping expiry deterministic and testable.
///
/// Engaging an already engaged cooldown is allowed and simply moves the
/// deadline; callers that want drop-while-locked semantics check
/// [`Cooldown::is_engaged`] first.
///
/// [`TimerQueue`]: crate::TimerQueue
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cooldown {
    duration: u64,
    deadline: Option<u64>,
}

impl Cooldown {
    /// Creates a released cooldown with the given duration.
    #[must_use]
    pub const fn new(duration: u64) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Returns the configured duration.
    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.duration
    }

    /// Returns `true` while the lock is held.
    #[must_use]
    pub const fn is_engaged(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the instant at which the lock becomes releasable, if engaged.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Engages the lock at `now` and returns its expiry deadline.
    pub fn engage(&mut self, now: u64) -> u64 {
        let deadline = now.saturating_add(self.duration);
        self.deadline = Some(deadline);
        deadline
    }

    /// Releases the lock.
    pub fn release(&mut self) {
        self.deadline = None;
    }

    /// Releases the lock if its deadline is at or before `now`.
    ///
    /// Returns `true` if this call released it.
    pub fn release_if_expired(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
