// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_timing` crate.
//!
//! These drive a queue and a pair of cooldowns together the way a widget
//! would: engage on input, schedule the release, and let the host advance time.

use understory_timing::{Cooldown, TimerQueue};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lock {
    Animation,
    Click,
}

struct Locks {
    animation: Cooldown,
    click: Cooldown,
    queue: TimerQueue<Lock>,
}

impl Locks {
    fn new() -> Self {
        Self {
            animation: Cooldown::new(600),
            click: Cooldown::new(300),
            queue: TimerQueue::new(),
        }
    }

    fn engage(&mut self, lock: Lock, now: u64) {
        let cooldown = match lock {
            Lock::Animation => &mut self.animation,
            Lock::Click => &mut self.click,
        };
        let deadline = cooldown.engage(now);
        self.queue.schedule(lock, deadline);
    }

    fn advance(&mut self, now: u64) -> Vec<Lock> {
        let released = self.queue.drain_expired(now);
        for lock in &released {
            match lock {
                Lock::Animation => self.animation.release(),
                Lock::Click => self.click.release(),
            }
        }
        released
    }
}

#[test]
fn independent_locks_release_at_their_own_deadlines() {
    let mut locks = Locks::new();
    locks.engage(Lock::Animation, 0);
    locks.engage(Lock::Click, 0);

    assert_eq!(locks.queue.next_deadline(), Some(300));

    assert_eq!(locks.advance(299), vec![]);
    assert!(locks.click.is_engaged());

    assert_eq!(locks.advance(300), vec![Lock::Click]);
    assert!(!locks.click.is_engaged());
    assert!(locks.animation.is_engaged());
    assert_eq!(locks.queue.next_deadline(), Some(600));

    assert_eq!(locks.advance(10_000), vec![Lock::Animation]);
    assert!(!locks.animation.is_engaged());
    assert!(locks.queue.is_empty());
}

#[test]
fn late_wakeup_releases_everything_in_deadline_order() {
    let mut locks = Locks::new();
    locks.engage(Lock::Animation, 100);
    locks.engage(Lock::Click, 500);

    // Animation expires at 700, click at 800.
    assert_eq!(locks.advance(5_000), vec![Lock::Animation, Lock::Click]);
}

#[test]
fn cancel_then_reschedule_keeps_single_pending_entry() {
    let mut queue = TimerQueue::new();
    queue.schedule(Lock::Click, 300);
    queue.cancel(&Lock::Click);
    queue.schedule(Lock::Click, 900);

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.deadline_of(&Lock::Click), Some(900));
}
