// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide navigator: focal index, animation guard and per-channel cooldowns.
//!
//! ## States
//!
//! A navigator is either idle or transitioning. An intent received while idle
//! whose target differs from the focal slot moves the focal slot and starts the
//! animation lock; any intent received while the lock is held is dropped.
//!
//! Button and wheel intents additionally pass through their own cooldown, which
//! is engaged after every handled intent from that channel and drops further
//! intents from the same channel until it expires.
//!
//! ## Time
//!
//! Every entry point takes the current host time and first calls
//! [`Navigator::advance`], so locks whose deadline has passed are released
//! before the intent is evaluated. Hosts should still wake the navigator at
//! [`Navigator::next_deadline`] if they care about observing releases promptly.
//!
//! ```
//! use understory_carousel::{Navigator, Outcome, Timings};
//!
//! let mut nav = Navigator::new(5, &Timings::default()).unwrap();
//! assert_eq!(nav.next(0), Outcome::Moved { from: 0, to: 1 });
//!
//! // Still animating: dropped.
//! assert!(!nav.next(100).is_moved());
//! assert_eq!(nav.current_index(), 1);
//!
//! // The 600ms transition has elapsed.
//! assert_eq!(nav.next(600), Outcome::Moved { from: 1, to: 2 });
//! ```

use alloc::vec::Vec;

use understory_timing::{Cooldown, TimerQueue};

use crate::config::Timings;
use crate::error::InitError;
use crate::preset::PresetTable;
use crate::ring::{step, wrap_target};
use crate::visual::Snapshot;

/// A normalized navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Move one slot forward, wrapping.
    Next,
    /// Move one slot backward, wrapping.
    Previous,
    /// Move to an explicit slot; see [`wrap_target`] for out-of-range handling.
    GoTo(isize),
}

/// Where an intent came from.
///
/// Only [`Channel::Button`] and [`Channel::Wheel`] carry their own cooldown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Programmatic calls.
    Api,
    /// Previous/next buttons.
    Button,
    /// Indicator dots.
    Indicator,
    /// Arrow keys.
    Keyboard,
    /// Touch swipes.
    Touch,
    /// Wheel or trackpad gestures.
    Wheel,
}

impl Channel {
    /// The cooldown owned by this channel, if any.
    #[must_use]
    pub const fn lock(self) -> Option<Lock> {
        match self {
            Self::Button => Some(Lock::Click),
            Self::Wheel => Some(Lock::Wheel),
            Self::Api | Self::Indicator | Self::Keyboard | Self::Touch => None,
        }
    }
}

/// The timed locks a navigator holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lock {
    /// Held for the duration of a transition; blocks every channel.
    Animation,
    /// Button cooldown.
    Click,
    /// Wheel cooldown.
    Wheel,
}

/// Why an intent had no effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// A transition is in progress.
    Animating,
    /// The intent's channel is cooling down.
    ChannelLocked(Lock),
    /// The intent resolved to the current slot.
    Unchanged,
}

/// Result of dispatching an intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The focal slot changed and a transition started.
    Moved {
        /// Previous focal slot.
        from: usize,
        /// New focal slot.
        to: usize,
    },
    /// The intent was dropped.
    Ignored(Ignored),
}

impl Outcome {
    /// Returns `true` if the focal slot changed.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// State for one carousel's ring.
#[derive(Clone, Debug)]
pub struct Navigator {
    len: usize,
    current: usize,
    animation: Cooldown,
    click: Cooldown,
    wheel: Cooldown,
    timers: TimerQueue<Lock>,
}

impl Navigator {
    /// Creates a navigator over `len` slots, focused on slot 0.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::NoSlots`] when `len` is zero.
    pub fn new(len: usize, timings: &Timings) -> Result<Self, InitError> {
        if len == 0 {
            return Err(InitError::NoSlots);
        }
        Ok(Self {
            len,
            current: 0,
            animation: Cooldown::new(timings.animation),
            click: Cooldown::new(timings.click_debounce),
            wheel: Cooldown::new(timings.wheel_debounce),
            timers: TimerQueue::new(),
        })
    }

    /// The focal slot.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slots in the ring.
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.len
    }

    /// Returns `true` while a transition is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_engaged()
    }

    /// Returns `true` while `lock` is held.
    #[must_use]
    pub fn is_locked(&self, lock: Lock) -> bool {
        self.cooldown(lock).is_engaged()
    }

    /// The earliest instant at which a held lock expires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Releases every lock whose deadline is at or before `now`.
    ///
    /// Returns the released locks in expiry order.
    pub fn advance(&mut self, now: u64) -> Vec<Lock> {
        let released = self.timers.drain_expired(now);
        for &lock in &released {
            self.cooldown_mut(lock).release();
        }
        released
    }

    /// Moves one slot forward.
    pub fn next(&mut self, now: u64) -> Outcome {
        self.dispatch(Channel::Api, Intent::Next, now)
    }

    /// Moves one slot backward.
    pub fn previous(&mut self, now: u64) -> Outcome {
        self.dispatch(Channel::Api, Intent::Previous, now)
    }

    /// Moves to `index`, wrapping a single step out of range.
    pub fn go_to(&mut self, index: isize, now: u64) -> Outcome {
        self.dispatch(Channel::Api, Intent::GoTo(index), now)
    }

    /// Resolves the slot an intent would move to from the current state.
    #[must_use]
    pub fn target_of(&self, intent: Intent) -> usize {
        match intent {
            Intent::Next => step(self.current, true, self.len),
            Intent::Previous => step(self.current, false, self.len),
            Intent::GoTo(index) => wrap_target(index, self.len),
        }
    }

    /// Runs an intent from `channel` through the channel cooldown and the
    /// animation guard.
    ///
    /// A channel with a cooldown engages it after every intent that gets past
    /// the cooldown check, whether or not the focal slot moved.
    pub fn dispatch(&mut self, channel: Channel, intent: Intent, now: u64) -> Outcome {
        self.advance(now);

        let lock = channel.lock();
        if let Some(lock) = lock
            && self.is_locked(lock)
        {
            log::debug!("{channel:?} intent {intent:?} dropped: {lock:?} cooldown");
            return Outcome::Ignored(Ignored::ChannelLocked(lock));
        }

        let outcome = self.transition(intent, now);

        if let Some(lock) = lock {
            self.engage(lock, now);
        }
        outcome
    }

    /// Computes visuals for the current state.
    #[must_use]
    pub fn snapshot(&self, presets: &PresetTable) -> Snapshot {
        Snapshot::compute(self.current, self.len, presets)
    }

    fn transition(&mut self, intent: Intent, now: u64) -> Outcome {
        if self.is_animating() {
            log::debug!("intent {intent:?} dropped: transition in progress");
            return Outcome::Ignored(Ignored::Animating);
        }
        let from = self.current;
        let to = self.target_of(intent);
        if to == from {
            return Outcome::Ignored(Ignored::Unchanged);
        }
        self.current = to;
        self.engage(Lock::Animation, now);
        log::trace!("slide {from} -> {to}");
        Outcome::Moved { from, to }
    }

    fn engage(&mut self, lock: Lock, now: u64) {
        // At most one pending release per lock.
        self.timers.cancel(&lock);
        let deadline = self.cooldown_mut(lock).engage(now);
        self.timers.schedule(lock, deadline);
    }

    fn cooldown(&self, lock: Lock) -> &Cooldown {
        match lock {
            Lock::Animation => &self.animation,
            Lock::Click => &self.click,
            Lock::Wheel => &self.wheel,
        }
    }

    fn cooldown_mut(&mut self, lock: Lock) -> &mut Cooldown {
        match lock {
            Lock::Animation => &mut self.animation,
            Lock::Click => &mut self.click,
            Lock::Wheel => &mut self.wheel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(len: usize) -> Navigator {
        Navigator::new(len, &Timings::default()).unwrap()
    }

    #[test]
    fn zero_slots_is_rejected() {
        assert_eq!(
            Navigator::new(0, &Timings::default()).unwrap_err(),
            InitError::NoSlots
        );
    }

    #[test]
    fn starts_idle_at_zero() {
        let nav = nav(3);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.total_slots(), 3);
        assert!(!nav.is_animating());
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn move_schedules_animation_release() {
        let mut nav = nav(3);
        assert!(nav.next(1_000).is_moved());
        assert!(nav.is_animating());
        assert_eq!(nav.next_deadline(), Some(1_600));

        assert!(nav.advance(1_599).is_empty());
        assert_eq!(nav.advance(1_600), [Lock::Animation]);
        assert!(!nav.is_animating());
    }

    #[test]
    fn button_lock_outlives_its_own_intent_only() {
        let mut nav = nav(5);
        let first = nav.dispatch(Channel::Button, Intent::Next, 0);
        assert_eq!(first, Outcome::Moved { from: 0, to: 1 });
        assert!(nav.is_locked(Lock::Click));

        // Dropped by the click cooldown before reaching the animation guard.
        let second = nav.dispatch(Channel::Button, Intent::Next, 100);
        assert_eq!(second, Outcome::Ignored(Ignored::ChannelLocked(Lock::Click)));

        // Click cooldown has expired, animation has not.
        let third = nav.dispatch(Channel::Button, Intent::Next, 300);
        assert_eq!(third, Outcome::Ignored(Ignored::Animating));
        // And the attempt re-armed the click cooldown.
        assert_eq!(nav.cooldown(Lock::Click).deadline(), Some(600));
    }

    #[test]
    fn channels_do_not_share_cooldowns() {
        let mut nav = nav(5);
        nav.dispatch(Channel::Wheel, Intent::Next, 0);
        assert!(nav.is_locked(Lock::Wheel));
        assert!(!nav.is_locked(Lock::Click));

        // Wheel lock ends at 500 and the animation at 600.
        assert_eq!(nav.advance(600), [Lock::Wheel, Lock::Animation]);
        assert!(!nav.is_locked(Lock::Wheel));
        assert!(!nav.is_locked(Lock::Click));
        assert!(nav.dispatch(Channel::Button, Intent::Next, 600).is_moved());
    }

    #[test]
    fn goto_current_is_unchanged_and_does_not_lock() {
        let mut nav = nav(4);
        assert_eq!(nav.go_to(0, 0), Outcome::Ignored(Ignored::Unchanged));
        assert!(!nav.is_animating());
    }

    #[test]
    fn single_slot_ring_never_moves() {
        let mut nav = nav(1);
        assert_eq!(nav.next(0), Outcome::Ignored(Ignored::Unchanged));
        assert_eq!(nav.previous(0), Outcome::Ignored(Ignored::Unchanged));
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.snapshot(&PresetTable::default()).slots()[0].offset, 0);
    }

    #[test]
    fn target_of_does_not_mutate() {
        let nav = nav(5);
        assert_eq!(nav.target_of(Intent::Previous), 4);
        assert_eq!(nav.target_of(Intent::GoTo(7)), 0);
        assert_eq!(nav.current_index(), 0);
    }
}
