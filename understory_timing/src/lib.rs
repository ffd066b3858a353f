// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI state machines frequently need "do this later" behavior: release an
//! animation guard after a transition, re-arm a button after a debounce window,
//! and so on. Browsers, native event loops and test harnesses all schedule
//! callbacks differently, so this crate never reads a clock or spawns anything.
//! Instead, time is a plain `u64` timestamp in host-defined units (typically
//! milliseconds from a monotonic source), and the host is responsible for
//! waking the state machine up at the deadlines reported here.
//!
//! The crate provides two small building blocks:
//!
//! - [`TimerQueue`]: a set of pending deadlines keyed by a caller-chosen type,
//!   drained in deadline order.
//! - [`Cooldown`]: a boolean lock with a fixed duration, engaged at a given
//!   instant and released explicitly once its deadline has been observed.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::{Cooldown, TimerQueue};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Lock {
//!     Click,
//! }
//!
//! let mut queue = TimerQueue::new();
//! let mut click = Cooldown::new(300);
//!
//! // A click arrives at t=1000: engage the lock and remember its deadline.
//! let deadline = click.engage(1000);
//! queue.schedule(Lock::Click, deadline);
//! assert!(click.is_engaged());
//! assert_eq!(queue.next_deadline(), Some(1300));
//!
//! // Nothing has expired yet at t=1200.
//! assert_eq!(queue.pop_expired(1200), None);
//!
//! // At t=1300 the host wakes us up and the lock is released.
//! while let Some(lock) = queue.pop_expired(1300) {
//!     assert_eq!(lock, Lock::Click);
//!     click.release();
//! }
//! assert!(!click.is_engaged());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cooldown;
mod queue;

pub use cooldown::Cooldown;
pub use queue::TimerQueue;
