// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless navigation for circular 3D carousels.
//!
//! A carousel here is a ring of `N` slots (cards) with one focal slot. Cards
//! are placed around the focal slot with a small set of fixed 3D presets
//! chosen by their wrap-centered distance from it. Navigation comes from
//! several input sources at once and is debounced so a burst of input never
//! skips cards or interrupts a running transition.
//!
//! The crate is split into small pieces that can be used on their own:
//!
//! - [`ring`]: index arithmetic on the ring (centered offsets, single-step wrap).
//! - [`preset`]: the offset → placement lookup table and CSS formatting.
//! - [`Snapshot`] / [`SlotVisual`]: the derived visuals for one state.
//! - [`Navigator`]: the state machine. It holds the focal index, the animation
//!   guard and the per-channel cooldowns, all driven by host-supplied time.
//! - [`input`]: adapters that turn buttons, arrow keys, touch swipes and wheel
//!   gestures into [`Intent`]s.
//! - [`visibility`]: an optional "is the section on screen" tracker.
//! - [`Carousel`]: the controller tying a navigator to a [`CarouselHost`].
//!
//! The crate does not know about any UI framework or DOM. Hosts discover the
//! slots, render snapshots and report time; `understory_carousel_web` is one
//! such host for browsers.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, CarouselHost, InitError, Snapshot};
//! use understory_carousel::preset::PresetKind;
//!
//! #[derive(Default)]
//! struct Cards {
//!     last: Option<Snapshot>,
//! }
//!
//! impl CarouselHost for Cards {
//!     fn discover_slots(&mut self) -> Result<usize, InitError> {
//!         Ok(5)
//!     }
//!     fn build_indicators(&mut self, _count: usize) {}
//!     fn render(&mut self, snapshot: &Snapshot) {
//!         self.last = Some(snapshot.clone());
//!     }
//!     fn is_section_visible(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let mut carousel = Carousel::initialize(Cards::default(), CarouselConfig::default()).unwrap();
//! carousel.next(0);
//!
//! let snapshot = carousel.host().last.as_ref().unwrap();
//! assert_eq!(snapshot.current(), 1);
//! assert_eq!(snapshot.slot(0).unwrap().preset, PresetKind::NearLeft);
//! assert_eq!(snapshot.slot(2).unwrap().preset, PresetKind::NearRight);
//! ```
//!
//! ## Time
//!
//! Time is a `u64` in host units (milliseconds in browsers). Every entry point
//! takes `now`; the host should also call [`Carousel::advance`] at
//! [`Carousel::next_deadline`] so locks are released when they expire.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `serde`: derives `Serialize`/`Deserialize` for [`CarouselConfig`] and the
//!   preset types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
mod navigator;
mod visual;

pub mod input;
pub mod preset;
pub mod ring;
pub mod visibility;

pub use carousel::{Carousel, CarouselHost, InputResponse};
pub use config::{
    ANIMATION_DURATION, CLICK_DEBOUNCE, CarouselConfig, SWIPE_THRESHOLD, Timings, WHEEL_DEBOUNCE,
};
pub use error::InitError;
pub use navigator::{Channel, Ignored, Intent, Lock, Navigator, Outcome};
pub use visual::{SlotVisual, Snapshot};
