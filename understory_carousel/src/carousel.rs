// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: a [`Navigator`] wired to a host.
//!
//! The host owns the actual presentation surface (DOM, widget tree, test
//! double) and implements [`CarouselHost`]. The controller owns everything
//! stateful: the navigator, the swipe recognizer and the configuration. Each
//! raw input handler returns what happened so the host can decide, for
//! instance, whether to call `preventDefault`.

use alloc::vec::Vec;

use kurbo::Point;

use crate::config::CarouselConfig;
use crate::error::InitError;
use crate::input::button::NavButton;
use crate::input::keyboard::ArrowKey;
use crate::input::swipe::SwipeRecognizer;
use crate::input::wheel::WheelInput;
use crate::navigator::{Channel, Intent, Lock, Navigator, Outcome};
use crate::visual::Snapshot;

/// The presentation side of a carousel.
pub trait CarouselHost {
    /// Looks up the host's anchors and returns the number of slots.
    ///
    /// Returning an error leaves the carousel inactive.
    fn discover_slots(&mut self) -> Result<usize, InitError>;

    /// Creates `count` indicator dots, replacing any existing ones.
    fn build_indicators(&mut self, count: usize);

    /// Applies a snapshot to the surface.
    fn render(&mut self, snapshot: &Snapshot);

    /// Whether the section containing the carousel is currently visible.
    ///
    /// Consulted by keyboard and wheel input only.
    fn is_section_visible(&self) -> bool;
}

/// What a raw input handler did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputResponse {
    /// The event is not for the carousel; the host must leave it alone.
    PassThrough,
    /// The carousel owns the event (the host should suppress its default
    /// action) and produced this outcome.
    Consumed(Outcome),
}

impl InputResponse {
    /// Returns `true` if the host should suppress the event's default action.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed(_))
    }
}

/// A running carousel.
#[derive(Debug)]
pub struct Carousel<H> {
    host: H,
    config: CarouselConfig,
    navigator: Navigator,
    swipe: SwipeRecognizer,
}

impl<H: CarouselHost> Carousel<H> {
    /// Discovers the host's slots, builds indicators and renders the first
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`CarouselHost::discover_slots`] failures, and returns
    /// [`InitError::NoSlots`] if the host reports zero slots.
    pub fn initialize(mut host: H, config: CarouselConfig) -> Result<Self, InitError> {
        let count = host.discover_slots()?;
        let navigator = Navigator::new(count, &config.timings)?;
        host.build_indicators(count);

        let mut carousel = Self {
            host,
            swipe: SwipeRecognizer::new(config.swipe_threshold),
            config,
            navigator,
        };
        carousel.render();
        log::info!("carousel initialized with {count} slots");
        Ok(carousel)
    }

    /// The focal slot.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    /// Number of slots.
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.navigator.total_slots()
    }

    /// The underlying navigator.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Visuals for the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.navigator.snapshot(&self.config.presets)
    }

    /// The instant the host should next call [`Carousel::advance`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.navigator.next_deadline()
    }

    /// Releases expired locks.
    pub fn advance(&mut self, now: u64) -> Vec<Lock> {
        self.navigator.advance(now)
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

    /// Handles a previous/next button press.
    pub fn press_button(&mut self, button: NavButton, now: u64) -> Outcome {
        self.dispatch(Channel::Button, button.intent(), now)
    }

    /// Handles a click on the indicator dot for `index`.
    pub fn select_indicator(&mut self, index: usize, now: u64) -> Outcome {
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        self.dispatch(Channel::Indicator, Intent::GoTo(index), now)
    }

    /// Handles an arrow key press.
    ///
    /// Keys pass through while the section is not visible.
    pub fn key_down(&mut self, key: ArrowKey, now: u64) -> InputResponse {
        if !self.host.is_section_visible() {
            return InputResponse::PassThrough;
        }
        InputResponse::Consumed(self.dispatch(Channel::Keyboard, key.intent(), now))
    }

    /// Handles a wheel event.
    ///
    /// Gestures pass through while the section is not visible and when they
    /// are not horizontal navigation gestures. Navigation gestures are consumed
    /// even when the wheel cooldown drops them.
    pub fn wheel(&mut self, input: WheelInput, now: u64) -> InputResponse {
        if !self.host.is_section_visible() {
            return InputResponse::PassThrough;
        }
        match input.intent() {
            Some(intent) => InputResponse::Consumed(self.dispatch(Channel::Wheel, intent, now)),
            None => InputResponse::PassThrough,
        }
    }

    /// Handles the start of a touch sequence.
    pub fn touch_start(&mut self, pos: Point) {
        self.swipe.begin(pos);
    }

    /// Handles a touch move.
    pub fn touch_move(&mut self, pos: Point) {
        self.swipe.update(pos);
    }

    /// Handles the end of a touch sequence.
    ///
    /// Returns `None` if the sequence was not a swipe.
    pub fn touch_end(&mut self, pos: Point, now: u64) -> Option<Outcome> {
        let intent = self.swipe.end(pos)?;
        Some(self.dispatch(Channel::Touch, intent, now))
    }

    /// Abandons the current touch sequence.
    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    fn dispatch(&mut self, channel: Channel, intent: Intent, now: u64) -> Outcome {
        let outcome = self.navigator.dispatch(channel, intent, now);
        if outcome.is_moved() {
            self.render();
        }
        outcome
    }

    fn render(&mut self) {
        let snapshot = self.navigator.snapshot(&self.config.presets);
        self.host.render(&snapshot);
    }
}
