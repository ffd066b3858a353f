// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and trackpad gestures.
//!
//! Only horizontal-dominant gestures navigate. Holding shift turns a vertical
//! wheel into a horizontal one, matching how browsers scroll sideways. Every
//! other gesture belongs to the page and must be left alone by the host.

use kurbo::Vec2;

use crate::navigator::Intent;

/// One wheel event as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta; positive X scrolls right, positive Y scrolls down.
    pub delta: Vec2,
    /// Whether shift was held.
    pub shift: bool,
}

impl WheelInput {
    /// Creates a wheel input.
    #[must_use]
    pub const fn new(delta: Vec2, shift: bool) -> Self {
        Self { delta, shift }
    }

    /// Returns `true` if the carousel should own this gesture.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.delta.x.abs() > self.delta.y.abs() || self.shift
    }

    /// The intent for a navigation gesture, or `None` for page scrolling.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use understory_carousel::Intent;
    /// use understory_carousel::input::wheel::WheelInput;
    ///
    /// assert_eq!(WheelInput::new(Vec2::new(12.0, 3.0), false).intent(), Some(Intent::Next));
    /// assert_eq!(WheelInput::new(Vec2::new(0.0, -40.0), true).intent(), Some(Intent::Previous));
    /// assert_eq!(WheelInput::new(Vec2::new(2.0, 40.0), false).intent(), None);
    /// ```
    #[must_use]
    pub fn intent(&self) -> Option<Intent> {
        if !self.is_navigation() {
            return None;
        }
        let forward = self.delta.x > 0.0 || (self.shift && self.delta.y > 0.0);
        Some(if forward {
            Intent::Next
        } else {
            Intent::Previous
        })
    }
}
