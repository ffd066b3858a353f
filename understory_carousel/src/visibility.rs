// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section visibility from intersection observations.
//!
//! Keyboard and wheel input only navigate while the carousel's section is on
//! screen. Hosts that already track this elsewhere can ignore this module;
//! others can feed intersection reports into a [`SectionVisibility`] and use it
//! as the predicate.
//!
//! The flag is sticky in one direction: it turns on once the section is at
//! least [`VISIBILITY_THRESHOLD`] visible and only turns off when the section
//! leaves the viewport entirely.

/// Fraction of the section that must be visible before it counts as shown.
pub const VISIBILITY_THRESHOLD: f64 = 0.4;

/// Hysteresis flag for "is the carousel section on screen".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionVisibility {
    threshold: f64,
    visible: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl SectionVisibility {
    /// Creates a hidden tracker with the given threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Returns the current flag.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies one intersection report and returns `true` if the flag changed.
    ///
    /// ```
    /// use understory_carousel::visibility::SectionVisibility;
    ///
    /// let mut section = SectionVisibility::default();
    /// assert!(!section.observe(true, 0.2));
    /// assert!(section.observe(true, 0.5));
    /// // Scrolling partly away keeps it visible.
    /// assert!(!section.observe(true, 0.1));
    /// assert!(section.is_visible());
    /// assert!(section.observe(false, 0.0));
    /// ```
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        let was = self.visible;
        if !is_intersecting {
            self.visible = false;
        } else if ratio >= self.threshold {
            self.visible = true;
        }
        was != self.visible
    }
}
