// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition over a touch sequence.
//!
//! ## Usage
//!
//! 1) Call [`SwipeRecognizer::begin`] on touch start with the touch position.
//! 2) Call [`SwipeRecognizer::update`] on every touch move. A sample whose
//!    vertical travel exceeds its horizontal travel cancels the swipe for the
//!    rest of the sequence, since the user is scrolling the page.
//! 3) Call [`SwipeRecognizer::end`] on touch end to get the resulting intent.
//!
//! Travel is always measured from the start position, never between samples.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::Intent;
//! use understory_carousel::input::swipe::SwipeRecognizer;
//!
//! let mut swipe = SwipeRecognizer::new(50.0);
//!
//! // Finger moves 80px to the left: advance.
//! swipe.begin(Point::new(200.0, 300.0));
//! swipe.update(Point::new(150.0, 305.0));
//! assert_eq!(swipe.end(Point::new(120.0, 306.0)), Some(Intent::Next));
//!
//! // Mostly vertical movement: no swipe, even though X travelled 60px.
//! swipe.begin(Point::new(200.0, 300.0));
//! swipe.update(Point::new(195.0, 380.0));
//! assert_eq!(swipe.end(Point::new(140.0, 390.0)), None);
//! ```

use kurbo::Point;

use crate::navigator::Intent;

/// Tracks one touch sequence and decides whether it was a horizontal swipe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeRecognizer {
    threshold: f64,
    start: Option<Point>,
    swiping: bool,
}

impl SwipeRecognizer {
    /// Creates a recognizer requiring more than `threshold` horizontal travel.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
            swiping: false,
        }
    }

    /// The configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` while a sequence is in progress and still eligible.
    #[must_use]
    pub const fn is_swiping(&self) -> bool {
        self.swiping
    }

    /// Starts a new sequence at `pos`, discarding any previous one.
    pub fn begin(&mut self, pos: Point) {
        self.start = Some(pos);
        self.swiping = true;
    }

    /// Feeds an intermediate sample.
    pub fn update(&mut self, pos: Point) {
        if !self.swiping {
            return;
        }
        if let Some(start) = self.start {
            let travel = pos - start;
            if travel.y.abs() > travel.x.abs() {
                self.swiping = false;
            }
        }
    }

    /// Finishes the sequence at `pos`.
    ///
    /// Returns [`Intent::Next`] when the finger moved left past the threshold,
    /// [`Intent::Previous`] when it moved right, and `None` otherwise.
    pub fn end(&mut self, pos: Point) -> Option<Intent> {
        let start = self.start.take();
        let eligible = core::mem::replace(&mut self.swiping, false);
        if !eligible {
            return None;
        }
        let diff = start?.x - pos.x;
        if diff.abs() > self.threshold {
            Some(if diff > 0.0 {
                Intent::Next
            } else {
                Intent::Previous
            })
        } else {
            None
        }
    }

    /// Abandons the current sequence, e.g. on `touchcancel`.
    pub fn cancel(&mut self) {
        self.start = None;
        self.swiping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_swipe_goes_back() {
        let mut swipe = SwipeRecognizer::new(50.0);
        swipe.begin(Point::new(0.0, 0.0));
        swipe.update(Point::new(30.0, 2.0));
        assert_eq!(swipe.end(Point::new(70.0, 4.0)), Some(Intent::Previous));
        assert!(!swipe.is_swiping());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut swipe = SwipeRecognizer::new(50.0);
        swipe.begin(Point::new(100.0, 0.0));
        assert_eq!(swipe.end(Point::new(50.0, 0.0)), None);

        swipe.begin(Point::new(100.0, 0.0));
        assert_eq!(swipe.end(Point::new(49.5, 0.0)), Some(Intent::Next));
    }

    #[test]
    fn vertical_sample_latches_cancellation() {
        let mut swipe = SwipeRecognizer::new(50.0);
        swipe.begin(Point::new(100.0, 100.0));
        swipe.update(Point::new(98.0, 110.0));
        assert!(!swipe.is_swiping());

        // Later horizontal samples do not revive the swipe.
        swipe.update(Point::new(20.0, 110.0));
        assert!(!swipe.is_swiping());
        assert_eq!(swipe.end(Point::new(40.0, 100.0)), None);
    }

    #[test]
    fn diagonal_tie_keeps_swiping() {
        let mut swipe = SwipeRecognizer::new(50.0);
        swipe.begin(Point::new(0.0, 0.0));
        swipe.update(Point::new(-20.0, 20.0));
        assert!(swipe.is_swiping());
        assert_eq!(swipe.end(Point::new(-60.0, 20.0)), Some(Intent::Next));
    }

    #[test]
    fn end_without_begin_is_none() {
        let mut swipe = SwipeRecognizer::new(50.0);
        assert_eq!(swipe.end(Point::new(500.0, 0.0)), None);
    }

    #[test]
    fn cancel_discards_sequence() {
        let mut swipe = SwipeRecognizer::new(50.0);
        swipe.begin(Point::new(0.0, 0.0));
        swipe.cancel();
        assert_eq!(swipe.end(Point::new(-100.0, 0.0)), None);
    }
}
