// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! All durations are in host time units (milliseconds in a browser host).

use crate::preset::PresetTable;

/// Duration of one slide transition.
pub const ANIMATION_DURATION: u64 = 600;

/// Cooldown applied to the previous/next buttons after each press.
pub const CLICK_DEBOUNCE: u64 = 300;

/// Cooldown applied to wheel/trackpad navigation after each gesture.
pub const WHEEL_DEBOUNCE: u64 = 500;

/// Minimum horizontal travel for a touch sequence to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Lock durations used by the navigator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timings {
    /// How long a transition blocks further navigation.
    pub animation: u64,
    /// Button-press cooldown.
    pub click_debounce: u64,
    /// Wheel-gesture cooldown.
    pub wheel_debounce: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            animation: ANIMATION_DURATION,
            click_debounce: CLICK_DEBOUNCE,
            wheel_debounce: WHEEL_DEBOUNCE,
        }
    }
}

/// Everything needed to run a [`Carousel`](crate::Carousel).
///
/// With the `serde` feature, every field is optional when deserializing and
/// falls back to its default, so hosts can accept partial overrides.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Lock durations.
    pub timings: Timings,
    /// Swipe recognition distance.
    pub swipe_threshold: f64,
    /// Placement presets.
    pub presets: PresetTable,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            swipe_threshold: SWIPE_THRESHOLD,
            presets: PresetTable::default(),
        }
    }
}
