// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation.

use crate::navigator::Intent;

/// A horizontal arrow key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    /// `ArrowLeft`: previous slide.
    Left,
    /// `ArrowRight`: next slide.
    Right,
}

impl ArrowKey {
    /// Parses a DOM `KeyboardEvent.key` value.
    ///
    /// Returns `None` for every key the carousel does not handle.
    ///
    /// ```
    /// use understory_carousel::input::keyboard::ArrowKey;
    ///
    /// assert_eq!(ArrowKey::from_key_name("ArrowRight"), Some(ArrowKey::Right));
    /// assert_eq!(ArrowKey::from_key_name("ArrowUp"), None);
    /// ```
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// The intent this key produces.
    #[must_use]
    pub const fn intent(self) -> Intent {
        match self {
            Self::Left => Intent::Previous,
            Self::Right => Intent::Next,
        }
    }
}
