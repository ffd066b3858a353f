// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Reasons a carousel could not be activated.
///
/// None of these are fatal: hosts treat them as "no carousel on this page"
/// and leave the component inactive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    /// A required anchor element was not found. Carries a host-defined
    /// description of the anchor, such as a CSS selector.
    MissingAnchor(&'static str),
    /// The ring was found but contains no slots.
    NoSlots,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor(anchor) => write!(f, "required anchor `{anchor}` not found"),
            Self::NoSlots => f.write_str("carousel has no slots"),
        }
    }
}

impl core::error::Error for InitError {}
