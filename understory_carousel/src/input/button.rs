// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Previous/next buttons.

use crate::navigator::Intent;

/// One of the two navigation buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavButton {
    /// Steps backward.
    Previous,
    /// Steps forward.
    Next,
}

impl NavButton {
    /// The intent a press produces.
    #[must_use]
    pub const fn intent(self) -> Intent {
        match self {
            Self::Previous => Intent::Previous,
            Self::Next => Intent::Next,
        }
    }
}
