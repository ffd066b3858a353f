// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input adapters: translate raw button, key, touch and wheel input into
//! navigation [`Intent`](crate::Intent)s.
//!
//! Adapters are pure or nearly so. Cooldowns and the animation guard live in
//! the [`Navigator`](crate::Navigator); visibility gating lives in the
//! [`Carousel`](crate::Carousel).

pub mod button;
pub mod keyboard;
pub mod swipe;
pub mod wheel;
