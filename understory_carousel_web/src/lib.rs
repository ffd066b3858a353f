// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel_web --heading-base-level=0

//! Browser host for `understory_carousel`.
//!
//! On `wasm32`, `WebCarousel` finds a carousel in the page, builds its
//! indicator dots, renders card placements as CSS transforms and wires
//! buttons, arrow keys, touch and wheel input to the navigator.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start() -> Option<understory_carousel_web::WebCarousel> {
//!     // Returns `None` (and logs why) when the page has no carousel.
//!     understory_carousel_web::WebCarousel::initialize()
//! }
//! ```
//!
//! The expected markup, with the default [`Selectors`]:
//!
//! ```html
//! <section id="games-carousel">
//!   <div class="horse-carousel" data-carousel-config='{"timings":{"animation":450}}'>
//!     <div class="carousel-track">
//!       <div class="horse-card">…</div>
//!       <div class="horse-card">…</div>
//!     </div>
//!     <button class="carousel-prev"></button>
//!     <button class="carousel-next"></button>
//!     <div class="carousel-indicators"></div>
//!   </div>
//! </section>
//! ```
//!
//! Notes:
//! - Keyboard and wheel input only navigate while the section carries the
//!   `is-visible` class, which the page's own visibility observer maintains.
//! - Style writes are batched into a `requestAnimationFrame` callback; the
//!   `active` class is toggled immediately.
//! - Time is read from `performance.now()`, which is monotonic, so stepping the
//!   system clock cannot hold a lock past its deadline.
//! - Lock releases are driven by `setTimeout` at the navigator's next deadline.
//! - Listeners are never removed; a carousel lives as long as the page.
//! - Logging goes through the `log` facade; install a logger to see it.
//!
//! On other targets only the configuration and clock helpers are available.

mod clock;
mod config;
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "`#[wasm_bindgen]` exports expand to unsafe ABI glue.")]
mod dom;

pub use clock::timestamp_millis;
pub use config::{CONFIG_ATTRIBUTE, Classes, Selectors, config_from_attribute};
#[cfg(target_arch = "wasm32")]
pub use dom::{DomHost, WebCarousel};
