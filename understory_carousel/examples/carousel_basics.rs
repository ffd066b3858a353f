// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Drive a five-card carousel with mixed input and print the placement of
//! every card after each step.
//!
//! Run:
//! - `cargo run -p understory_carousel --example carousel_basics`

use kurbo::{Point, Vec2};
use understory_carousel::input::button::NavButton;
use understory_carousel::input::keyboard::ArrowKey;
use understory_carousel::input::wheel::WheelInput;
use understory_carousel::{Carousel, CarouselConfig, CarouselHost, InitError, Snapshot};

struct PrintHost {
    names: Vec<&'static str>,
}

impl CarouselHost for PrintHost {
    fn discover_slots(&mut self) -> Result<usize, InitError> {
        Ok(self.names.len())
    }

    fn build_indicators(&mut self, count: usize) {
        println!("indicators: {}", "o".repeat(count));
    }

    fn render(&mut self, snapshot: &Snapshot) {
        for visual in snapshot.slots() {
            println!(
                "  {:>8} {:>3} {:<11?} z={} opacity={} {}",
                self.names[visual.slot],
                visual.offset,
                visual.preset,
                visual.stack_order,
                visual.opacity,
                visual.transform,
            );
        }
        let dots: String = snapshot
            .indicators()
            .map(|active| if active { '●' } else { 'o' })
            .collect();
        println!("  {dots}");
    }

    fn is_section_visible(&self) -> bool {
        true
    }
}

fn main() {
    let host = PrintHost {
        names: vec!["arabian", "mustang", "friesian", "shire", "appaloosa"],
    };
    let Ok(mut carousel) = Carousel::initialize(host, CarouselConfig::default()) else {
        return;
    };

    // Button, then a second press inside the click cooldown.
    println!("next button @0: {:?}", carousel.press_button(NavButton::Next, 0));
    println!("next button @100: {:?}", carousel.press_button(NavButton::Next, 100));

    // Arrow key once the transition has finished.
    println!("left arrow @700: {:?}", carousel.key_down(ArrowKey::Left, 700));

    // A vertical scroll belongs to the page.
    let scroll = WheelInput::new(Vec2::new(0.0, 80.0), false);
    println!("vertical wheel @1400: {:?}", carousel.wheel(scroll, 1_400));

    // A leftward swipe.
    carousel.touch_start(Point::new(300.0, 200.0));
    carousel.touch_move(Point::new(250.0, 205.0));
    println!(
        "swipe @1400: {:?}",
        carousel.touch_end(Point::new(200.0, 210.0), 1_400)
    );

    // Jump straight to the last card from its dot.
    println!("dot 4 @2100: {:?}", carousel.select_indicator(4, 2_100));
}
