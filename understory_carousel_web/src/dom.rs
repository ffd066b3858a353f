// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host and event wiring.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Vec2};
use understory_carousel::input::button::NavButton;
use understory_carousel::input::keyboard::ArrowKey;
use understory_carousel::input::wheel::WheelInput;
use understory_carousel::{Carousel, CarouselConfig, CarouselHost, InitError, Outcome, Snapshot};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    MouseEvent, Performance, TouchEvent, WheelEvent, Window,
};

use crate::clock::timestamp_millis;
use crate::config::{CONFIG_ATTRIBUTE, Classes, Selectors, config_from_attribute};

fn now(performance: &Performance) -> u64 {
    timestamp_millis(performance.now())
}

fn query(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// A [`CarouselHost`] backed by live DOM elements.
///
/// Anchors are resolved by [`CarouselHost::discover_slots`]; until then every
/// accessor returns `None` or an empty slice.
#[derive(Debug)]
pub struct DomHost {
    window: Window,
    document: Document,
    selectors: Selectors,
    classes: Classes,
    carousel: Option<Element>,
    track: Option<Element>,
    cards: Vec<HtmlElement>,
    prev_button: Option<Element>,
    next_button: Option<Element>,
    indicators: Option<Element>,
    dots: Vec<Element>,
}

impl DomHost {
    /// Creates an unresolved host for `document`.
    #[must_use]
    pub fn new(window: Window, document: Document, selectors: Selectors, classes: Classes) -> Self {
        Self {
            window,
            document,
            selectors,
            classes,
            carousel: None,
            track: None,
            cards: Vec::new(),
            prev_button: None,
            next_button: None,
            indicators: None,
            dots: Vec::new(),
        }
    }

    /// The carousel root element.
    #[must_use]
    pub fn carousel(&self) -> Option<&Element> {
        self.carousel.as_ref()
    }

    /// The element receiving touch input.
    #[must_use]
    pub fn track(&self) -> Option<&Element> {
        self.track.as_ref()
    }

    /// The indicator dots, in slot order.
    #[must_use]
    pub fn dots(&self) -> &[Element] {
        &self.dots
    }
}

impl CarouselHost for DomHost {
    fn discover_slots(&mut self) -> Result<usize, InitError> {
        let carousel = self
            .document
            .query_selector(self.selectors.carousel)
            .ok()
            .flatten()
            .ok_or(InitError::MissingAnchor(self.selectors.carousel))?;
        let track = query(&carousel, self.selectors.track)
            .ok_or(InitError::MissingAnchor(self.selectors.track))?;

        let cards = carousel
            .query_selector_all(self.selectors.cards)
            .map_err(|_| InitError::MissingAnchor(self.selectors.cards))?;
        self.cards = (0..cards.length())
            .filter_map(|i| cards.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();

        self.prev_button = query(&carousel, self.selectors.prev_button);
        self.next_button = query(&carousel, self.selectors.next_button);
        self.indicators = query(&carousel, self.selectors.indicators);
        self.track = Some(track);
        self.carousel = Some(carousel);
        Ok(self.cards.len())
    }

    fn build_indicators(&mut self, count: usize) {
        self.dots.clear();
        let Some(container) = &self.indicators else {
            return;
        };
        container.set_inner_html("");
        for i in 0..count {
            let Ok(dot) = self.document.create_element("span") else {
                continue;
            };
            dot.set_class_name(&self.classes.dot_class(i, 0));
            if container.append_child(&dot).is_ok() {
                self.dots.push(dot);
            }
        }
    }

    fn render(&mut self, snapshot: &Snapshot) {
        let mut writes = Vec::with_capacity(self.cards.len());
        for (card, visual) in self.cards.iter().zip(snapshot.slots()) {
            let _ = card
                .class_list()
                .toggle_with_force(self.classes.active, visual.is_focal);
            writes.push((
                card.clone(),
                visual.transform.to_string(),
                visual.opacity.to_string(),
                visual.stack_order.to_string(),
            ));
        }

        // Batch style writes into the next frame.
        let frame = Closure::once_into_js(move || {
            for (card, transform, opacity, z_index) in writes {
                let style = card.style();
                let _ = style.set_property("transform", &transform);
                let _ = style.set_property("opacity", &opacity);
                let _ = style.set_property("z-index", &z_index);
            }
        });
        if self
            .window
            .request_animation_frame(frame.unchecked_ref())
            .is_err()
        {
            log::warn!("carousel: requestAnimationFrame failed; styles not applied");
        }

        for (i, dot) in self.dots.iter().enumerate() {
            let _ = dot
                .class_list()
                .toggle_with_force(self.classes.active, snapshot.is_indicator_active(i));
        }
    }

    fn is_section_visible(&self) -> bool {
        self.document
            .query_selector(self.selectors.section)
            .ok()
            .flatten()
            .is_some_and(|section| section.class_list().contains(self.classes.visible))
    }
}

struct Shared {
    window: Window,
    performance: Performance,
    carousel: RefCell<Carousel<DomHost>>,
    // Deadline of the pending `setTimeout`, if any.
    wakeup: Cell<Option<u64>>,
}

/// Arms a timeout for the carousel's next lock deadline.
fn schedule_wakeup(shared: &Rc<Shared>) {
    let Some(deadline) = shared.carousel.borrow().next_deadline() else {
        return;
    };
    if shared.wakeup.get().is_some_and(|pending| pending <= deadline) {
        return;
    }
    shared.wakeup.set(Some(deadline));

    let delay = i32::try_from(deadline.saturating_sub(now(&shared.performance))).unwrap_or(i32::MAX);
    let handle = Rc::clone(shared);
    let callback = Closure::once_into_js(move || {
        handle.wakeup.set(None);
        let released = handle.carousel.borrow_mut().advance(now(&handle.performance));
        if !released.is_empty() {
            log::trace!("carousel: released {released:?}");
        }
        schedule_wakeup(&handle);
    });
    if shared
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        .is_err()
    {
        shared.wakeup.set(None);
        log::warn!("carousel: setTimeout failed; locks release on next input");
    }
}

/// Runs `f` against the carousel and re-arms the lock timer.
fn with_carousel<R>(shared: &Rc<Shared>, f: impl FnOnce(&mut Carousel<DomHost>, u64) -> R) -> R {
    let result = f(&mut shared.carousel.borrow_mut(), now(&shared.performance));
    schedule_wakeup(shared);
    result
}

/// Adds a listener for events of type `E`; the listener lives as long as the page.
fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    mut handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn touch_point(event: &TouchEvent) -> Option<Point> {
    let touch = event.changed_touches().get(0)?;
    Some(Point::new(
        f64::from(touch.screen_x()),
        f64::from(touch.screen_y()),
    ))
}

fn wire(shared: &Rc<Shared>, document: &Document) -> Result<(), JsValue> {
    let (carousel, track, prev, next, dots) = {
        let c = shared.carousel.borrow();
        let host = c.host();
        (
            host.carousel.clone(),
            host.track.clone(),
            host.prev_button.clone(),
            host.next_button.clone(),
            host.dots.clone(),
        )
    };

    for (button, side) in [(prev, NavButton::Previous), (next, NavButton::Next)] {
        let Some(button) = button else { continue };
        let shared = Rc::clone(shared);
        listen(&button, "click", true, move |_: MouseEvent| {
            with_carousel(&shared, |c, now| c.press_button(side, now));
        })?;
    }

    for (index, dot) in dots.iter().enumerate() {
        let shared = Rc::clone(shared);
        listen(dot, "click", true, move |_: MouseEvent| {
            with_carousel(&shared, |c, now| c.select_indicator(index, now));
        })?;
    }

    {
        let shared = Rc::clone(shared);
        listen(document, "keydown", false, move |event: KeyboardEvent| {
            let Some(key) = ArrowKey::from_key_name(&event.key()) else {
                return;
            };
            if with_carousel(&shared, |c, now| c.key_down(key, now)).is_consumed() {
                event.prevent_default();
            }
        })?;
    }

    if let Some(track) = track {
        let start = Rc::clone(shared);
        listen(&track, "touchstart", true, move |event: TouchEvent| {
            if let Some(pos) = touch_point(&event) {
                start.carousel.borrow_mut().touch_start(pos);
            }
        })?;
        let moved = Rc::clone(shared);
        listen(&track, "touchmove", true, move |event: TouchEvent| {
            if let Some(pos) = touch_point(&event) {
                moved.carousel.borrow_mut().touch_move(pos);
            }
        })?;
        let end = Rc::clone(shared);
        listen(&track, "touchend", true, move |event: TouchEvent| {
            if let Some(pos) = touch_point(&event) {
                with_carousel(&end, |c, now| c.touch_end(pos, now));
            }
        })?;
        let cancel = Rc::clone(shared);
        listen(&track, "touchcancel", true, move |_: TouchEvent| {
            cancel.carousel.borrow_mut().touch_cancel();
        })?;
    }

    if let Some(carousel) = carousel {
        let shared = Rc::clone(shared);
        // Non-passive so navigation gestures can suppress page scrolling.
        listen(&carousel, "wheel", false, move |event: WheelEvent| {
            let input = WheelInput::new(
                Vec2::new(event.delta_x(), event.delta_y()),
                event.shift_key(),
            );
            if with_carousel(&shared, |c, now| c.wheel(input, now)).is_consumed() {
                event.prevent_default();
            }
        })?;
    }

    Ok(())
}

/// A carousel attached to the page.
///
/// Cloning the handle is cheap; all clones drive the same carousel.
#[wasm_bindgen]
#[derive(Clone)]
pub struct WebCarousel {
    shared: Rc<Shared>,
}

impl core::fmt::Debug for WebCarousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebCarousel")
            .field("current_index", &self.current_index())
            .field("total_slots", &self.total_slots())
            .finish_non_exhaustive()
    }
}

impl WebCarousel {
    /// Finds the carousel in the current document and activates it.
    ///
    /// Returns `None` when there is no carousel on the page or its required
    /// anchors are missing; the reason is logged.
    #[must_use]
    pub fn initialize_with(selectors: Selectors, classes: Classes) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let Some(performance) = window.performance() else {
            log::warn!("carousel: `window.performance` is unavailable");
            return None;
        };

        let raw_config = document
            .query_selector(selectors.carousel)
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE));
        let config: CarouselConfig = config_from_attribute(raw_config.as_deref());

        let host = DomHost::new(window.clone(), document.clone(), selectors, classes);
        let carousel = match Carousel::initialize(host, config) {
            Ok(carousel) => carousel,
            Err(InitError::MissingAnchor(anchor)) if anchor == selectors.carousel => {
                log::info!("carousel not found on this page");
                return None;
            }
            Err(err) => {
                log::warn!("carousel: {err}");
                return None;
            }
        };

        let shared = Rc::new(Shared {
            window,
            performance,
            carousel: RefCell::new(carousel),
            wakeup: Cell::new(None),
        });
        if let Err(err) = wire(&shared, &document) {
            log::warn!("carousel: failed to attach listeners: {err:?}");
        }
        Some(Self { shared })
    }

    /// Current state of every slot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.shared.carousel.borrow().snapshot()
    }

    fn run(&self, f: impl FnOnce(&mut Carousel<DomHost>, u64) -> Outcome) -> bool {
        with_carousel(&self.shared, f).is_moved()
    }
}

#[wasm_bindgen]
impl WebCarousel {
    /// Activates the carousel using the default selectors and classes.
    #[wasm_bindgen(js_name = init)]
    #[must_use]
    pub fn initialize() -> Option<Self> {
        Self::initialize_with(Selectors::default(), Classes::default())
    }

    /// Moves one slot forward. Returns `true` if the carousel moved.
    pub fn next(&self) -> bool {
        self.run(|c, now| c.next(now))
    }

    /// Moves one slot backward. Returns `true` if the carousel moved.
    #[wasm_bindgen(js_name = prev)]
    pub fn previous(&self) -> bool {
        self.run(|c, now| c.previous(now))
    }

    /// Moves to `index`, wrapping a single step out of range.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: i32) -> bool {
        let index = isize::try_from(index).unwrap_or(0);
        self.run(|c, now| c.go_to(index, now))
    }

    /// The focal slot.
    #[wasm_bindgen(js_name = getCurrentIndex)]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.shared.carousel.borrow().current_index()
    }

    /// Number of slots.
    #[wasm_bindgen(js_name = getTotalCards)]
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.shared.carousel.borrow().total_slots()
    }
}
