// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page anchors, presentation classes and attribute-based overrides.

use understory_carousel::CarouselConfig;

/// Attribute on the carousel element holding JSON [`CarouselConfig`] overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-carousel-config";

/// CSS selectors for the elements a carousel is built from.
///
/// `track` and `cards` are looked up inside `carousel`; `section` is looked up
/// in the whole document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Root element; its absence means "no carousel on this page".
    pub carousel: &'static str,
    /// Element receiving touch input. Required.
    pub track: &'static str,
    /// The cards, in ring order.
    pub cards: &'static str,
    /// Optional previous button.
    pub prev_button: &'static str,
    /// Optional next button.
    pub next_button: &'static str,
    /// Optional container for indicator dots.
    pub indicators: &'static str,
    /// Section whose visibility gates keyboard and wheel input.
    pub section: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            carousel: ".horse-carousel",
            track: ".carousel-track",
            cards: ".horse-card",
            prev_button: ".carousel-prev",
            next_button: ".carousel-next",
            indicators: ".carousel-indicators",
            section: "#games-carousel",
        }
    }
}

/// Class names written or read by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classes {
    /// Marks the focal card and the active dot.
    pub active: &'static str,
    /// Set on the section by the page's visibility observer.
    pub visible: &'static str,
    /// Base class of indicator dots.
    pub dot: &'static str,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: "active",
            visible: "is-visible",
            dot: "dot",
        }
    }
}

impl Classes {
    /// Class attribute for the dot at `index` when `current` is focal.
    #[must_use]
    pub fn dot_class(&self, index: usize, current: usize) -> String {
        if index == current {
            format!("{} {}", self.dot, self.active)
        } else {
            self.dot.to_owned()
        }
    }
}

/// Builds the configuration from an optional JSON attribute value.
///
/// Missing fields keep their defaults. Malformed JSON is logged and ignored.
#[must_use]
pub fn config_from_attribute(raw: Option<&str>) -> CarouselConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return CarouselConfig::default();
    };
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring invalid `{CONFIG_ATTRIBUTE}`: {err}");
            CarouselConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_carousel::preset::PresetTable;

    #[test]
    fn missing_or_blank_attribute_uses_defaults() {
        assert_eq!(config_from_attribute(None), CarouselConfig::default());
        assert_eq!(config_from_attribute(Some("  ")), CarouselConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config =
            config_from_attribute(Some(r#"{ "timings": { "animation": 450 }, "swipe_threshold": 30 }"#));
        assert_eq!(config.timings.animation, 450);
        assert_eq!(config.timings.click_debounce, 300);
        assert_eq!(config.timings.wheel_debounce, 500);
        assert_eq!(config.swipe_threshold, 30.0);
        assert_eq!(config.presets, PresetTable::default());
    }

    #[test]
    fn preset_overrides_replace_single_entries() {
        let config = config_from_attribute(Some(
            r#"{ "presets": { "hidden": { "transform": { "translate_x": 600, "translate_z": -500, "rotate_y": -45, "scale": 0.5 }, "opacity": 0 } } }"#,
        ));
        assert_eq!(config.presets.hidden.transform.translate_x, 600.0);
        assert_eq!(config.presets.focal, PresetTable::default().focal);
    }

    #[test]
    fn malformed_attribute_falls_back() {
        assert_eq!(
            config_from_attribute(Some("{ timings: ")),
            CarouselConfig::default()
        );
        assert_eq!(
            config_from_attribute(Some(r#"{ "swipe_threshold": "far" }"#)),
            CarouselConfig::default()
        );
    }

    #[test]
    fn dot_classes() {
        let classes = Classes::default();
        assert_eq!(classes.dot_class(0, 0), "dot active");
        assert_eq!(classes.dot_class(1, 0), "dot");
    }
}
