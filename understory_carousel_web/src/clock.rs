// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host time for the navigator.

/// Converts a `performance.now()` reading to whole milliseconds.
///
/// `performance.now()` is monotonic and measured from page load, so
/// successive conversions never decrease even if the system clock is stepped.
/// Negative and NaN readings map to `0`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Float-to-int casts saturate; sub-millisecond precision is dropped on purpose."
)]
#[must_use]
pub fn timestamp_millis(raw: f64) -> u64 {
    raw as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_carousel::{Ignored, Navigator, Outcome, Timings};

    #[test]
    fn readings_truncate_to_milliseconds() {
        assert_eq!(timestamp_millis(0.0), 0);
        assert_eq!(timestamp_millis(1_234.999), 1_234);
        assert_eq!(timestamp_millis(-3.0), 0);
        assert_eq!(timestamp_millis(f64::NAN), 0);
    }

    #[test]
    fn increasing_readings_never_decrease() {
        let readings = [0.1, 0.9, 16.67, 16.7, 33.33, 1_000.0, 1_000.000_1];
        let millis: Vec<u64> = readings.iter().copied().map(timestamp_millis).collect();
        assert!(millis.windows(2).all(|w| w[0] <= w[1]), "{millis:?}");
    }

    #[test]
    fn animation_lock_releases_on_page_timeline() {
        let mut nav = Navigator::new(5, &Timings::default()).unwrap();
        assert_eq!(
            nav.next(timestamp_millis(1_000.4)),
            Outcome::Moved { from: 0, to: 1 }
        );
        assert_eq!(
            nav.next(timestamp_millis(1_599.9)),
            Outcome::Ignored(Ignored::Animating)
        );
        assert_eq!(nav.next_deadline(), Some(1_600));
        assert_eq!(
            nav.next(timestamp_millis(1_600.2)),
            Outcome::Moved { from: 1, to: 2 }
        );
    }
}
