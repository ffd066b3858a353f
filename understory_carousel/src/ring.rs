// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index arithmetic on a ring of `len` slots.
//!
//! The ring is never materialized; these helpers only map indices.

/// Returns the signed shortest-path distance from `current` to `slot`.
///
/// The raw difference `slot - current` is shifted by `len` when it lies more
/// than half a ring away, so the result falls in `[-len/2, len/2]`. For even
/// rings the exactly-opposite slot keeps its raw sign.
///
/// ```
/// use understory_carousel::ring::centered_offset;
///
/// assert_eq!(centered_offset(4, 2, 5), 2);
/// assert_eq!(centered_offset(4, 0, 5), -1);
/// assert_eq!(centered_offset(0, 4, 5), 1);
/// ```
#[must_use]
pub fn centered_offset(slot: usize, current: usize, len: usize) -> isize {
    let len = len as isize;
    let mut offset = slot as isize - current as isize;
    // Compare against len / 2 without truncating odd lengths.
    if 2 * offset > len {
        offset -= len;
    }
    if 2 * offset < -len {
        offset += len;
    }
    offset
}

/// Normalizes a navigation target by a single step of wrap-around.
///
/// Negative targets land on the last slot and targets at or past `len` land
/// on the first; everything else is returned unchanged. This is exactly what
/// stepping one slot from a valid index needs, and what an in-range explicit
/// index needs. It is deliberately not a general modulo: `-3` on a ring of 10
/// goes to `9`, not `7`.
///
/// `len` must be at least 1.
///
/// ```
/// use understory_carousel::ring::wrap_target;
///
/// assert_eq!(wrap_target(-1, 5), 4);
/// assert_eq!(wrap_target(5, 5), 0);
/// assert_eq!(wrap_target(3, 5), 3);
/// ```
#[must_use]
pub fn wrap_target(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "a ring must have at least one slot");
    match usize::try_from(index) {
        Err(_) => len - 1,
        Ok(i) if i >= len => 0,
        Ok(i) => i,
    }
}

/// Returns the slot one step from `current` in the given direction, wrapping.
#[must_use]
pub fn step(current: usize, forward: bool, len: usize) -> usize {
    let target = if forward {
        current as isize + 1
    } else {
        current as isize - 1
    };
    wrap_target(target, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_centered_for_odd_rings() {
        // N = 5, current = 2: slots 0..5 sit at -2..=2.
        let offsets: [isize; 5] = core::array::from_fn(|k| centered_offset(k, 2, 5));
        assert_eq!(offsets, [-2, -1, 0, 1, 2]);

        // N = 5, current = 0: slot 4 is one step to the left, slot 3 two.
        let offsets: [isize; 5] = core::array::from_fn(|k| centered_offset(k, 0, 5));
        assert_eq!(offsets, [0, 1, 2, -2, -1]);
    }

    #[test]
    fn opposite_slot_on_even_ring_keeps_raw_sign() {
        assert_eq!(centered_offset(2, 0, 4), 2);
        assert_eq!(centered_offset(0, 2, 4), -2);
        assert_eq!(centered_offset(3, 0, 4), -1);
    }

    #[test]
    fn offsets_stay_within_half_ring() {
        for len in 1..=12_usize {
            for current in 0..len {
                for slot in 0..len {
                    let offset = centered_offset(slot, current, len);
                    assert!(
                        2 * offset.unsigned_abs() <= len,
                        "offset {offset} out of range for len {len}"
                    );
                    // The offset must still point at the same slot.
                    let back = (current as isize + offset).rem_euclid(len as isize);
                    assert_eq!(back as usize, slot);
                }
            }
        }
    }

    #[test]
    fn single_slot_ring_is_always_focal() {
        assert_eq!(centered_offset(0, 0, 1), 0);
        assert_eq!(step(0, true, 1), 0);
        assert_eq!(step(0, false, 1), 0);
    }

    #[test]
    fn wrap_is_single_step() {
        assert_eq!(wrap_target(-1, 10), 9);
        assert_eq!(wrap_target(-3, 10), 9);
        assert_eq!(wrap_target(10, 10), 0);
        assert_eq!(wrap_target(25, 10), 0);
        assert_eq!(wrap_target(7, 10), 7);
    }

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(step(4, true, 5), 0);
        assert_eq!(step(0, false, 5), 4);
        assert_eq!(step(2, true, 5), 3);
    }
}
