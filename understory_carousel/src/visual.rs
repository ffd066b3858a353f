// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived per-slot visuals.
//!
//! Nothing here is stored between frames: a [`Snapshot`] is a pure function of
//! the focal index, the ring length and the preset table, and recomputing it for
//! unchanged inputs yields an equal value.

use alloc::vec::Vec;

use crate::preset::{PresetKind, PresetTable, Transform3d};
use crate::ring::centered_offset;

/// How one slot should be presented.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotVisual {
    /// Index of the slot in the ring.
    pub slot: usize,
    /// Centered offset from the focal slot.
    pub offset: isize,
    /// Bucket the offset fell into.
    pub preset: PresetKind,
    /// Placement to apply.
    pub transform: Transform3d,
    /// Opacity to apply.
    pub opacity: f64,
    /// Stacking order; larger is closer to the viewer. Equals `len - |offset|`.
    pub stack_order: usize,
    /// `true` only for the focal slot.
    pub is_focal: bool,
}

impl SlotVisual {
    /// Computes the visual for `slot` on a ring of `len` focused on `current`.
    #[must_use]
    pub fn compute(slot: usize, current: usize, len: usize, presets: &PresetTable) -> Self {
        let offset = centered_offset(slot, current, len);
        let (kind, preset) = presets.resolve(offset);
        Self {
            slot,
            offset,
            preset: kind,
            transform: preset.transform,
            opacity: preset.opacity,
            stack_order: len - offset.unsigned_abs(),
            is_focal: offset == 0,
        }
    }
}

/// Visuals for every slot plus the indicator-dot flags for one navigator state.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    current: usize,
    slots: Vec<SlotVisual>,
}

impl Snapshot {
    /// Computes the snapshot for a ring of `len` slots focused on `current`.
    #[must_use]
    pub fn compute(current: usize, len: usize, presets: &PresetTable) -> Self {
        let slots = (0..len)
            .map(|slot| SlotVisual::compute(slot, current, len, presets))
            .collect();
        Self { current, slots }
    }

    /// The focal slot.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Visuals in slot order.
    #[must_use]
    pub fn slots(&self) -> &[SlotVisual] {
        &self.slots
    }

    /// Visual for one slot.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&SlotVisual> {
        self.slots.get(index)
    }

    /// Whether the indicator dot for `index` should be marked active.
    #[must_use]
    pub fn is_indicator_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Indicator flags in slot order; exactly one is `true`.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.slots.len()).map(|i| self.is_indicator_active(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focal_slot_is_on_top() {
        let presets = PresetTable::default();
        let snapshot = Snapshot::compute(3, 7, &presets);

        let focal = snapshot.slot(3).unwrap();
        assert!(focal.is_focal);
        assert_eq!(focal.preset, PresetKind::Focal);
        assert_eq!(focal.stack_order, 7);
        assert_eq!(focal.opacity, 1.0);

        let max = snapshot.slots().iter().map(|v| v.stack_order).max();
        assert_eq!(max, Some(7));
        assert_eq!(snapshot.slots().iter().filter(|v| v.is_focal).count(), 1);
    }

    #[test]
    fn symmetric_neighbours_share_stack_order() {
        let presets = PresetTable::default();
        let snapshot = Snapshot::compute(0, 6, &presets);

        // Slot 1 is +1, slot 5 is -1.
        assert_eq!(snapshot.slot(1).unwrap().preset, PresetKind::NearRight);
        assert_eq!(snapshot.slot(5).unwrap().preset, PresetKind::NearLeft);
        assert_eq!(
            snapshot.slot(1).unwrap().stack_order,
            snapshot.slot(5).unwrap().stack_order
        );

        // Slot 3 is exactly opposite on an even ring and stays on the right.
        let opposite = snapshot.slot(3).unwrap();
        assert_eq!(opposite.offset, 3);
        assert_eq!(opposite.preset, PresetKind::HiddenRight);
        assert_eq!(opposite.stack_order, 3);
    }

    #[test]
    fn indicators_flag_only_current() {
        let presets = PresetTable::default();
        let snapshot = Snapshot::compute(2, 4, &presets);
        let flags: Vec<bool> = snapshot.indicators().collect();
        assert_eq!(flags, [false, false, true, false]);
        assert!(!snapshot.is_indicator_active(9));
    }

    #[test]
    fn compute_is_idempotent() {
        let presets = PresetTable::default();
        assert_eq!(
            Snapshot::compute(1, 9, &presets),
            Snapshot::compute(1, 9, &presets)
        );
    }
}
