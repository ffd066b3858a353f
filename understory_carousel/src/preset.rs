// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual presets: the fixed 3D placements a card can take around the ring.
//!
//! Placement is a table lookup on the card's centered offset from the focal
//! slot. Offsets in `-2..=2` map to one of five named presets; anything further
//! out falls into the hidden bucket, which is stored for the right-hand side
//! and mirrored for negative offsets.
//!
//! ```
//! use understory_carousel::preset::{PresetKind, PresetTable};
//!
//! let table = PresetTable::default();
//! let (kind, preset) = table.resolve(-1);
//! assert_eq!(kind, PresetKind::NearLeft);
//! assert_eq!(
//!     preset.transform.to_string(),
//!     "translateX(-200px) translateZ(-120px) rotateY(20deg) scale(0.88)"
//! );
//!
//! // Far-away cards on the left reuse the hidden preset, mirrored.
//! let (kind, preset) = table.resolve(-3);
//! assert_eq!(kind, PresetKind::HiddenLeft);
//! assert_eq!(preset.transform.translate_x, -450.0);
//! assert_eq!(preset.transform.rotate_y, 40.0);
//! ```

use core::fmt;

/// A CSS-style 3D placement: X/Z translation, rotation about Y, uniform scale.
///
/// Translations are in logical pixels, rotation in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform3d {
    /// Horizontal translation.
    pub translate_x: f64,
    /// Depth translation; negative values push the card away from the viewer.
    pub translate_z: f64,
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Transform3d {
    /// The untransformed placement.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a transform from its components.
    #[must_use]
    pub const fn new(translate_x: f64, translate_z: f64, rotate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_z,
            rotate_y,
            scale,
        }
    }

    /// Mirrors the transform across the vertical axis.
    ///
    /// Negates the X translation and the Y rotation; depth and scale are kept.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            translate_x: negate(self.translate_x),
            rotate_y: negate(self.rotate_y),
            ..self
        }
    }
}

impl Default for Transform3d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Formats as a CSS `transform` value.
impl fmt::Display for Transform3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}px) translateZ({}px) rotateY({}deg) scale({})",
            self.translate_x, self.translate_z, self.rotate_y, self.scale
        )
    }
}

// Keeps mirrored zeros from printing as `-0`.
fn negate(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { -v }
}

/// A transform plus opacity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preset {
    /// Placement of the card.
    pub transform: Transform3d,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl Preset {
    /// Creates a preset.
    #[must_use]
    pub const fn new(transform: Transform3d, opacity: f64) -> Self {
        Self { transform, opacity }
    }
}

/// Named placement buckets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// Offset `0`: the centered, active card.
    Focal,
    /// Offset `+1`.
    NearRight,
    /// Offset `-1`.
    NearLeft,
    /// Offset `+2`.
    FarRight,
    /// Offset `-2`.
    FarLeft,
    /// Offset `> 2`.
    HiddenRight,
    /// Offset `< -2`.
    HiddenLeft,
}

/// Buckets for offsets `-2..=2`, indexed by `offset + 2`.
const NEAR_BUCKETS: [PresetKind; 5] = [
    PresetKind::FarLeft,
    PresetKind::NearLeft,
    PresetKind::Focal,
    PresetKind::NearRight,
    PresetKind::FarRight,
];

impl PresetKind {
    /// Picks the bucket for a centered offset.
    #[must_use]
    pub fn for_offset(offset: isize) -> Self {
        match offset.checked_add(2).and_then(|i| usize::try_from(i).ok()) {
            Some(i) if i < NEAR_BUCKETS.len() => NEAR_BUCKETS[i],
            _ if offset > 0 => Self::HiddenRight,
            _ => Self::HiddenLeft,
        }
    }

    /// Returns `true` for the hidden buckets.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::HiddenLeft | Self::HiddenRight)
    }
}

/// The full set of presets used to place cards.
///
/// `hidden` describes the right-hand hidden placement; the left-hand one is
/// derived with [`Transform3d::mirrored`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresetTable {
    /// Offset `0`.
    pub focal: Preset,
    /// Offset `+1`.
    pub near_right: Preset,
    /// Offset `-1`.
    pub near_left: Preset,
    /// Offset `+2`.
    pub far_right: Preset,
    /// Offset `-2`.
    pub far_left: Preset,
    /// Offsets beyond `+2`; mirrored for offsets beyond `-2`.
    pub hidden: Preset,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self {
            focal: Preset::new(Transform3d::IDENTITY, 1.0),
            near_right: Preset::new(Transform3d::new(200.0, -120.0, -20.0, 0.88), 0.8),
            near_left: Preset::new(Transform3d::new(-200.0, -120.0, 20.0, 0.88), 0.8),
            far_right: Preset::new(Transform3d::new(350.0, -250.0, -30.0, 0.75), 0.5),
            far_left: Preset::new(Transform3d::new(-350.0, -250.0, 30.0, 0.75), 0.5),
            hidden: Preset::new(Transform3d::new(450.0, -400.0, -40.0, 0.6), 0.0),
        }
    }
}

impl PresetTable {
    /// Returns the preset for a bucket.
    #[must_use]
    pub fn get(&self, kind: PresetKind) -> Preset {
        match kind {
            PresetKind::Focal => self.focal,
            PresetKind::NearRight => self.near_right,
            PresetKind::NearLeft => self.near_left,
            PresetKind::FarRight => self.far_right,
            PresetKind::FarLeft => self.far_left,
            PresetKind::HiddenRight => self.hidden,
            PresetKind::HiddenLeft => Preset {
                transform: self.hidden.transform.mirrored(),
                ..self.hidden
            },
        }
    }

    /// Resolves a centered offset to its bucket and preset.
    #[must_use]
    pub fn resolve(&self, offset: isize) -> (PresetKind, Preset) {
        let kind = PresetKind::for_offset(offset);
        (kind, self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn buckets_cover_near_offsets() {
        assert_eq!(PresetKind::for_offset(0), PresetKind::Focal);
        assert_eq!(PresetKind::for_offset(1), PresetKind::NearRight);
        assert_eq!(PresetKind::for_offset(-1), PresetKind::NearLeft);
        assert_eq!(PresetKind::for_offset(2), PresetKind::FarRight);
        assert_eq!(PresetKind::for_offset(-2), PresetKind::FarLeft);
    }

    #[test]
    fn far_offsets_fall_into_hidden_by_sign() {
        assert_eq!(PresetKind::for_offset(3), PresetKind::HiddenRight);
        assert_eq!(PresetKind::for_offset(17), PresetKind::HiddenRight);
        assert_eq!(PresetKind::for_offset(-3), PresetKind::HiddenLeft);
        assert_eq!(PresetKind::for_offset(isize::MIN), PresetKind::HiddenLeft);
        assert_eq!(PresetKind::for_offset(isize::MAX), PresetKind::HiddenRight);
        assert!(PresetKind::for_offset(-4).is_hidden());
        assert!(!PresetKind::for_offset(2).is_hidden());
    }

    #[test]
    fn hidden_left_mirrors_hidden_right() {
        let table = PresetTable::default();
        let right = table.get(PresetKind::HiddenRight);
        let left = table.get(PresetKind::HiddenLeft);

        assert_eq!(right.transform, Transform3d::new(450.0, -400.0, -40.0, 0.6));
        assert_eq!(left.transform, Transform3d::new(-450.0, -400.0, 40.0, 0.6));
        assert_eq!(left.opacity, 0.0);
    }

    #[test]
    fn css_formatting() {
        let table = PresetTable::default();
        assert_eq!(
            table.focal.transform.to_string(),
            "translateX(0px) translateZ(0px) rotateY(0deg) scale(1)"
        );
        assert_eq!(
            table.far_right.transform.to_string(),
            "translateX(350px) translateZ(-250px) rotateY(-30deg) scale(0.75)"
        );
        assert_eq!(
            table.get(PresetKind::HiddenLeft).transform.to_string(),
            "translateX(-450px) translateZ(-400px) rotateY(40deg) scale(0.6)"
        );
    }

    #[test]
    fn mirroring_zero_does_not_produce_negative_zero() {
        let mirrored = Transform3d::IDENTITY.mirrored();
        assert_eq!(
            mirrored.to_string(),
            "translateX(0px) translateZ(0px) rotateY(0deg) scale(1)"
        );
    }
}
