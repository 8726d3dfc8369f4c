//! Offset arithmetic for the slot-machine strip.
//!
//! The strip tiles the catalogue `repetitions` times side by side. A pick
//! lands on the selected marker's tile inside an interior repetition and the
//! resulting left-edge offset is converted into a translation that centers
//! that tile in the viewport. Everything here is pure so it can be tested
//! without rendering.
//!
//! Offsets are computed in whole tiles and only then scaled by the card
//! width, so the landing tile is exact regardless of float rounding.

use std::ops::Range;

use crate::constants::{MAX_REPETITIONS, MIN_REPETITIONS};

use super::PickError;

/// Layout of the tiled strip and the viewport it is shown through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    /// Width of one tile including spacing, in pixels
    pub card_width: f32,
    /// Visible width of the strip viewport, in pixels
    pub viewport_width: f32,
    /// How many times the catalogue is repeated (3 to 1000)
    pub repetitions: usize,
    /// Repetition the chosen tile is taken from; never the first or last
    pub target_repetition: usize,
}

impl StripGeometry {
    pub fn validate(&self) -> Result<(), PickError> {
        if !self.card_width.is_finite() || self.card_width <= 0.0 {
            return Err(PickError::InvalidCardWidth(self.card_width));
        }
        if self.repetitions < MIN_REPETITIONS {
            return Err(PickError::TooFewRepetitions(self.repetitions));
        }
        if self.repetitions > MAX_REPETITIONS {
            return Err(PickError::TooManyRepetitions {
                found: self.repetitions,
                max: MAX_REPETITIONS,
            });
        }
        if self.target_repetition == 0 || self.target_repetition >= self.repetitions - 1 {
            return Err(PickError::EdgeRepetition {
                target: self.target_repetition,
                repetitions: self.repetitions,
            });
        }
        Ok(())
    }

    /// Number of tiles in the strip for a catalogue of `len`, or `None` if
    /// it overflows.
    pub fn tile_count(&self, len: usize) -> Option<usize> {
        self.repetitions.checked_mul(len)
    }

    /// Total strip width in pixels.
    #[allow(dead_code)]
    pub fn extent(&self, len: usize) -> f32 {
        self.tile_count(len).map_or(0.0, |tiles| tiles as f32 * self.card_width)
    }
}

/// Where a pick comes to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLanding {
    /// Left edge of the landing tile, always in `[0, extent)`
    pub offset: f32,
    /// Translation that puts the landing tile's center at the viewport center,
    /// for the viewport width the landing was computed with
    pub centered: f32,
    /// True when the spin overshot the strip and the tile in repetition 0
    /// was used instead
    pub fell_back: bool,
}

/// Compute the landing for marker `index` of a catalogue of `len`.
///
/// `spin_lengths` is how many catalogue lengths the strip travels before
/// reaching the target repetition. Only whole lengths count: a fractional
/// length would stop the strip on a neighbour of the selected marker. Whole
/// strip lengths wrap away, so the spin is reduced modulo `repetitions`
/// before it is scaled to tiles.
///
/// When the spin plus the target position runs past the end of the strip
/// the landing falls back to the selected tile in repetition 0. That keeps
/// the offset in bounds at the cost of a shorter apparent spin for those
/// draws.
pub fn compute_landing(
    len: usize,
    index: usize,
    geometry: &StripGeometry,
    spin_lengths: f32,
) -> Result<StripLanding, PickError> {
    if len == 0 {
        return Err(PickError::EmptyCatalogue);
    }
    if index >= len {
        return Err(PickError::IndexOutOfRange { index, len });
    }
    geometry.validate()?;
    if !spin_lengths.is_finite() || spin_lengths < 0.0 {
        return Err(PickError::InvalidSpinLength(spin_lengths));
    }

    let total_tiles = geometry.tile_count(len).ok_or(PickError::StripTooLong {
        repetitions: geometry.repetitions,
        len,
    })?;
    // Both products are below `total_tiles` since target and wrapped spin
    // are less than `repetitions`.
    let target_tile = geometry.target_repetition * len + index;
    let wrapped_tiles = (spin_lengths.trunc() as usize % geometry.repetitions) * len;

    let (landing_tile, fell_back) = match wrapped_tiles.checked_add(target_tile) {
        Some(tile) if tile < total_tiles => (tile, false),
        _ => (index, true),
    };

    let offset = landing_tile as f32 * geometry.card_width;
    Ok(StripLanding {
        offset,
        centered: centering_offset(offset, geometry.card_width, geometry.viewport_width),
        fell_back,
    })
}

/// Translation that centers the tile starting at `offset` in the viewport.
///
/// Applied at render time against the current viewport width, so a resize
/// mid-spin still stops on the pointer.
pub fn centering_offset(offset: f32, card_width: f32, viewport_width: f32) -> f32 {
    (offset + card_width / 2.0) - viewport_width / 2.0
}

/// Catalogue index of the tile under the viewport center for a translation.
///
/// `None` for an empty catalogue or an unusable card width or translation.
pub fn decode_index(
    centered: f32,
    len: usize,
    card_width: f32,
    viewport_width: f32,
) -> Option<usize> {
    if len == 0 || !card_width.is_finite() || card_width <= 0.0 || !centered.is_finite() {
        return None;
    }
    let tile = ((centered + viewport_width / 2.0 - card_width / 2.0) / card_width).round();
    Some((tile as i64).rem_euclid(len as i64) as usize)
}

/// Ease-out cubic: fast start, slow settle. Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Tiles that intersect the viewport at a given translation.
pub fn visible_tiles(translation: f32, geometry: &StripGeometry, len: usize) -> Range<usize> {
    let Some(total) = geometry.tile_count(len) else {
        return 0..0;
    };
    if total == 0 || geometry.card_width <= 0.0 {
        return 0..0;
    }

    let first = (translation / geometry.card_width).floor().max(0.0) as usize;
    let last = ((translation + geometry.viewport_width) / geometry.card_width)
        .ceil()
        .max(0.0) as usize;

    first.min(total)..last.min(total)
}
