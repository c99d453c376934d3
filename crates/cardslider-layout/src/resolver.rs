//! Which attached card is "the" card.

use crate::view_updater::zone_scale;
use crate::{CardSlot, Geometry};

/// Index of the active card: among the cards left of the active center, the
/// one with the largest scale. Ties go to the lower index.
///
/// Returns `None` when no attached card qualifies, including when nothing is
/// attached at all.
pub fn active_index<C>(geometry: &Geometry, slots: &[CardSlot<C>]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for slot in slots {
        let left = slot.left();
        if left >= geometry.active_card_right() || left >= geometry.active_card_center() {
            continue;
        }

        let scale = zone_scale(geometry, left);
        if best.map_or(true, |(_, best_scale)| best_scale < scale) {
            best = Some((slot.index(), scale));
        }
    }

    if best.is_none() {
        if let Some(first) = slots.first() {
            log::warn!(
                "no card left of the active center (first attached {} at {}px)",
                first.index(),
                first.left()
            );
        }
    }
    best.map(|(index, _)| index)
}

/// Position in `slots` of the card nearest to the active slot from the
/// right: the one to settle when the slider comes to rest.
///
/// A card resting exactly at `active_card_left` does not count, so a settled
/// slider has no top view.
pub fn top_view<C>(geometry: &Geometry, slots: &[CardSlot<C>]) -> Option<usize> {
    let mut best_distance = geometry.card_width();
    let mut top = None;

    for (position, slot) in slots.iter().enumerate() {
        if slot.left() >= geometry.active_card_right() {
            continue;
        }

        let distance = geometry.active_card_right() - slot.left();
        if distance < best_distance {
            best_distance = distance;
            top = Some(position);
        }
    }

    top
}
