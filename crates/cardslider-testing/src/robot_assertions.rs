//! Assertion helpers for slider layouts.

use cardslider_layout::{CardSlot, Geometry};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Attached cards form one contiguous, ascending index range.
pub fn assert_contiguous<C>(slots: &[CardSlot<C>]) {
    for pair in slots.windows(2) {
        assert_eq!(
            pair[0].index() + 1,
            pair[1].index(),
            "window has a hole between {} and {}",
            pair[0].index(),
            pair[1].index()
        );
    }
}

/// Cards never leave `[0, +inf)` and never overtake each other.
pub fn assert_ordered<C>(slots: &[CardSlot<C>]) {
    for slot in slots {
        assert!(slot.left() >= 0, "card {} at {}px", slot.index(), slot.left());
    }
    for pair in slots.windows(2) {
        assert!(
            pair[0].left() <= pair[1].left(),
            "card {} at {}px is right of card {} at {}px",
            pair[0].index(),
            pair[0].left(),
            pair[1].index(),
            pair[1].left()
        );
    }
}

/// Cards right of the active slot sit edge to edge.
pub fn assert_right_run_edge_to_edge<C>(geometry: &Geometry, slots: &[CardSlot<C>]) {
    let run: Vec<&CardSlot<C>> = slots
        .iter()
        .filter(|slot| slot.left() >= geometry.active_card_right())
        .collect();

    for pair in run.windows(2) {
        assert_eq!(
            pair[0].right(geometry.card_width()),
            pair[1].left(),
            "cards {} and {} are not edge to edge",
            pair[0].index(),
            pair[1].index()
        );
    }
}

/// The slider is at rest: `active` sits at `active_card_left`, its
/// predecessors at the left-stack resting positions and its successors
/// edge to edge from `active_card_right`.
pub fn assert_settled_on<C>(geometry: &Geometry, slots: &[CardSlot<C>], active: usize) {
    for slot in slots {
        let expected = geometry.resting_left(active, slot.index());
        assert_eq!(
            slot.left(),
            expected,
            "card {} is not at rest around {}",
            slot.index(),
            active
        );
    }
}
