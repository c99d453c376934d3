//! Scroll engine: turns one horizontal delta into per-card moves.
//!
//! `dx > 0` moves content left, revealing later cards; `dx < 0` moves it
//! right, revealing earlier ones. Cards to the right of the active slot move
//! with the content. Cards in the left stack move proportionally slower so
//! they pile up into the stack's resting positions instead of sliding off.
//!
//! Slots are expected in ascending index order, as kept by the window.

use crate::{CardSlot, Geometry};

/// Applies `dx` to the attached cards and returns the delta actually
/// consumed. The result has the sign of `dx` and is never larger in
/// magnitude; a rightward move is additionally limited to one card width per
/// call.
pub fn scroll_by<C>(
    geometry: &Geometry,
    slots: &mut [CardSlot<C>],
    item_count: usize,
    dx: i32,
) -> i32 {
    match dx {
        0 => 0,
        dx if dx < 0 => scroll_right(geometry, slots, dx.max(-geometry.card_width())),
        dx => scroll_left(geometry, slots, item_count, dx),
    }
}

/// Offset for a rightward move of `dx` (negative) that stops at `border`.
/// The card is moved by the negation of the result.
#[inline]
fn allowed_right_delta(left: i32, dx: i32, border: i32) -> i32 {
    if left + dx.abs() < border {
        dx
    } else {
        left - border
    }
}

/// Offset for a leftward move of `dx` (positive) that stops at `border`.
#[inline]
fn allowed_left_delta(left: i32, dx: i32, border: i32) -> i32 {
    if left - dx > border {
        -dx
    } else {
        border - left
    }
}

/// Puts `active` and every card before it on their resting positions.
/// Called when a card lands exactly on a slot edge, the only moment the
/// stack positions are known without rounding.
fn restack<C>(geometry: &Geometry, slots: &mut [CardSlot<C>], active: usize) {
    for slot in slots.iter_mut().take_while(|slot| slot.index <= active) {
        slot.left = geometry.resting_left(active, slot.index);
    }
}

/// Rightward move, split so the frontmost left-group card never crosses
/// `active_card_right` within a single pass: the card behind it starts
/// leaving the stack exactly when the front card joins the right stack.
fn scroll_right<C>(geometry: &Geometry, slots: &mut [CardSlot<C>], dx: i32) -> i32 {
    let mut consumed = 0;
    while consumed > dx {
        let step = scroll_right_pass(geometry, slots, dx - consumed);
        if step == 0 {
            break;
        }
        consumed += step;
    }
    consumed
}

fn scroll_right_pass<C>(geometry: &Geometry, slots: &mut [CardSlot<C>], dx: i32) -> i32 {
    let Some(last) = slots.last() else {
        return 0;
    };

    // Right-stack membership is decided before anything moves.
    let right_stack = slots
        .iter()
        .filter(|slot| slot.left >= geometry.active_card_right())
        .count();
    let split = slots.len() - right_stack;

    // A front card still inside the stack first lands on the active slot.
    let landing = split.checked_sub(1).map(|front| {
        let slot = &slots[front];
        if slot.left < geometry.active_card_left() {
            (front, geometry.active_card_left(), slot.index)
        } else {
            (front, geometry.active_card_right(), slot.index.saturating_sub(1))
        }
    });
    let dx = match landing {
        Some((front, edge, _)) => dx.max(slots[front].left - edge),
        None => dx,
    };
    let delta = allowed_right_delta(last.left, dx, geometry.uncompressed_left(last.index));

    // Left-stack cards travel one stack step per card width of content.
    let step = geometry.left_stack_step();
    let stack_delta = (delta as i64 * step as i64).div_euclid(geometry.card_width() as i64) as i32;

    for slot in slots[split..].iter_mut() {
        let border = geometry.uncompressed_left(slot.index);
        let offset = allowed_right_delta(slot.left, dx, border);
        slot.offset(-offset);
    }

    // The frontmost card left of the right stack leaves with the content;
    // the ones behind it restack one resting position at a time.
    let mut left_group = slots[..split].iter_mut().rev();
    if let Some(front) = left_group.next() {
        let offset = allowed_right_delta(front.left, dx, geometry.uncompressed_left(front.index));
        front.offset(-offset);
    }
    for (depth, slot) in left_group.enumerate() {
        let border = geometry.active_card_left() - step * depth as i32;
        let offset = allowed_right_delta(slot.left, stack_delta, border);
        slot.offset(-offset);
    }

    if let Some((front, edge, active)) = landing {
        if slots[front].left == edge {
            restack(geometry, slots, active);
        }
    }

    delta
}

/// Leftward move, split so the first card right of the active slot lands
/// on `active_card_left` exactly before the stack starts compressing it.
fn scroll_left<C>(
    geometry: &Geometry,
    slots: &mut [CardSlot<C>],
    item_count: usize,
    dx: i32,
) -> i32 {
    let mut consumed = 0;
    while consumed < dx {
        let step = scroll_left_pass(geometry, slots, item_count, dx - consumed);
        if step == 0 {
            break;
        }
        consumed += step;
    }
    consumed
}

fn scroll_left_pass<C>(
    geometry: &Geometry,
    slots: &mut [CardSlot<C>],
    item_count: usize,
    dx: i32,
) -> i32 {
    let Some(last) = slots.last() else {
        return 0;
    };

    let delta = if last.index + 1 == item_count {
        let slack = last.right(geometry.card_width()) - geometry.active_card_right();
        dx.min(slack).max(0)
    } else {
        dx
    };

    let incoming = slots
        .iter()
        .position(|slot| slot.left > geometry.active_card_left());
    let delta = match incoming {
        Some(i) => delta.min(slots[i].left - geometry.active_card_left()),
        None => delta,
    };

    let step = geometry.left_stack_step();
    let width = geometry.card_width() as i64;
    let stack_delta = (delta as i64 * step as i64 + width - 1).div_euclid(width) as i32;

    for i in (0..slots.len()).rev() {
        let left = slots[i].left;
        if left > geometry.active_card_left() {
            slots[i].offset(allowed_left_delta(left, delta, geometry.active_card_left()));
            continue;
        }

        let mut border = geometry.active_card_left() - step;
        for slot in slots[..=i].iter_mut().rev() {
            let offset = allowed_left_delta(slot.left, stack_delta, border.max(0));
            slot.offset(offset);
            border -= step;
        }
        break;
    }

    if let Some(i) = incoming {
        if delta > 0 && slots[i].left == geometry.active_card_left() {
            let active = slots[i].index;
            restack(geometry, slots, active);
        }
    }

    delta
}
