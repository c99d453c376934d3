//! Snapping: where a fling lands and how the slider comes to rest.

use cardslider_animation::{FlingCalculator, FlingDistanceEstimator, Interpolator};

use crate::gesture_constants::{MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
use crate::{CardProvider, CardSliderLayoutManager, Geometry, ViewUpdater};

/// A fling never jumps further than this many cards.
pub const MAX_FLING_JUMP: i64 = 3;

/// Snap controller for a [`CardSliderLayoutManager`].
///
/// The host calls [`on_fling`](Self::on_fling) when the finger is released
/// with some velocity, and [`on_scroll_idle`](Self::on_scroll_idle) once a
/// drag or a free fling has come to rest.
#[derive(Debug, Clone, Default)]
pub struct CardSnapHelper<E = FlingCalculator> {
    estimator: E,
}

impl CardSnapHelper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> CardSnapHelper<E>
where
    E: FlingDistanceEstimator,
{
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Card a fling at `velocity_x` should land on, or `None` when the fling
    /// is too weak to leave the active card.
    pub fn pick_target(
        &self,
        geometry: &Geometry,
        active: Option<usize>,
        item_count: usize,
        velocity_x: f32,
    ) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        let active = active?;
        let vector_to_end = (item_count - 1) as i64 - active as i64;

        let distance = self.estimator.fling_distance(velocity_x) as i64;
        let mut jump = (distance / geometry.card_width() as i64).clamp(-MAX_FLING_JUMP, MAX_FLING_JUMP);
        if vector_to_end < 0 {
            jump = -jump;
        }
        if jump == 0 {
            return None;
        }

        let target = (active as i64 + jump).clamp(0, item_count as i64 - 1) as usize;
        log::debug!("fling distance {distance}px from {active}: jump {jump} to {target}");
        Some(target)
    }

    /// Starts a smooth scroll to the fling target. Returns `false` when the
    /// fling is left to the host: too slow, or no target.
    pub fn on_fling<C, U, P>(
        &self,
        manager: &mut CardSliderLayoutManager<C, U>,
        provider: &P,
        velocity_x: f32,
        velocity_y: f32,
    ) -> bool
    where
        U: ViewUpdater<C>,
        P: CardProvider<Card = C> + ?Sized,
    {
        if velocity_x.abs() <= MIN_FLING_VELOCITY && velocity_y.abs() <= MIN_FLING_VELOCITY {
            return false;
        }

        let velocity_x = velocity_x.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        let Some(target) = self.pick_target(
            manager.geometry(),
            manager.active_card_position(),
            provider.item_count(),
            velocity_x,
        ) else {
            return false;
        };

        manager.smooth_scroll_to_position(target, provider);
        true
    }

    /// Settles the top view once scrolling has stopped. Returns `true` if a
    /// settle animation was started.
    ///
    /// Without a top view the active card should already rest on the active
    /// slot; any leftover offset is corrected in place.
    pub fn on_scroll_idle<C, U>(&self, manager: &mut CardSliderLayoutManager<C, U>) -> bool
    where
        U: ViewUpdater<C>,
    {
        let Some((index, left)) = manager.top_view().map(|top| (top.index(), top.left())) else {
            if manager.restack_in_place() {
                log::warn!("active card was left off its slot, restacked without animation");
            }
            return false;
        };

        let dx = distance_to_settle(
            manager.geometry(),
            index,
            left,
            manager.active_card_position(),
        );
        if dx == 0 {
            return false;
        }

        // Past the center the top view falls back into the right stack and
        // its predecessor takes the active slot.
        let target = if left < manager.geometry().active_card_center() {
            Some(index)
        } else {
            index.checked_sub(1)
        };
        manager.settle_by(dx, Interpolator::Accelerate, target);
        true
    }
}

/// Content delta that brings the card `index` at `left` to rest.
///
/// A card left of the active center settles into the active slot: it is
/// pulled back to `active_card_left`, or jumps whole cards when it is not the
/// active card. A card right of the center settles into the right stack.
pub fn distance_to_settle(
    geometry: &Geometry,
    index: usize,
    left: i32,
    active: Option<usize>,
) -> i32 {
    if left >= geometry.active_card_center() {
        return left - geometry.active_card_right();
    }

    match active {
        Some(active) if active != index => {
            let cards = active as i64 - index as i64;
            let dx = cards.saturating_mul(geometry.card_width() as i64).saturating_neg();
            dx.clamp(i32::MIN as i64, i32::MAX as i64) as i32
        }
        _ => left - geometry.active_card_left(),
    }
}

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod tests;
