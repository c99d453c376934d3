//! Animated scroll toward a target index.
//!
//! While the target card is not attached the scroller seeks in the
//! direction of the scroll vector with a long linear tween. As soon as the
//! card shows up, the remaining distance is computed from its position and
//! played out with a decelerating tween.

use cardslider_animation::{Interpolator, ScrollTween};
use web_time::Duration;

use crate::resolver::top_view;
use crate::{CardSlot, Geometry};

/// Milliseconds per pixel for a smooth scroll.
pub const MILLISECONDS_PER_PX: f32 = 0.5;

/// Distance covered by one seek tween while the target is not attached.
pub const TARGET_SEEK_SCROLL_DISTANCE_PX: i32 = 10_000;

/// Seek tweens run slower than the per-pixel speed.
const TARGET_SEEK_EXTRA_SCROLL_RATIO: f32 = 1.2;

/// Share of a decelerate tween's duration that covers the first half of a
/// linear one at the same speed.
const DECELERATION_TIME_FACTOR: f32 = 0.3356;

/// Time to scroll `dx` pixels at constant speed.
pub fn time_for_scrolling(dx: i32) -> Duration {
    let millis = (dx.unsigned_abs() as f32 * MILLISECONDS_PER_PX).ceil();
    Duration::from_millis(millis as u64)
}

/// Time to scroll `dx` pixels with the decelerate interpolator.
pub fn time_for_deceleration(dx: i32) -> Duration {
    let linear = time_for_scrolling(dx).as_millis() as f32;
    Duration::from_millis((linear / DECELERATION_TIME_FACTOR).ceil() as u64)
}

/// Upper bound for [`scroll_by_duration`].
pub const MAX_SCROLL_DURATION: Duration = Duration::from_millis(2_000);

/// Duration of an animated scroll by `dx` inside a viewport `viewport_width`
/// wide: 300 ms plus 300 ms per viewport width travelled.
pub fn scroll_by_duration(dx: i32, viewport_width: i32) -> Duration {
    if viewport_width <= 0 {
        return MAX_SCROLL_DURATION;
    }

    let viewports = dx.unsigned_abs() as f32 / viewport_width as f32;
    let millis = ((viewports + 1.0) * 300.0) as u64;
    Duration::from_millis(millis).min(MAX_SCROLL_DURATION)
}

/// Offset that brings the attached card `target` to the active slot.
///
/// A card right of the active slot only needs its `left` pulled back to
/// `active_card_left`. A card in the left stack is brought forward one card
/// width per step from the current top view, or from the card resting at
/// `active_card_left` when the slider is settled. The returned offset is in
/// position space: the content delta to scroll by is its negation. `None`
/// when `target` is not attached.
pub fn calculate_dx_to_make_visible<C>(
    geometry: &Geometry,
    slots: &[CardSlot<C>],
    target: usize,
) -> Option<i32> {
    let view = slots.iter().find(|slot| slot.index() == target)?;
    if view.left() > geometry.active_card_left() {
        return Some(geometry.active_card_left() - view.left());
    }

    let mut delta = 0;
    let mut top_index = 0usize;
    let top = top_view(geometry, slots).or_else(|| {
        slots
            .iter()
            .position(|slot| slot.left() == geometry.active_card_left())
    });
    if let Some(top) = top.map(|position| &slots[position]) {
        top_index = top.index();
        let top_left = top.left();
        if top_index != target
            && top_left >= geometry.active_card_left()
            && top_left < geometry.active_card_right()
        {
            delta = geometry.active_card_right() - top_left;
        }
    }

    let whole_cards = top_index.saturating_sub(target).saturating_sub(1) as i32;
    Some(delta + geometry.card_width() * whole_cards)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Seeking(ScrollTween),
    Approaching(ScrollTween),
}

/// One animation frame worth of scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameStep {
    pub delta: i32,
    /// No further frames follow this one.
    pub last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroller {
    target: usize,
    phase: Phase,
}

impl SmoothScroller {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            phase: Phase::Pending,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether the target card has been found and the final approach runs.
    pub fn is_approaching(&self) -> bool {
        matches!(self.phase, Phase::Approaching(_))
    }

    /// Plans the next frame. `direction` is the scroll vector toward the
    /// target. Returns `None` once there is nothing left to scroll.
    pub(crate) fn next_step<C>(
        &mut self,
        geometry: &Geometry,
        slots: &[CardSlot<C>],
        direction: Option<f32>,
        frame: Duration,
    ) -> Option<FrameStep> {
        if !self.is_approaching() {
            if let Some(dx) = calculate_dx_to_make_visible(geometry, slots, self.target) {
                if dx == 0 {
                    return None;
                }
                let duration = time_for_deceleration(dx);
                log::debug!(
                    "smooth scroll found card {}: {} px over {:?}",
                    self.target,
                    -dx,
                    duration
                );
                self.phase =
                    Phase::Approaching(ScrollTween::new(-dx, duration, Interpolator::Decelerate));
            } else if !matches!(self.phase, Phase::Seeking(tween) if !tween.is_finished()) {
                let sign = direction.filter(|x| *x != 0.0)?.signum() as i32;
                let total = TARGET_SEEK_SCROLL_DISTANCE_PX * sign;
                let millis = time_for_scrolling(total).as_millis() as f32
                    * TARGET_SEEK_EXTRA_SCROLL_RATIO;
                self.phase = Phase::Seeking(ScrollTween::new(
                    total,
                    Duration::from_millis(millis as u64),
                    Interpolator::Linear,
                ));
            }
        }

        match &mut self.phase {
            Phase::Pending => None,
            Phase::Seeking(tween) => Some(FrameStep {
                delta: tween.advance(frame),
                last: false,
            }),
            Phase::Approaching(tween) => {
                let delta = tween.advance(frame);
                Some(FrameStep {
                    delta,
                    last: tween.is_finished(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::geometry;

    fn slots_at(lefts: &[(usize, i32)]) -> Vec<CardSlot<()>> {
        lefts
            .iter()
            .map(|(index, left)| CardSlot::new(*index, *left, ()))
            .collect()
    }

    #[test]
    fn timing_follows_half_a_millisecond_per_pixel() {
        assert_eq!(time_for_scrolling(150), Duration::from_millis(75));
        assert_eq!(time_for_scrolling(-3), Duration::from_millis(2));
        // ceil(75 / 0.3356) = 224
        assert_eq!(time_for_deceleration(150), Duration::from_millis(224));
    }

    #[test]
    fn scroll_by_duration_grows_with_distance() {
        assert_eq!(scroll_by_duration(0, 600), Duration::from_millis(300));
        assert_eq!(scroll_by_duration(-300, 600), Duration::from_millis(450));
        assert_eq!(scroll_by_duration(60_000, 600), MAX_SCROLL_DURATION);
        assert_eq!(scroll_by_duration(10, 0), MAX_SCROLL_DURATION);
    }

    #[test]
    fn card_on_the_right_is_pulled_to_active_left() {
        let slots = slots_at(&[(0, 50), (1, 200), (2, 350)]);
        assert_eq!(calculate_dx_to_make_visible(&geometry(), &slots, 2), Some(-300));
        assert_eq!(calculate_dx_to_make_visible(&geometry(), &slots, 7), None);
    }

    #[test]
    fn stacked_card_comes_forward_card_by_card() {
        // Settled at 5; card 3 is two cards back.
        let slots = slots_at(&[(3, 0), (4, 25), (5, 50), (6, 200)]);
        assert_eq!(calculate_dx_to_make_visible(&geometry(), &slots, 3), Some(300));
        assert_eq!(calculate_dx_to_make_visible(&geometry(), &slots, 4), Some(150));

        // Card 5 half way out of the active slot: top view is 5.
        let slots = slots_at(&[(3, 0), (4, 25), (5, 130), (6, 280)]);
        assert_eq!(
            calculate_dx_to_make_visible(&geometry(), &slots, 3),
            Some(70 + 150)
        );
    }

    #[test]
    fn approach_sums_to_the_offset() {
        let geometry = geometry();
        let slots = slots_at(&[(0, 50), (1, 200), (2, 350)]);
        let mut scroller = SmoothScroller::new(2);

        let mut total = 0;
        let mut frames = 0;
        while let Some(step) = scroller.next_step(&geometry, &slots, Some(2.0), Duration::from_millis(16)) {
            assert!(scroller.is_approaching());
            total += step.delta;
            frames += 1;
            if step.last {
                break;
            }
        }

        assert_eq!(total, 300);
        assert!(frames > 1);
    }

    #[test]
    fn missing_target_seeks_along_the_vector() {
        let geometry = geometry();
        let slots = slots_at(&[(0, 50), (1, 200)]);
        let mut scroller = SmoothScroller::new(9);

        let step = scroller
            .next_step(&geometry, &slots, Some(9.0), Duration::from_millis(60))
            .expect("seeking");
        assert!(!step.last);
        assert!(step.delta > 0);
        // 10 000 px over 6 s, linear.
        assert_eq!(step.delta, 100);

        let mut backwards = SmoothScroller::new(0);
        let step = backwards
            .next_step(&geometry, &slots_at(&[(5, 50)]), Some(-5.0), Duration::from_millis(60))
            .expect("seeking");
        assert_eq!(step.delta, -100);
    }

    #[test]
    fn missing_target_without_direction_stops() {
        let mut scroller = SmoothScroller::new(4);
        assert_eq!(
            scroller.next_step(&geometry(), &slots_at(&[(0, 50)]), None, Duration::from_millis(16)),
            None
        );
    }
}
