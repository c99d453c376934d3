//! Frame-driven scroll tweens.
//!
//! A [`ScrollTween`] spreads an integer pixel distance over a duration and
//! hands out the per-frame step. The caller feeds each step into its scroll
//! path and reports back how much was actually consumed.

use web_time::Duration;

use crate::Interpolator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    total: i32,
    emitted: i32,
    elapsed: Duration,
    duration: Duration,
    interpolator: Interpolator,
}

impl ScrollTween {
    pub fn new(total: i32, duration: Duration, interpolator: Interpolator) -> Self {
        Self {
            total,
            emitted: 0,
            elapsed: Duration::ZERO,
            duration,
            interpolator,
        }
    }

    /// Advances the tween by one frame and returns the pixel step for it.
    ///
    /// Steps always sum up to `total` once the tween has finished.
    pub fn advance(&mut self, frame: Duration) -> i32 {
        self.elapsed = (self.elapsed + frame).min(self.duration);
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        let position = if self.is_finished() {
            self.total
        } else {
            (self.total as f32 * self.interpolator.transform(fraction)).round() as i32
        };
        let step = position - self.emitted;
        self.emitted = position;
        log::trace!(
            "tween step {step} ({}/{} px, {:?}/{:?})",
            self.emitted,
            self.total,
            self.elapsed,
            self.duration
        );
        step
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    /// Pixels not yet handed out.
    pub fn remaining(&self) -> i32 {
        self.total - self.emitted
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
