//! Fling distance estimation.
//!
//! Reproduces the spline physics of Android's `OverScroller`, which is what
//! a card slider host uses to turn a release velocity into a travel distance
//! before choosing which card to settle on.

use std::sync::LazyLock;

use web_time::Duration;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

const NB_SAMPLES: usize = 100;

/// Earth's gravity in SI units (m/s²)
const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// (ln(0.78) / ln(0.9)).abs()
const DECELERATION_RATE: f32 = 2.358_201_6;

/// Distance coefficients sampled along the fling spline, indexed by time.
static SPLINE_POSITIONS: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut positions = [0.0f32; NB_SAMPLES + 1];
    let mut x_min = 0.0f32;

    for (i, slot) in positions.iter_mut().take(NB_SAMPLES).enumerate() {
        let alpha = i as f32 / NB_SAMPLES as f32;

        let mut x_max = 1.0f32;
        let (x, coef) = loop {
            let x_mid = x_min + (x_max - x_min) / 2.0;
            let c = 3.0 * x_mid * (1.0 - x_mid);
            let tx = c * ((1.0 - x_mid) * P1 + x_mid * P2) + x_mid * x_mid * x_mid;
            if (tx - alpha).abs() < 1e-5 {
                break (x_mid, c);
            }
            if tx > alpha {
                x_max = x_mid;
            } else {
                x_min = x_mid;
            }
        };
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }

    positions[NB_SAMPLES] = 1.0;
    positions
});

/// Fraction of the total fling distance travelled at `time` (0.0 to 1.0).
pub fn spline_distance_fraction(time: f32) -> f32 {
    let clamped = time.clamp(0.0, 1.0);
    let index = (NB_SAMPLES as f32 * clamped) as usize;
    if index >= NB_SAMPLES {
        return 1.0;
    }

    let t_inf = index as f32 / NB_SAMPLES as f32;
    let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
    let d_inf = SPLINE_POSITIONS[index];
    let d_sup = SPLINE_POSITIONS[index + 1];
    d_inf + (clamped - t_inf) * (d_sup - d_inf) / (t_sup - t_inf)
}

/// Turns a release velocity into the signed distance a free fling would travel.
///
/// The snap helper only needs the distance; how that distance is produced is
/// up to the host, so closures work as estimators too.
pub trait FlingDistanceEstimator {
    /// Signed distance in pixels for a velocity in pixels per second.
    fn fling_distance(&self, velocity: f32) -> f32;
}

impl<F> FlingDistanceEstimator for F
where
    F: Fn(f32) -> f32,
{
    fn fling_distance(&self, velocity: f32) -> f32 {
        self(velocity)
    }
}

/// A single free fling, sampled by elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct FlingInfo {
    /// Initial velocity in px/sec.
    pub initial_velocity: f32,
    /// Unsigned total distance.
    pub distance: f32,
    pub duration: Duration,
}

impl FlingInfo {
    /// Signed offset from the fling origin after `elapsed`.
    pub fn position(&self, elapsed: Duration) -> f32 {
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        self.distance * self.initial_velocity.signum() * spline_distance_fraction(fraction)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Android-feel fling physics for a given screen density.
#[derive(Debug, Clone, Copy)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// `ViewConfiguration.getScrollFriction()`
    pub const DEFAULT_FRICTION: f32 = 0.015;

    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84,
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64
            / (self.friction * self.physical_coefficient) as f64)
            .ln()
    }

    pub fn fling_duration(&self, velocity: f32) -> Duration {
        if velocity == 0.0 {
            return Duration::ZERO;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        Duration::from_millis((1000.0 * (l / decel_minus_one).exp()) as u64)
    }

    /// Unsigned distance travelled by a fling started at `velocity`.
    pub fn fling_distance_abs(&self, velocity: f32) -> f32 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        self.friction
            * self.physical_coefficient
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp() as f32
    }

    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        FlingInfo {
            initial_velocity: velocity,
            distance: self.fling_distance_abs(velocity),
            duration: self.fling_duration(velocity),
        }
    }
}

impl Default for FlingCalculator {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl FlingDistanceEstimator for FlingCalculator {
    fn fling_distance(&self, velocity: f32) -> f32 {
        self.fling_distance_abs(velocity) * velocity.signum()
    }
}
