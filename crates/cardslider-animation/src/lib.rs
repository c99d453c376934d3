//! Motion primitives for the card slider
//!
//! Nothing in this crate owns a clock. Hosts advance animations by handing
//! over the frame time that elapsed since the previous frame.

mod fling;
mod interpolator;
mod tween;

pub use fling::*;
pub use interpolator::*;
pub use tween::*;

pub mod prelude {
    pub use crate::fling::{FlingCalculator, FlingDistanceEstimator};
    pub use crate::interpolator::Interpolator;
    pub use crate::tween::ScrollTween;
}
