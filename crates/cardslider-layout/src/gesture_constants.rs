//! Fling thresholds shared by the snap helper and its hosts.
//!
//! Values are in pixels per second at density 1.0.

/// Releases slower than this (on both axes) never snap from a fling; the
/// host lets the slider come to rest and snaps on idle instead.
///
/// Matches Android's `ViewConfiguration.getScaledMinimumFlingVelocity()`
/// on a baseline density.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Release velocities are clamped to this magnitude before the fling
/// distance is estimated.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
