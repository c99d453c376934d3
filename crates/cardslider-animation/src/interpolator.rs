//! Time interpolators for scroll animations.

/// Maps linear animation progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolator {
    Linear,
    /// Starts slow and speeds up (`t²`). Used when settling after an idle snap.
    Accelerate,
    /// Starts fast and slows down (`1 - (1 - t)²`). Used once a smooth
    /// scroll has found its target card.
    Decelerate,
}

impl Interpolator {
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match *self {
            Interpolator::Linear => t,
            Interpolator::Accelerate => t * t,
            Interpolator::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::Linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Interpolator; 3] = [
        Interpolator::Linear,
        Interpolator::Accelerate,
        Interpolator::Decelerate,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for interpolator in ALL {
            assert_eq!(interpolator.transform(0.0), 0.0, "{interpolator:?}");
            assert!((interpolator.transform(1.0) - 1.0).abs() < 1e-4, "{interpolator:?}");
        }
    }

    #[test]
    fn accelerate_lags_and_decelerate_leads() {
        assert!(Interpolator::Accelerate.transform(0.5) < 0.5);
        assert!(Interpolator::Decelerate.transform(0.5) > 0.5);
        assert_eq!(Interpolator::Linear.transform(0.25), 0.25);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        for interpolator in ALL {
            assert_eq!(interpolator.transform(-1.0), 0.0);
            assert!((interpolator.transform(3.0) - 1.0).abs() < 1e-4);
        }
    }
}
