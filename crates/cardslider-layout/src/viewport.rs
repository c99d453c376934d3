//! Viewport width validation.

/// Widths beyond this are treated as unbounded.
const MAX_REASONABLE_VIEWPORT: f32 = 100_000.0;

/// Number of card widths used as the window when the viewport is unbounded.
const UNBOUNDED_VIEWPORT_CARD_COUNT: i32 = 20;

/// Turns the host-reported viewport width into the width the fill pass uses.
///
/// A slider placed in an unconstrained parent would otherwise try to
/// materialize the whole collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportHandler {
    effective_width: i32,
    is_unbounded: bool,
}

impl ViewportHandler {
    pub fn new(width: f32, card_width: i32) -> Self {
        let is_unbounded = !width.is_finite() || width > MAX_REASONABLE_VIEWPORT;

        let effective_width = if is_unbounded {
            let fallback = card_width.saturating_mul(UNBOUNDED_VIEWPORT_CARD_COUNT);
            log::warn!(
                "CardSlider: unbounded viewport width ({width}), falling back to {fallback}px. \
                 Give the slider a constrained width."
            );
            fallback
        } else {
            width.max(0.0) as i32
        };

        Self {
            effective_width,
            is_unbounded,
        }
    }

    #[inline]
    pub fn effective_width(&self) -> i32 {
        self.effective_width
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.is_unbounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_width_is_used_as_is() {
        let handler = ViewportHandler::new(1080.0, 150);
        assert_eq!(handler.effective_width(), 1080);
        assert!(!handler.is_unbounded());
    }

    #[test]
    fn infinite_width_falls_back_to_card_multiple() {
        let handler = ViewportHandler::new(f32::INFINITY, 150);
        assert!(handler.is_unbounded());
        assert_eq!(handler.effective_width(), 3000);
    }

    #[test]
    fn huge_width_is_treated_as_unbounded() {
        let handler = ViewportHandler::new(250_000.0, 100);
        assert!(handler.is_unbounded());
        assert_eq!(handler.effective_width(), 2000);
    }

    #[test]
    fn negative_width_clamps_to_zero() {
        assert_eq!(ViewportHandler::new(-20.0, 100).effective_width(), 0);
    }
}
