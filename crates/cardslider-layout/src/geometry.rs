//! Slider configuration and the layout constants derived from it.

use crate::ConfigError;

/// Density-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

pub const DEFAULT_ACTIVE_CARD_LEFT: Dp = Dp(50.0);
pub const DEFAULT_CARD_WIDTH: Dp = Dp(148.0);
pub const DEFAULT_CARDS_GAP: Dp = Dp(12.0);

/// Number of resting positions in the left stack.
pub const LEFT_CARD_COUNT: i32 = 2;

/// Construction-time configuration. Every dimension is optional and falls
/// back to a density-scaled default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    pub active_card_left: Option<i32>,
    pub card_width: Option<i32>,
    pub cards_gap: Option<f32>,
    pub density: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            active_card_left: None,
            card_width: None,
            cards_gap: None,
            density: 1.0,
        }
    }
}

impl SliderConfig {
    /// Explicit pixel values for all three dimensions.
    pub fn new(active_card_left: i32, card_width: i32, cards_gap: f32) -> Self {
        Self::default()
            .active_card_left(active_card_left)
            .card_width(card_width)
            .cards_gap(cards_gap)
    }

    pub fn active_card_left(mut self, px: i32) -> Self {
        self.active_card_left = Some(px);
        self
    }

    pub fn card_width(mut self, px: i32) -> Self {
        self.card_width = Some(px);
        self
    }

    pub fn cards_gap(mut self, px: f32) -> Self {
        self.cards_gap = Some(px);
        self
    }

    /// Density used to scale the defaults of dimensions left unset.
    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }
}

/// Immutable layout constants.
///
/// The active zone is `[active_card_left, active_card_right]`; everything
/// left of it is the left stack, everything at or past its right edge is the
/// right stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    card_width: i32,
    active_card_left: i32,
    active_card_right: i32,
    active_card_center: i32,
    cards_gap: f32,
    stack_slot_count: i32,
}

impl Geometry {
    pub fn from_config(config: &SliderConfig) -> Result<Self, ConfigError> {
        let density = config.density;
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }

        let card_width = config
            .card_width
            .unwrap_or_else(|| DEFAULT_CARD_WIDTH.to_px(density) as i32);
        let active_card_left = config
            .active_card_left
            .unwrap_or_else(|| DEFAULT_ACTIVE_CARD_LEFT.to_px(density) as i32);
        let cards_gap = config
            .cards_gap
            .unwrap_or_else(|| DEFAULT_CARDS_GAP.to_px(density));

        Self::new(active_card_left, card_width, cards_gap)
    }

    pub fn new(active_card_left: i32, card_width: i32, cards_gap: f32) -> Result<Self, ConfigError> {
        if card_width <= 0 {
            return Err(ConfigError::NonPositiveCardWidth(card_width));
        }
        if active_card_left < 0 {
            return Err(ConfigError::NegativeActiveCardLeft(active_card_left));
        }
        if !cards_gap.is_finite() {
            return Err(ConfigError::InvalidCardsGap(cards_gap));
        }

        let active_card_right = active_card_left + card_width;
        Ok(Self {
            card_width,
            active_card_left,
            active_card_right,
            active_card_center: active_card_left + (active_card_right - active_card_left) / 2,
            cards_gap,
            stack_slot_count: LEFT_CARD_COUNT,
        })
    }

    #[inline]
    pub fn card_width(&self) -> i32 {
        self.card_width
    }

    #[inline]
    pub fn active_card_left(&self) -> i32 {
        self.active_card_left
    }

    #[inline]
    pub fn active_card_right(&self) -> i32 {
        self.active_card_right
    }

    #[inline]
    pub fn active_card_center(&self) -> i32 {
        self.active_card_center
    }

    #[inline]
    pub fn cards_gap(&self) -> f32 {
        self.cards_gap
    }

    #[inline]
    pub fn stack_slot_count(&self) -> i32 {
        self.stack_slot_count
    }

    /// Distance between two resting positions of the left stack.
    #[inline]
    pub fn left_stack_step(&self) -> i32 {
        self.active_card_left / self.stack_slot_count
    }

    /// Where `index` would sit if nothing were stacked: the furthest right a
    /// card can ever travel. Saturates at `i32::MAX` for very long collections.
    #[inline]
    pub fn uncompressed_left(&self, index: usize) -> i32 {
        self.resting_left(0, index)
    }

    /// Resting position of `index` while `active` sits at `active_card_left`:
    /// successors edge to edge, predecessors on the left-stack positions.
    pub fn resting_left(&self, active: usize, index: usize) -> i32 {
        if index >= active {
            let offset = i64::try_from(index - active)
                .unwrap_or(i64::MAX)
                .saturating_mul(self.card_width as i64);
            let left = offset.saturating_add(self.active_card_left as i64);
            i32::try_from(left).unwrap_or(i32::MAX)
        } else {
            let depth = (active - index).min(self.stack_slot_count as usize + 1) as i32;
            ((self.stack_slot_count - depth) * self.left_stack_step()).max(0)
        }
    }
}
