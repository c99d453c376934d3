//! Visual transform of attached cards.
//!
//! Every card's scale, alpha, stacking order and extra horizontal offset
//! follow from its `left` alone, except in the right stack where each card is
//! pulled toward its predecessor so the scaled cards keep a constant gap.
//!
//! Zones, left to right:
//!
//! | zone         | `left` range                      | scale               | z            |
//! |--------------|-----------------------------------|---------------------|--------------|
//! | left stack   | `< active_card_left`              | `SCALE_LEFT → SCALE_CENTER` | `0 → Z_CENTER_1` |
//! | active       | `< active_card_center`            | `SCALE_CENTER`      | `Z_CENTER_1` |
//! | transition   | `< active_card_right`             | `SCALE_CENTER → SCALE_RIGHT` | `Z_CENTER_2` |
//! | right stack  | `>= active_card_right`            | `SCALE_RIGHT`       | `Z_RIGHT`    |

use crate::{CardSlot, CardTransform, ConfigError, Geometry};

pub const SCALE_LEFT: f32 = 0.65;
pub const SCALE_CENTER: f32 = 0.95;
pub const SCALE_RIGHT: f32 = 0.8;
pub const SCALE_CENTER_TO_LEFT: f32 = SCALE_CENTER - SCALE_LEFT;
pub const SCALE_CENTER_TO_RIGHT: f32 = SCALE_CENTER - SCALE_RIGHT;

pub const Z_CENTER_1: f32 = 12.0;
pub const Z_CENTER_2: f32 = 16.0;
pub const Z_RIGHT: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    LeftStack,
    Active,
    Transition,
    RightStack,
}

impl Zone {
    pub fn of(geometry: &Geometry, left: i32) -> Zone {
        if left < geometry.active_card_left() {
            Zone::LeftStack
        } else if left < geometry.active_card_center() {
            Zone::Active
        } else if left < geometry.active_card_right() {
            Zone::Transition
        } else {
            Zone::RightStack
        }
    }
}

/// How far into the left stack a card is: 0.0 at the far left edge, 1.0 at
/// `active_card_left`.
fn left_stack_ratio(geometry: &Geometry, left: i32) -> f32 {
    if geometry.active_card_left() == 0 {
        0.0
    } else {
        left as f32 / geometry.active_card_left() as f32
    }
}

/// How far through the transition zone a card is: 0.0 at the active center,
/// 1.0 at `active_card_right`.
fn transition_ratio(geometry: &Geometry, left: i32) -> f32 {
    let distance = geometry.active_card_right() - geometry.active_card_center();
    if distance == 0 {
        1.0
    } else {
        (left - geometry.active_card_center()) as f32 / distance as f32
    }
}

/// Scale of a card at `left` under the default zone mapping.
pub fn zone_scale(geometry: &Geometry, left: i32) -> f32 {
    match Zone::of(geometry, left) {
        Zone::LeftStack => SCALE_LEFT + SCALE_CENTER_TO_LEFT * left_stack_ratio(geometry, left),
        Zone::Active => SCALE_CENTER,
        Zone::Transition => SCALE_CENTER - SCALE_CENTER_TO_RIGHT * transition_ratio(geometry, left),
        Zone::RightStack => SCALE_RIGHT,
    }
}

/// Horizontal pull that lets a card leaving the active slot land with its
/// scaled left border `cards_gap` away from the active card's right border.
pub fn transition_right_to_center(geometry: &Geometry) -> f32 {
    let width = geometry.card_width() as f32;
    let right = geometry.active_card_right() as f32;
    let center_border = (width - width * SCALE_CENTER) / 2.0;
    let right_border = (width - width * SCALE_RIGHT) / 2.0;
    let right_to_center_distance = (right + center_border) - (right - right_border);
    right_to_center_distance - geometry.cards_gap()
}

/// Writes the computed scale, alpha and z onto a card.
///
/// The defaults store the values in the card's [`CardTransform`]. Override a
/// hook to route a value elsewhere, e.g. to fade an overlay inside the card
/// instead of the whole card. Hooks never influence the layout math: the
/// right-stack chain always uses the computed values.
pub trait CardStyle<C> {
    fn on_update_scale(&mut self, card: &mut C, transform: &mut CardTransform, scale: f32) {
        let _ = card;
        transform.scale = scale;
    }

    fn on_update_alpha(&mut self, card: &mut C, transform: &mut CardTransform, alpha: f32) {
        let _ = card;
        transform.alpha = alpha;
    }

    fn on_update_z(&mut self, card: &mut C, transform: &mut CardTransform, z: f32) {
        let _ = card;
        transform.z = z;
    }
}

/// Style that writes every value straight into the card transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCardStyle;

impl<C> CardStyle<C> for DefaultCardStyle {}

/// Strategy that derives the visual properties of all attached cards.
///
/// Called after every layout and scroll pass with the cards in ascending
/// index order.
pub trait ViewUpdater<C> {
    /// Called once when the layout manager is constructed. An error aborts
    /// the construction.
    fn on_layout_manager_initialized(&mut self, geometry: &Geometry) -> Result<(), ConfigError> {
        let _ = geometry;
        Ok(())
    }

    fn update_views(&mut self, geometry: &Geometry, slots: &mut [CardSlot<C>]);
}

/// The stacked-carousel look: a compressed, fading left stack, a full-size
/// active card and an evenly gapped right stack.
#[derive(Clone, Debug, Default)]
pub struct DefaultViewUpdater<S = DefaultCardStyle> {
    style: S,
    transition_right_to_center: f32,
}

impl DefaultViewUpdater {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> DefaultViewUpdater<S> {
    pub fn with_style(style: S) -> Self {
        Self {
            style,
            transition_right_to_center: 0.0,
        }
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut S {
        &mut self.style
    }

    /// Transform of a card at `left`. `previous` is the right edge and the
    /// computed transform of the card before it in the same pass.
    pub fn transform_for(
        &self,
        geometry: &Geometry,
        left: i32,
        previous: Option<(i32, &CardTransform)>,
    ) -> CardTransform {
        let scale = zone_scale(geometry, left);
        match Zone::of(geometry, left) {
            Zone::LeftStack => {
                let ratio = left_stack_ratio(geometry, left);
                CardTransform {
                    scale,
                    alpha: (0.1 + ratio).clamp(0.0, 1.0),
                    z: Z_CENTER_1 * ratio,
                    translation_x: 0.0,
                }
            }
            Zone::Active => CardTransform {
                scale,
                alpha: 1.0,
                z: Z_CENTER_1,
                translation_x: 0.0,
            },
            Zone::Transition => {
                let full = self.transition_right_to_center;
                let partial = full * transition_ratio(geometry, left);
                let pull = if full.abs() < partial.abs() { full } else { partial };
                CardTransform {
                    scale,
                    alpha: 1.0,
                    z: Z_CENTER_2,
                    translation_x: -pull,
                }
            }
            Zone::RightStack => CardTransform {
                scale,
                alpha: 1.0,
                z: Z_RIGHT,
                translation_x: previous
                    .map(|(prev_right, prev)| self.chain_offset(geometry, left, prev_right, prev))
                    .unwrap_or(0.0),
            },
        }
    }

    /// Offset that leaves exactly `cards_gap` between the scaled borders of
    /// this right-stack card and its predecessor.
    fn chain_offset(
        &self,
        geometry: &Geometry,
        left: i32,
        prev_right: i32,
        prev: &CardTransform,
    ) -> f32 {
        let width = geometry.card_width() as f32;
        let (prev_scale, prev_right, prev_translation) =
            if prev_right <= geometry.active_card_right() {
                (SCALE_CENTER, geometry.active_card_right(), 0.0)
            } else {
                (prev.scale, prev_right, prev.translation_x)
            };

        let prev_border = (width - width * prev_scale) / 2.0;
        let current_border = (width - width * SCALE_RIGHT) / 2.0;
        let distance = (left as f32 + current_border)
            - (prev_right as f32 - prev_border + prev_translation);
        -(distance - geometry.cards_gap())
    }
}

impl<C, S> ViewUpdater<C> for DefaultViewUpdater<S>
where
    S: CardStyle<C>,
{
    fn on_layout_manager_initialized(&mut self, geometry: &Geometry) -> Result<(), ConfigError> {
        self.transition_right_to_center = transition_right_to_center(geometry);
        Ok(())
    }

    fn update_views(&mut self, geometry: &Geometry, slots: &mut [CardSlot<C>]) {
        let mut previous: Option<(i32, CardTransform)> = None;

        for slot in slots.iter_mut() {
            let computed = self.transform_for(
                geometry,
                slot.left,
                previous.as_ref().map(|(right, prev)| (*right, prev)),
            );

            let (card, transform) = slot.parts_mut();
            self.style.on_update_scale(card, transform, computed.scale);
            self.style.on_update_alpha(card, transform, computed.alpha);
            self.style.on_update_z(card, transform, computed.z);
            transform.translation_x = computed.translation_x;

            previous = Some((slot.right(geometry.card_width()), computed));
        }
    }
}

#[cfg(test)]
#[path = "tests/view_updater_tests.rs"]
mod tests;
