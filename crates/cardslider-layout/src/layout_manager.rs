//! The stacked-carousel layout manager.
//!
//! Ties the window, the scroll engine, the view updater and the scroll
//! animations together behind the calls a viewport host makes: layout
//! passes, drag ticks, removal notifications and animation frames.

use cardslider_animation::{Interpolator, ScrollTween};
use web_time::Duration;

use crate::resolver;
use crate::scroll;
use crate::smooth_scroller::{scroll_by_duration, SmoothScroller};
use crate::{
    CardProvider, CardSlot, ConfigError, DefaultViewUpdater, FillMode, Geometry, SavedState,
    SliderConfig, ViewUpdater, ViewportHandler, WindowManager,
};

/// Kind of layout pass the host is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPass<'a> {
    /// Regular pass: rebuild the window around the anchor.
    Layout,
    /// Pass run ahead of an item removal so the host can animate it.
    /// `removed` holds the pre-removal indices of the attached cards that
    /// are about to go away.
    PreLayout { removed: &'a [usize] },
}

/// Settle state as seen from the snap helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapState {
    Idle,
    /// An animation is running. `target` is the card it will bring to the
    /// active slot, when known.
    Settling { target: Option<usize> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Animation {
    ScrollBy {
        tween: ScrollTween,
        target: Option<usize>,
    },
    SmoothScroll(SmoothScroller),
}

pub struct CardSliderLayoutManager<C, U = DefaultViewUpdater> {
    geometry: Geometry,
    viewport: ViewportHandler,
    window: WindowManager<C>,
    view_updater: U,
    /// Pending scroll-to target. Cleared by the first scroll that follows.
    requested: Option<usize>,
    animation: Option<Animation>,
}

impl<C> CardSliderLayoutManager<C> {
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        Self::with_view_updater(config, DefaultViewUpdater::new())
    }
}

impl<C, U> CardSliderLayoutManager<C, U>
where
    U: ViewUpdater<C>,
{
    pub fn with_view_updater(config: SliderConfig, mut view_updater: U) -> Result<Self, ConfigError> {
        let geometry = Geometry::from_config(&config)?;
        view_updater.on_layout_manager_initialized(&geometry)?;
        log::debug!(
            "card slider: card width {}px, active slot [{}, {}], gap {}px",
            geometry.card_width(),
            geometry.active_card_left(),
            geometry.active_card_right(),
            geometry.cards_gap()
        );

        Ok(Self {
            geometry,
            viewport: ViewportHandler::new(0.0, geometry.card_width()),
            window: WindowManager::new(),
            view_updater,
            requested: Some(0),
            animation: None,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Attached cards in ascending index order.
    #[inline]
    pub fn slots(&self) -> &[CardSlot<C>] {
        self.window.slots()
    }

    pub fn find_slot(&self, index: usize) -> Option<&CardSlot<C>> {
        self.window.find(index)
    }

    pub fn view_updater(&self) -> &U {
        &self.view_updater
    }

    pub fn view_updater_mut(&mut self) -> &mut U {
        &mut self.view_updater
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport.effective_width()
    }

    /// Takes effect on the next layout pass.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport = ViewportHandler::new(width, self.geometry.card_width());
    }

    pub fn can_scroll_horizontally(&self) -> bool {
        !self.window.is_empty()
    }

    /// The pending scroll-to target if there is one, otherwise the card
    /// currently resolved as active.
    pub fn active_card_position(&self) -> Option<usize> {
        self.requested
            .or_else(|| resolver::active_index(&self.geometry, self.window.slots()))
    }

    /// Card the window is built around: the active card, or the first
    /// attached one while nothing resolves as active.
    fn window_anchor(&self) -> Option<usize> {
        self.active_card_position()
            .or_else(|| self.window.slots().first().map(|slot| slot.index()))
    }

    /// The card nearest to the active slot from the right, if any is on its
    /// way in.
    pub fn top_view(&self) -> Option<&CardSlot<C>> {
        let slots = self.window.slots();
        resolver::top_view(&self.geometry, slots).map(|position| &slots[position])
    }

    /// Direction toward `target`: positive when it lies after the active card.
    pub fn compute_scroll_vector_for_position(&self, target: usize) -> Option<f32> {
        let active = self.active_card_position()?;
        Some(target as f32 - active as f32)
    }

    pub fn on_layout_children<P>(&mut self, provider: &mut P, pass: LayoutPass<'_>)
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let item_count = provider.item_count();
        if item_count == 0 {
            let recycled = self.window.recycle_all(provider);
            log::trace!("empty collection, recycled {recycled} cards");
            return;
        }

        match pass {
            LayoutPass::PreLayout { removed } => {
                if self.window.is_empty() {
                    return;
                }
                if let Some(anchor) = self
                    .active_card_position()
                    .filter(|anchor| removed.contains(anchor))
                {
                    if let Some(first_removed) = removed.iter().copied().min() {
                        let reprojected = first_removed.min(item_count - 1);
                        log::debug!("anchor {anchor} is being removed, reprojected to {reprojected}");
                        self.requested = Some(reprojected);
                    }
                }
                self.update_views();
            }
            LayoutPass::Layout => {
                let mode = if self.requested.is_some() {
                    FillMode::Relayout
                } else {
                    FillMode::Retain
                };
                let anchor = self
                    .window_anchor()
                    .map(|anchor| anchor.min(item_count - 1));
                self.window.reconcile(
                    anchor,
                    self.viewport.effective_width(),
                    &self.geometry,
                    provider,
                    mode,
                );
                self.update_views();
            }
        }
    }

    /// Applies a drag tick and returns the delta actually consumed.
    ///
    /// `dx > 0` moves the content left. Any running animation is cancelled.
    pub fn scroll_horizontally_by<P>(&mut self, dx: i32, provider: &mut P) -> i32
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        self.stop_animation();
        self.scroll_by(dx, provider)
    }

    fn scroll_by<P>(&mut self, dx: i32, provider: &mut P) -> i32
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        self.requested = None;
        let item_count = provider.item_count();
        let delta = scroll::scroll_by(&self.geometry, self.window.slots_mut(), item_count, dx);

        let anchor = self.window_anchor();
        self.window.reconcile(
            anchor,
            self.viewport.effective_width(),
            &self.geometry,
            provider,
            FillMode::Retain,
        );
        self.update_views();
        delta
    }

    /// Jumps to `position` without animation. Out-of-range positions are
    /// ignored.
    pub fn scroll_to_position<P>(&mut self, position: usize, provider: &mut P)
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        if position >= provider.item_count() {
            log::debug!("ignoring scroll to {position}: out of range");
            return;
        }

        self.stop_animation();
        self.requested = Some(position);
        self.on_layout_children(provider, LayoutPass::Layout);
    }

    /// Starts an animated scroll that brings `position` to the active slot.
    /// Out-of-range positions are ignored.
    pub fn smooth_scroll_to_position<P>(&mut self, position: usize, provider: &P)
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        if position >= provider.item_count() {
            log::debug!("ignoring smooth scroll to {position}: out of range");
            return;
        }

        log::debug!("smooth scroll to {position}");
        self.animation = Some(Animation::SmoothScroll(SmoothScroller::new(position)));
    }

    /// Animates a content delta of `dx` with the given interpolator.
    pub fn smooth_scroll_by(&mut self, dx: i32, interpolator: Interpolator) {
        self.settle_by(dx, interpolator, None);
    }

    pub(crate) fn settle_by(&mut self, dx: i32, interpolator: Interpolator, target: Option<usize>) {
        if dx == 0 {
            return;
        }

        let duration = scroll_by_duration(dx, self.viewport.effective_width());
        log::debug!("settling {dx}px over {duration:?} toward {target:?}");
        self.animation = Some(Animation::ScrollBy {
            tween: ScrollTween::new(dx, duration, interpolator),
            target,
        });
    }

    /// Moves the attached cards straight to their resting positions around
    /// the resolved active card. Returns `false` when they already rest.
    pub(crate) fn restack_in_place(&mut self) -> bool {
        let Some(active) = resolver::active_index(&self.geometry, self.window.slots()) else {
            return false;
        };

        let geometry = self.geometry;
        let mut moved = false;
        for slot in self.window.slots_mut() {
            let rest = geometry.resting_left(active, slot.index);
            if slot.left != rest {
                slot.left = rest;
                moved = true;
            }
        }
        if moved {
            log::debug!("restacked around {active}");
            self.update_views();
        }
        moved
    }

    pub fn stop_animation(&mut self) {
        if self.animation.take().is_some() {
            log::trace!("scroll animation cancelled");
        }
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    pub fn snap_state(&self) -> SnapState {
        match &self.animation {
            None => SnapState::Idle,
            Some(Animation::ScrollBy { target, .. }) => SnapState::Settling { target: *target },
            Some(Animation::SmoothScroll(scroller)) => SnapState::Settling {
                target: Some(scroller.target()),
            },
        }
    }

    /// Advances the running animation by one frame and returns the delta
    /// consumed by it.
    pub fn on_animation_frame<P>(&mut self, frame: Duration, provider: &mut P) -> i32
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let Some(mut animation) = self.animation.take() else {
            return 0;
        };

        let (step, last) = match &mut animation {
            Animation::ScrollBy { tween, .. } => {
                let step = tween.advance(frame);
                (step, tween.is_finished())
            }
            Animation::SmoothScroll(scroller) => {
                let direction = self.compute_scroll_vector_for_position(scroller.target());
                match scroller.next_step(&self.geometry, self.window.slots(), direction, frame) {
                    Some(step) => (step.delta, step.last),
                    None => (0, true),
                }
            }
        };

        let consumed = if step != 0 {
            self.scroll_by(step, provider)
        } else {
            0
        };

        let refused = step != 0 && consumed == 0;
        if last || refused {
            log::trace!("scroll animation finished (refused: {refused})");
        } else {
            self.animation = Some(animation);
        }
        consumed
    }

    /// Handles removal of `[start, start + count)` from the collection.
    /// `provider` already reports the new item count.
    ///
    /// Attached cards in the range are recycled, later ones are renumbered,
    /// and the anchor is re-requested so the next layout pass closes the gap.
    pub fn on_items_removed<P>(&mut self, start: usize, count: usize, provider: &mut P)
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        if count == 0 {
            return;
        }

        let anchor = self.active_card_position();
        let removed = self.window.remove_range(start, count, provider);
        let item_count = provider.item_count();

        let end = start.saturating_add(count);
        let next = match anchor {
            _ if item_count == 0 => Some(0),
            Some(anchor) if anchor >= end => Some(anchor - count),
            Some(anchor) if anchor >= start => Some(start.min(item_count - 1)),
            other => other,
        };
        log::debug!(
            "removed [{start}, {end}): {removed} attached cards dropped, anchor {anchor:?} -> {next:?}"
        );
        self.requested = next;
    }

    /// The collection was swapped out. Every attached card goes back to the
    /// provider that handed it out, and the slider starts over at the first
    /// card.
    pub fn on_adapter_changed<P>(&mut self, old_provider: &mut P)
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        self.stop_animation();
        let recycled = self.window.recycle_all(old_provider);
        log::debug!("collection replaced, recycled {recycled} cards");
        self.requested = Some(0);
    }

    pub fn save_state(&self) -> SavedState {
        SavedState::new(self.active_card_position())
    }

    /// Requests the saved anchor. Takes effect on the next layout pass.
    pub fn restore_state(&mut self, state: SavedState) {
        if let Some(anchor) = state.anchor_position {
            log::debug!("restoring anchor {anchor}");
            self.stop_animation();
            self.requested = Some(anchor);
        }
    }

    fn update_views(&mut self) {
        self.view_updater
            .update_views(&self.geometry, self.window.slots_mut());
    }
}

#[cfg(test)]
#[path = "tests/layout_manager_tests.rs"]
mod tests;
