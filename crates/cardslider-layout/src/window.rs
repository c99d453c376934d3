//! Window manager: which cards are attached, and where fresh ones go.
//!
//! The window is the contiguous index range `[anchor - stack, last]` where
//! `stack` is the number of left-stack resting positions and `last` is the
//! first card whose right edge clears the viewport by one card width.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{CardProvider, CardSlot, Geometry};

/// How cards that stay in the window are positioned by a reconcile pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// Cards that were already attached keep their current `left`; only
    /// newly obtained cards take fill positions.
    Retain,
    /// Every card is placed at its fill position.
    Relayout,
}

/// Card lifecycle counters for a single reconcile pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Cards requested from the provider.
    pub obtained: usize,
    /// Cards re-attached from the scratch cache.
    pub reused: usize,
    /// Cards handed back to the provider.
    pub recycled: usize,
}

pub struct WindowManager<C> {
    /// Attached cards in ascending index order.
    slots: SmallVec<[CardSlot<C>; 8]>,
    /// Cards detached at the start of a reconcile pass, keyed by index.
    scrap: FxHashMap<usize, CardSlot<C>>,
}

impl<C> Default for WindowManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowManager<C> {
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
            scrap: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn slots(&self) -> &[CardSlot<C>] {
        &self.slots
    }

    #[inline]
    pub fn slots_mut(&mut self) -> &mut [CardSlot<C>] {
        &mut self.slots
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn find(&self, index: usize) -> Option<&CardSlot<C>> {
        self.slots.iter().find(|slot| slot.index == index)
    }

    /// Rebuilds the window around `anchor`.
    ///
    /// All attached cards are detached into the scratch cache, the left stack
    /// and the right run are filled again (re-attaching cached cards whose
    /// index is still wanted), and whatever is left in the cache goes back to
    /// the provider. With no anchor the window ends up empty.
    pub fn reconcile<P>(
        &mut self,
        anchor: Option<usize>,
        viewport_width: i32,
        geometry: &Geometry,
        provider: &mut P,
        mode: FillMode,
    ) -> ReconcileStats
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let mut stats = ReconcileStats::default();
        self.scrap
            .extend(self.slots.drain(..).map(|slot| (slot.index, slot)));

        let item_count = provider.item_count();
        if let Some(anchor) = anchor.filter(|anchor| *anchor < item_count) {
            self.fill_left(anchor, geometry, provider, mode, &mut stats);
            self.fill_right(
                anchor,
                item_count,
                viewport_width,
                geometry,
                provider,
                mode,
                &mut stats,
            );
        }

        stats.recycled = self.recycle_scrap(provider);
        log::trace!(
            "reconcile around {anchor:?}: {} attached ({} obtained, {} reused, {} recycled)",
            self.slots.len(),
            stats.obtained,
            stats.reused,
            stats.recycled
        );
        stats
    }

    /// Lays out up to `stack_slot_count` predecessors of `anchor` at the
    /// resting positions between 0 and `active_card_left`, right-aligned
    /// when fewer predecessors exist.
    fn fill_left<P>(
        &mut self,
        anchor: usize,
        geometry: &Geometry,
        provider: &mut P,
        mode: FillMode,
        stats: &mut ReconcileStats,
    ) where
        P: CardProvider<Card = C> + ?Sized,
    {
        let stack = geometry.stack_slot_count() as usize;

        for index in anchor.saturating_sub(stack)..anchor {
            let left = geometry.resting_left(anchor, index);
            self.attach(index, left, geometry, provider, mode, stats);
        }
    }

    /// Lays out `anchor` at `active_card_left` and its successors edge to
    /// edge until one card width past the viewport.
    #[allow(clippy::too_many_arguments)]
    fn fill_right<P>(
        &mut self,
        anchor: usize,
        item_count: usize,
        viewport_width: i32,
        geometry: &Geometry,
        provider: &mut P,
        mode: FillMode,
        stats: &mut ReconcileStats,
    ) where
        P: CardProvider<Card = C> + ?Sized,
    {
        let limit = viewport_width.saturating_add(geometry.card_width());
        let mut left = geometry.active_card_left();

        for index in anchor..item_count {
            left = self.attach(index, left, geometry, provider, mode, stats);
            if left >= limit {
                break;
            }
        }
    }

    /// Attaches `index`, preferring the scratch cache. Returns the right edge
    /// of the attached card.
    fn attach<P>(
        &mut self,
        index: usize,
        fill_left: i32,
        geometry: &Geometry,
        provider: &mut P,
        mode: FillMode,
        stats: &mut ReconcileStats,
    ) -> i32
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let slot = match self.scrap.remove(&index) {
            Some(mut slot) => {
                stats.reused += 1;
                if mode == FillMode::Relayout {
                    slot.left = fill_left;
                }
                slot
            }
            None => {
                stats.obtained += 1;
                CardSlot::new(index, fill_left, provider.obtain_card(index))
            }
        };

        let right = slot.right(geometry.card_width());
        self.slots.push(slot);
        right
    }

    fn recycle_scrap<P>(&mut self, provider: &mut P) -> usize
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let mut leftovers: SmallVec<[CardSlot<C>; 8]> =
            self.scrap.drain().map(|(_, slot)| slot).collect();
        leftovers.sort_unstable_by_key(|slot| slot.index);

        let recycled = leftovers.len();
        for slot in leftovers {
            provider.recycle_card(slot.index, slot.card);
        }
        recycled
    }

    /// Returns every attached card to the provider.
    pub fn recycle_all<P>(&mut self, provider: &mut P) -> usize
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let recycled = self.slots.len();
        for slot in self.slots.drain(..) {
            provider.recycle_card(slot.index, slot.card);
        }
        recycled
    }

    /// Drops the attached cards of the removed range `[start, start + count)`
    /// and shifts the indices of the cards after it, keeping their positions.
    pub fn remove_range<P>(&mut self, start: usize, count: usize, provider: &mut P) -> usize
    where
        P: CardProvider<Card = C> + ?Sized,
    {
        let end = start.saturating_add(count);
        let mut removed = 0;
        let mut kept: SmallVec<[CardSlot<C>; 8]> = SmallVec::with_capacity(self.slots.len());

        for mut slot in self.slots.drain(..) {
            if slot.index >= end {
                slot.index -= count;
                kept.push(slot);
            } else if slot.index >= start {
                removed += 1;
                provider.recycle_card(slot.index, slot.card);
            } else {
                kept.push(slot);
            }
        }

        self.slots = kept;
        removed
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
