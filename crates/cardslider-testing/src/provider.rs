//! A card provider that checks the slider's side of the contract.

use cardslider_layout::CardProvider;
use rustc_hash::FxHashMap;

/// Card handed out by [`RecordingProvider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedCard {
    /// Index the card was obtained for.
    pub index: usize,
    /// Unique per obtained card; never reused.
    pub id: u64,
}

/// In-memory provider that records every obtain and recycle call and panics
/// as soon as the slider breaks the provider contract:
///
/// - asking for an index outside the collection,
/// - holding two live cards for the same index,
/// - recycling a card twice.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    count: usize,
    /// Live card id to its current index. `None` once the item behind the
    /// card was removed from the collection but the card is still attached.
    live: FxHashMap<u64, Option<usize>>,
    obtained: Vec<usize>,
    recycled: Vec<usize>,
    next_id: u64,
}

impl RecordingProvider {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Removes `[start, start + count)` from the backing collection. Cards
    /// that are still attached follow their items to the shifted indices.
    pub fn remove_items(&mut self, start: usize, count: usize) {
        let end = start + count;
        assert!(end <= self.count, "removing [{start}, {end}) of {}", self.count);

        self.count -= count;
        for index in self.live.values_mut() {
            *index = match *index {
                Some(i) if i >= end => Some(i - count),
                Some(i) if i >= start => None,
                other => other,
            };
        }
    }

    /// Replaces the collection size without touching live cards.
    pub fn set_item_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Indices passed to `obtain_card`, in call order.
    pub fn obtained(&self) -> &[usize] {
        &self.obtained
    }

    /// Indices passed to `recycle_card`, in call order.
    pub fn recycled(&self) -> &[usize] {
        &self.recycled
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Current indices of the live cards, sorted. Removed items are skipped.
    pub fn live_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.live.values().filter_map(|index| *index).collect();
        indices.sort_unstable();
        indices
    }

    pub fn clear_log(&mut self) {
        self.obtained.clear();
        self.recycled.clear();
    }
}

impl CardProvider for RecordingProvider {
    type Card = RecordedCard;

    fn item_count(&self) -> usize {
        self.count
    }

    fn obtain_card(&mut self, index: usize) -> RecordedCard {
        assert!(index < self.count, "card {index} requested from {} items", self.count);
        assert!(
            !self.live.values().any(|live| *live == Some(index)),
            "card {index} requested while one is still live"
        );

        self.next_id += 1;
        let card = RecordedCard {
            index,
            id: self.next_id,
        };
        self.live.insert(card.id, Some(index));
        self.obtained.push(index);
        log::trace!("obtained card {index} (id {})", card.id);
        card
    }

    fn recycle_card(&mut self, index: usize, card: RecordedCard) {
        let Some(live) = self.live.remove(&card.id) else {
            panic!("card {} (id {}) recycled twice", index, card.id);
        };
        if let Some(live) = live {
            assert_eq!(live, index, "card id {} recycled under the wrong index", card.id);
        }
        self.recycled.push(index);
    }
}
