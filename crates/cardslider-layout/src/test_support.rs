//! Shared fixtures for unit tests.

use crate::{CardProvider, Geometry};

/// 12 items, `card_width = 150`, `active_card_left = 50`, `cards_gap = 12`.
pub(crate) fn geometry() -> Geometry {
    Geometry::new(50, 150, 12.0).expect("valid geometry")
}

#[derive(Debug, PartialEq)]
pub(crate) struct TestCard {
    /// Index the card was obtained for.
    pub index: usize,
    pub id: u64,
}

#[derive(Debug, Default)]
pub(crate) struct TestProvider {
    pub count: usize,
    pub obtained: Vec<usize>,
    pub recycled: Vec<usize>,
    next_id: u64,
}

impl TestProvider {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

impl CardProvider for TestProvider {
    type Card = TestCard;

    fn item_count(&self) -> usize {
        self.count
    }

    fn obtain_card(&mut self, index: usize) -> TestCard {
        assert!(index < self.count, "asked for {index} of {}", self.count);
        self.obtained.push(index);
        self.next_id += 1;
        TestCard {
            index,
            id: self.next_id,
        }
    }

    fn recycle_card(&mut self, index: usize, _card: TestCard) {
        // Cards after a removed range come back under their shifted index.
        self.recycled.push(index);
    }
}
