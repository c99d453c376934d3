//! The contract between the slider and whoever owns the card views.

/// Supplies card views for the slider's visible window and takes them back
/// once they scroll out of it.
///
/// The slider only ever asks for indices below [`item_count`](Self::item_count)
/// and never holds two live cards for the same index. A card handed to
/// [`recycle_card`](Self::recycle_card) is never touched again, so the
/// provider is free to reuse it for a later `obtain_card` call.
pub trait CardProvider {
    /// Handle to a materialized card view.
    type Card;

    /// Total number of items in the backing collection.
    fn item_count(&self) -> usize;

    /// Materializes the card for `index`.
    fn obtain_card(&mut self, index: usize) -> Self::Card;

    /// Returns a card that left the window.
    fn recycle_card(&mut self, index: usize, card: Self::Card);
}

impl<P: CardProvider + ?Sized> CardProvider for &mut P {
    type Card = P::Card;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn obtain_card(&mut self, index: usize) -> Self::Card {
        (**self).obtain_card(index)
    }

    fn recycle_card(&mut self, index: usize, card: Self::Card) {
        (**self).recycle_card(index, card)
    }
}
