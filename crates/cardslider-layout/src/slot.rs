//! Attached cards and the visual properties written onto them.

/// Visual properties of one attached card, layered on top of its `left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Uniform scale around the card center.
    pub scale: f32,
    pub alpha: f32,
    /// Stacking order; larger values draw on top.
    pub z: f32,
    /// Extra horizontal offset applied after scaling.
    pub translation_x: f32,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        scale: 1.0,
        alpha: 1.0,
        z: 0.0,
        translation_x: 0.0,
    };
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A card that is currently part of the slider's window.
#[derive(Debug)]
pub struct CardSlot<C> {
    pub(crate) index: usize,
    pub(crate) left: i32,
    pub(crate) card: C,
    pub(crate) transform: CardTransform,
}

impl<C> CardSlot<C> {
    pub(crate) fn new(index: usize, left: i32, card: C) -> Self {
        Self {
            index,
            left,
            card,
            transform: CardTransform::IDENTITY,
        }
    }

    /// Position in the backing collection.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Left edge on the slider axis, before `translation_x`.
    #[inline]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[inline]
    pub fn right(&self, card_width: i32) -> i32 {
        self.left + card_width
    }

    pub fn card(&self) -> &C {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut C {
        &mut self.card
    }

    pub fn transform(&self) -> &CardTransform {
        &self.transform
    }

    /// Card and transform together, for view updaters that write both.
    pub fn parts_mut(&mut self) -> (&mut C, &mut CardTransform) {
        (&mut self.card, &mut self.transform)
    }

    /// Moves the card along the axis.
    #[inline]
    pub(crate) fn offset(&mut self, dx: i32) {
        self.left += dx;
    }
}
