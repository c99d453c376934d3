//! Stacked card slider layout
//!
//! A horizontally scrolling, virtualized carousel: the active card sits in a
//! fixed slot, earlier cards pile up into a compressed stack on its left and
//! later cards line up in a scaled-down stack on its right. Only the cards
//! needed to cover the viewport are ever materialized.

pub mod error;
pub mod geometry;
pub mod gesture_constants;
pub mod item_provider;
pub mod layout_manager;
pub mod resolver;
pub mod saved_state;
pub mod scroll;
pub mod slot;
pub mod smooth_scroller;
pub mod snap;
pub mod view_updater;
pub mod viewport;
pub mod window;

#[cfg(test)]
mod test_support;

pub use error::*;
pub use geometry::*;
pub use item_provider::CardProvider;
pub use layout_manager::{CardSliderLayoutManager, LayoutPass, SnapState};
pub use saved_state::SavedState;
pub use slot::{CardSlot, CardTransform};
pub use smooth_scroller::SmoothScroller;
pub use snap::{distance_to_settle, CardSnapHelper};
pub use view_updater::{CardStyle, DefaultCardStyle, DefaultViewUpdater, ViewUpdater, Zone};
pub use viewport::ViewportHandler;
pub use window::{FillMode, ReconcileStats, WindowManager};

pub mod prelude {
    pub use crate::geometry::{Dp, Geometry, SliderConfig};
    pub use crate::item_provider::CardProvider;
    pub use crate::layout_manager::{CardSliderLayoutManager, LayoutPass, SnapState};
    pub use crate::saved_state::SavedState;
    pub use crate::slot::{CardSlot, CardTransform};
    pub use crate::snap::CardSnapHelper;
    pub use crate::view_updater::{CardStyle, DefaultViewUpdater, ViewUpdater};
}
