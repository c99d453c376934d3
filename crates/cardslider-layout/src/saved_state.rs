//! Persisted slider state.

use crate::SavedStateError;

/// Size of the encoded state in bytes.
pub const SAVED_STATE_LEN: usize = 4;

/// What survives a host teardown: the card the slider was built around.
///
/// Restoring issues a scroll-to request for the anchor, so the next layout
/// pass rebuilds the window around it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedState {
    pub anchor_position: Option<usize>,
}

impl SavedState {
    pub fn new(anchor_position: Option<usize>) -> Self {
        Self { anchor_position }
    }

    /// Big-endian `i32`, `-1` when there is no anchor.
    pub fn to_bytes(&self) -> [u8; SAVED_STATE_LEN] {
        let raw = self
            .anchor_position
            .map_or(-1, |anchor| i32::try_from(anchor).unwrap_or(i32::MAX));
        raw.to_be_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SavedStateError> {
        let raw: [u8; SAVED_STATE_LEN] =
            bytes
                .try_into()
                .map_err(|_| SavedStateError::InvalidLength {
                    expected: SAVED_STATE_LEN,
                    actual: bytes.len(),
                })?;

        match i32::from_be_bytes(raw) {
            -1 => Ok(Self::new(None)),
            anchor if anchor < 0 => Err(SavedStateError::InvalidAnchor(anchor)),
            anchor => Ok(Self::new(Some(anchor as usize))),
        }
    }
}
