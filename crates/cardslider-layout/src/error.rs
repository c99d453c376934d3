use std::fmt;

/// Rejected slider configuration. Only ever returned while constructing a
/// layout manager; no partially initialized manager is handed out.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveCardWidth(i32),
    NegativeActiveCardLeft(i32),
    InvalidCardsGap(f32),
    InvalidDensity(f32),
    /// The view updater refused the geometry it was initialized with.
    ViewUpdater(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveCardWidth(width) => {
                write!(f, "card width must be positive, got {width}px")
            }
            ConfigError::NegativeActiveCardLeft(left) => {
                write!(f, "active card left offset must not be negative, got {left}px")
            }
            ConfigError::InvalidCardsGap(gap) => write!(f, "cards gap must be finite, got {gap}"),
            ConfigError::InvalidDensity(density) => {
                write!(f, "density must be a positive finite number, got {density}")
            }
            ConfigError::ViewUpdater(reason) => {
                write!(f, "could not initialize the view updater: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Persisted slider state that could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedStateError {
    InvalidLength { expected: usize, actual: usize },
    InvalidAnchor(i32),
}

impl fmt::Display for SavedStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavedStateError::InvalidLength { expected, actual } => {
                write!(f, "saved state must be {expected} bytes, got {actual}")
            }
            SavedStateError::InvalidAnchor(anchor) => {
                write!(f, "saved anchor position {anchor} is not a valid index")
            }
        }
    }
}

impl std::error::Error for SavedStateError {}
