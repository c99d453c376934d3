//! Testing utilities and harness for the card slider

pub mod provider;
pub mod robot;
pub mod robot_assertions;

pub use provider::{RecordedCard, RecordingProvider};
pub use robot::*;

pub mod prelude {
    pub use crate::provider::{RecordedCard, RecordingProvider};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
