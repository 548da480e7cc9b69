//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (frame delta normalization)
//! - Input events (keys and pointer to press/release)

pub mod input;
pub mod time;

pub use input::{InputEvent, InputMapper, RawInput};
pub use time::FrameClock;
