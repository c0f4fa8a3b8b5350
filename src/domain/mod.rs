pub mod catalog;
pub mod enums;
pub mod progress;

pub use enums::{DayMode, TimerStatus, UiMode};
