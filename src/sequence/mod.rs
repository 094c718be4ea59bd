//! Timed sequences driven by the frame loop instead of host coroutines.

pub mod countdown;
pub mod win;

pub use countdown::Countdown;
pub use win::{WinSequence, WinStep};
