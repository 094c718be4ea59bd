//! Session status: the running/paused/finished machine and the game clock.

pub mod clock;
pub mod machine;

pub use clock::GameClock;
pub use machine::{GameStatus, StatusMachine};
