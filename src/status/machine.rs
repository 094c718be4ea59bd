//! Game/pause status machine.
//!
//! ```text
//!            escape                match count == total
//! Running <----------> Paused     Running ------------------> Finished
//! ```
//!
//! `Finished` is terminal for the session.

use serde::{Deserialize, Serialize};

/// Current status of the game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    Finished,
}

impl GameStatus {
    /// Does simulation time advance in this status?
    #[must_use]
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }

    #[must_use]
    pub fn is_paused(self) -> bool {
        self == GameStatus::Paused
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self == GameStatus::Finished
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Owns the status and enforces legal transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMachine {
    status: GameStatus,
}

impl StatusMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Flip between `Running` and `Paused`.
    ///
    /// Returns the new status, or `None` once the game is finished.
    pub fn toggle_pause(&mut self) -> Option<GameStatus> {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Finished => return None,
        };
        Some(self.status)
    }

    /// Move to `Finished` when the match count reaches the total.
    ///
    /// Only a running game can finish. Returns `true` on the transition.
    pub fn check_win(&mut self, matches: u32, total_matches: u32) -> bool {
        if self.status.is_running() && matches >= total_matches {
            self.status = GameStatus::Finished;
            return true;
        }
        false
    }
}
