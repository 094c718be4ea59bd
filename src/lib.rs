//! # memory-match
//!
//! A headless scene controller for a memory-matching card game.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The host owns the frame loop, rendering and input.
//!    It calls `SceneController::initialize` once and `advance` every frame.
//!
//! 2. **Explicit Wiring**: Collaborators (score keeper, leaderboard, UI,
//!    preferences) are injected and validated up front. A missing one is a
//!    `SceneError`, not a fault halfway through a frame.
//!
//! 3. **Deterministic**: Board shuffles come from a seeded `GameRng`, and
//!    delayed steps are timers advanced by `advance`, so whole sessions can
//!    be replayed in tests without wall-clock waits.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: Cards, the shuffler and the grid layout
//! - `status`: Running/paused/finished machine and the game clock
//! - `sequence`: Countdown timers and the post-win sequence
//! - `collab`: Collaborator traits and in-memory implementations
//! - `scene`: The scene controller
//!
//! ## Example
//!
//! ```
//! use memory_match::{
//!     FrameInput, GameRng, GameStatus, MemoryPreferences, RankedLeaderboard, RecordingUi,
//!     SceneConfig, SceneController, SceneDependencies, ScoreKeeper, TimedScoreKeeper,
//! };
//!
//! let deps = SceneDependencies::new()
//!     .with_score_keeper(TimedScoreKeeper::default())
//!     .with_leaderboard(RankedLeaderboard::default())
//!     .with_ui(RecordingUi::new())
//!     .with_preferences(MemoryPreferences::with_player_name("Ann"));
//!
//! let mut scene =
//!     SceneController::initialize(SceneConfig::default(), deps, &GameRng::new(7)).unwrap();
//!
//! scene.advance(1.0, FrameInput::NONE).unwrap();
//! assert_eq!(scene.ui().time_text, "Ann - 0:01");
//!
//! scene.score_keeper_mut().set_matches(4);
//! scene.advance(1.0, FrameInput::NONE).unwrap();
//! assert_eq!(scene.status(), GameStatus::Finished);
//! ```

pub mod core;
pub mod board;
pub mod status;
pub mod sequence;
pub mod collab;
pub mod scene;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    MinuteRollover, SceneConfig, MAX_CELLS, PLAYER_NAME_KEY,
    LeaderboardError, SceneError,
};

pub use crate::board::{Board, Card, CardId, Position, SymbolId};

pub use crate::status::{GameClock, GameStatus, StatusMachine};

pub use crate::sequence::{Countdown, WinSequence, WinStep};

pub use crate::collab::{
    Leaderboard, MemoryPreferences, Preferences, RankedLeaderboard, RecordingUi,
    SceneUi, ScoreKeeper, ScoreRecord, TimedScoreKeeper,
};

pub use crate::scene::{FrameInput, FrameReport, SceneController, SceneDependencies};
