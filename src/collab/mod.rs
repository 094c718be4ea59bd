//! Collaborators the scene controller talks to.
//!
//! Each collaborator is a trait so hosts can plug in their own score
//! manager, leaderboard, preference storage and widgets. In-memory
//! implementations are provided for headless use and tests.

pub mod preferences;
pub mod score;
pub mod leaderboard;
pub mod ui;

pub use preferences::{resolve_player_name, MemoryPreferences, Preferences};
pub use score::{ScoreKeeper, TimedScoreKeeper};
pub use leaderboard::{Leaderboard, RankedLeaderboard, ScoreRecord};
pub use ui::{RecordingUi, SceneUi};
