//! Leaderboard submissions and a ranked in-memory store.

use serde::{Deserialize, Serialize};

use crate::core::LeaderboardError;

/// One finished game, created at win time and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: i64,
    /// Elapsed time as `"M:SS"`.
    pub time: String,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(player_name: impl Into<String>, score: i64, time: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            time: time.into(),
        }
    }

    /// Parse `time` back into whole seconds.
    #[must_use]
    pub fn time_secs(&self) -> Option<u32> {
        let (minutes, seconds) = self.time.split_once(':')?;
        let minutes: u32 = minutes.trim().parse().ok()?;
        let seconds: u32 = seconds.trim().parse().ok()?;
        minutes.checked_mul(60)?.checked_add(seconds)
    }
}

/// Receives the final record of a session.
pub trait Leaderboard {
    fn submit(&mut self, record: ScoreRecord);
}

/// Bounded leaderboard ranked by score (descending), then time (ascending).
///
/// Records beyond `capacity` fall off the bottom. Earlier records win ties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedLeaderboard {
    capacity: usize,
    entries: Vec<ScoreRecord>,
}

impl Default for RankedLeaderboard {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RankedLeaderboard {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-based rank of the best entry for `player_name`.
    #[must_use]
    pub fn rank_of(&self, player_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.player_name == player_name)
            .map(|i| i + 1)
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Encode for persistence.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LeaderboardError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a previously persisted leaderboard.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LeaderboardError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn insert_ranked(&mut self, record: ScoreRecord) {
        let time = record.time_secs().unwrap_or(u32::MAX);
        let index = self
            .entries
            .iter()
            .position(|e| {
                record.score > e.score
                    || (record.score == e.score && time < e.time_secs().unwrap_or(u32::MAX))
            })
            .unwrap_or(self.entries.len());

        self.entries.insert(index, record);
        self.entries.truncate(self.capacity);
    }
}

impl Leaderboard for RankedLeaderboard {
    fn submit(&mut self, record: ScoreRecord) {
        tracing::info!(
            player = %record.player_name,
            score = record.score,
            time = %record.time,
            "leaderboard submission"
        );
        self.insert_ranked(record);
    }
}
