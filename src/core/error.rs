//! Error types for scene setup and frame updates.

use thiserror::Error;

/// Errors surfaced by the leaderboard store.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("leaderboard encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Errors surfaced by the scene controller.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A required collaborator was not wired before initialization.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("invalid scene configuration: {message}")]
    InvalidConfig { message: String },

    /// The score keeper was asked for a score but produced none.
    #[error("score keeper produced no score")]
    ScoreUnavailable,

    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}

impl SceneError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SceneError::MissingCollaborator("score keeper").to_string(),
            "missing collaborator: score keeper"
        );
        assert_eq!(
            SceneError::invalid_config("bad grid").to_string(),
            "invalid scene configuration: bad grid"
        );
        assert_eq!(
            SceneError::ScoreUnavailable.to_string(),
            "score keeper produced no score"
        );
    }

    #[test]
    fn test_leaderboard_error_converts() {
        let err: SceneError = crate::collab::RankedLeaderboard::from_bytes(&[1])
            .unwrap_err()
            .into();
        assert!(matches!(err, SceneError::Leaderboard(LeaderboardError::Encoding(_))));
        assert!(err.to_string().starts_with("leaderboard encoding failed"));
    }
}
