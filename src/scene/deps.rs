//! Collaborator wiring for the scene controller.
//!
//! Every slot starts empty. `SceneController::initialize` refuses to start
//! until all of them are filled, so a missing collaborator is reported at
//! setup instead of in the middle of a frame.

use crate::board::Position;
use crate::collab::Preferences;
use crate::core::{Result, SceneError};

/// Builder holding the collaborators a scene needs.
pub struct SceneDependencies<S, L, U> {
    score_keeper: Option<S>,
    leaderboard: Option<L>,
    ui: Option<U>,
    preferences: Option<Box<dyn Preferences>>,
    origin: Position,
}

impl<S, L, U> Default for SceneDependencies<S, L, U> {
    fn default() -> Self {
        Self {
            score_keeper: None,
            leaderboard: None,
            ui: None,
            preferences: None,
            origin: Position::default(),
        }
    }
}

impl<S, L, U> SceneDependencies<S, L, U> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_score_keeper(mut self, score_keeper: S) -> Self {
        self.score_keeper = Some(score_keeper);
        self
    }

    #[must_use]
    pub fn with_leaderboard(mut self, leaderboard: L) -> Self {
        self.leaderboard = Some(leaderboard);
        self
    }

    #[must_use]
    pub fn with_ui(mut self, ui: U) -> Self {
        self.ui = Some(ui);
        self
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: impl Preferences + 'static) -> Self {
        self.preferences = Some(Box::new(preferences));
        self
    }

    /// Position of the first card. The rest of the grid is laid out from it.
    #[must_use]
    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = origin;
        self
    }

    /// Take every collaborator out, failing on the first empty slot.
    pub(crate) fn resolve(self) -> Result<Resolved<S, L, U>> {
        Ok(Resolved {
            score_keeper: self
                .score_keeper
                .ok_or(SceneError::MissingCollaborator("score keeper"))?,
            leaderboard: self
                .leaderboard
                .ok_or(SceneError::MissingCollaborator("leaderboard"))?,
            ui: self.ui.ok_or(SceneError::MissingCollaborator("ui"))?,
            preferences: self
                .preferences
                .ok_or(SceneError::MissingCollaborator("preferences"))?,
            origin: self.origin,
        })
    }
}

pub(crate) struct Resolved<S, L, U> {
    pub score_keeper: S,
    pub leaderboard: L,
    pub ui: U,
    pub preferences: Box<dyn Preferences>,
    pub origin: Position,
}
