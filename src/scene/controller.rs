//! The scene controller.
//!
//! Owns the board, the clock and the status machine, and drives the win
//! sequence. The host calls `initialize` once per scene load and `advance`
//! once per frame with the real (unscaled) frame delta.
//!
//! ## Frame Order
//!
//! 1. Escape input toggles pause.
//! 2. Pending win-sequence timers tick on real time.
//! 3. While not finished: the match counter is polled, the clock advances
//!    by the scaled delta, and the time text is refreshed.

use crate::board::Board;
use crate::collab::{resolve_player_name, Leaderboard, ScoreKeeper, ScoreRecord, SceneUi};
use crate::core::{GameRng, GameRngState, Result, SceneConfig, SceneError};
use crate::sequence::{WinSequence, WinStep};
use crate::status::{GameClock, GameStatus, StatusMachine};

use super::deps::SceneDependencies;
use super::text::{score_text, time_text};

/// Input sampled by the host for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Escape went down this frame.
    pub escape_pressed: bool,
}

impl FrameInput {
    /// No input this frame.
    pub const NONE: Self = Self {
        escape_pressed: false,
    };

    /// Escape pressed this frame.
    #[must_use]
    pub const fn escape() -> Self {
        Self {
            escape_pressed: true,
        }
    }
}

/// What happened during one `advance` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Status after the frame.
    pub status: GameStatus,
    /// Pause was toggled this frame.
    pub pause_toggled: bool,
    /// The game was won this frame.
    pub won: bool,
    /// Win-sequence step performed this frame.
    pub step: Option<WinStep>,
}

/// Memory-match scene controller.
pub struct SceneController<S, L, U> {
    config: SceneConfig,
    board: Board,
    board_rng_state: GameRngState,
    status: StatusMachine,
    clock: GameClock,
    time_scale: f32,
    player_name: String,
    score: Option<i64>,
    record: Option<ScoreRecord>,
    win: Option<WinSequence>,
    score_keeper: S,
    leaderboard: L,
    ui: U,
}

impl<S, L, U> SceneController<S, L, U>
where
    S: ScoreKeeper,
    L: Leaderboard,
    U: SceneUi,
{
    /// Validate the configuration and collaborators, read the player name
    /// and lay out a freshly shuffled board.
    ///
    /// The board is shuffled from the `"board"` stream of `rng`. Its starting
    /// state is kept so the same board can be rebuilt later.
    pub fn initialize(
        config: SceneConfig,
        deps: SceneDependencies<S, L, U>,
        rng: &GameRng,
    ) -> Result<Self> {
        config.validate()?;
        let deps = deps.resolve()?;

        let player_name = resolve_player_name(&*deps.preferences, &config.default_player_name);
        let mut board_rng = rng.for_context("board");
        let board_rng_state = board_rng.state();
        let board = Board::organize(&config, deps.origin, &mut board_rng);
        let clock = GameClock::new(config.minute_rollover);

        let mut controller = Self {
            board,
            board_rng_state,
            status: StatusMachine::new(),
            clock,
            time_scale: 1.0,
            player_name,
            score: None,
            record: None,
            win: None,
            score_keeper: deps.score_keeper,
            leaderboard: deps.leaderboard,
            ui: deps.ui,
            config,
        };

        controller.ui.set_pause_overlay_visible(false);
        controller.ui.set_congrats_visible(false);
        controller.render_time();

        tracing::info!(
            player = %controller.player_name,
            seed = rng.seed(),
            cards = controller.board.len(),
            "scene initialized"
        );

        Ok(controller)
    }

    /// Run one frame. `real_delta` is unscaled wall-clock time.
    pub fn advance(&mut self, real_delta: f32, input: FrameInput) -> Result<FrameReport> {
        let mut report = FrameReport::default();

        if input.escape_pressed {
            report.pause_toggled = self.toggle_pause().is_some();
        }

        let step = self.win.as_mut().and_then(|seq| seq.tick(real_delta));
        if let Some(step) = step {
            self.perform(step)?;
            report.step = Some(step);
        }

        if !self.status().is_finished() {
            let total = self.config.total_matches();
            if self.status.check_win(self.score_keeper.matches(), total) {
                self.begin_win();
                report.won = true;
            } else if self.status().is_running() {
                self.clock.tick(real_delta * self.time_scale);
            }
            self.render_time();
        }

        report.status = self.status();
        Ok(report)
    }

    /// Toggle between running and paused.
    ///
    /// Pausing freezes simulation time, hides every card and the auxiliary
    /// controls, and shows the pause overlay. Resuming reverses all of it.
    /// Returns the new status, or `None` once the game is finished.
    pub fn toggle_pause(&mut self) -> Option<GameStatus> {
        let Some(status) = self.status.toggle_pause() else {
            tracing::debug!("pause ignored, game finished");
            return None;
        };

        let paused = status.is_paused();
        self.time_scale = if paused { 0.0 } else { 1.0 };
        self.board.set_all_active(!paused);
        self.ui.set_pause_overlay_visible(paused);
        self.ui.set_leaderboard_button_visible(!paused);
        self.ui.set_reset_control_visible(!paused);

        tracing::info!(%status, elapsed = self.clock.elapsed(), "pause toggled");
        Some(status)
    }

    /// Push the match counter to the total so the next frame wins.
    pub fn force_win(&mut self) {
        let total = self.config.total_matches();
        self.score_keeper.set_matches(total);
    }

    fn begin_win(&mut self) {
        tracing::info!(elapsed = self.clock.elapsed(), "Congratulations You Won!");
        self.score_keeper.set_elapsed(self.clock.elapsed());
        self.win = Some(WinSequence::start(
            self.config.score_delay,
            self.config.deactivate_delay,
        ));
    }

    fn perform(&mut self, step: WinStep) -> Result<()> {
        match step {
            WinStep::SubmitScore => {
                self.score_keeper.calculate_score();
                let score = self.score_keeper.score().ok_or_else(|| {
                    tracing::warn!("score keeper returned no score after calculation");
                    SceneError::ScoreUnavailable
                })?;

                self.score = Some(score);
                self.ui.set_score_text(&score_text(score));

                let record = ScoreRecord::new(self.player_name.clone(), score, self.clock.label());
                self.leaderboard.submit(record.clone());
                self.record = Some(record);

                self.ui.set_congrats_visible(true);
            }
            WinStep::DeactivateCards => {
                tracing::debug!(cards = self.board.active_count(), "deactivating cards");
                self.board.set_all_active(false);
            }
        }
        Ok(())
    }

    fn render_time(&mut self) {
        let text = time_text(&self.player_name, &self.clock);
        self.ui.set_time_text(&text);
    }
}

impl<S, L, U> SceneController<S, L, U> {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status.status()
    }

    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Total elapsed simulation time.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Simulation time scale: 1 while running, 0 while paused.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// RNG state the board was shuffled from.
    #[must_use]
    pub fn board_rng_state(&self) -> &GameRngState {
        &self.board_rng_state
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Final score, once submitted.
    #[must_use]
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// The record sent to the leaderboard, once submitted.
    #[must_use]
    pub fn record(&self) -> Option<&ScoreRecord> {
        self.record.as_ref()
    }

    /// Both win-sequence steps have run.
    #[must_use]
    pub fn win_sequence_complete(&self) -> bool {
        self.win.as_ref().is_some_and(WinSequence::is_complete)
    }

    #[must_use]
    pub fn score_keeper(&self) -> &S {
        &self.score_keeper
    }

    /// Gameplay reports matches through the score keeper.
    pub fn score_keeper_mut(&mut self) -> &mut S {
        &mut self.score_keeper
    }

    #[must_use]
    pub fn leaderboard(&self) -> &L {
        &self.leaderboard
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{MemoryPreferences, RankedLeaderboard, RecordingUi, TimedScoreKeeper};

    type TestScene = SceneController<TimedScoreKeeper, RankedLeaderboard, RecordingUi>;

    fn scene(name: &str) -> TestScene {
        let deps = SceneDependencies::new()
            .with_score_keeper(TimedScoreKeeper::default())
            .with_leaderboard(RankedLeaderboard::default())
            .with_ui(RecordingUi::new())
            .with_preferences(MemoryPreferences::with_player_name(name));
        SceneController::initialize(SceneConfig::default(), deps, &GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let scene = scene("Ann");
        assert_eq!(scene.status(), GameStatus::Running);
        assert_eq!(scene.time_scale(), 1.0);
        assert_eq!(scene.board().active_count(), 12);
        assert_eq!(scene.ui().time_text, "Ann - 0:00");
        assert!(!scene.ui().pause_overlay);
        assert!(!scene.ui().congrats);
    }

    #[test]
    fn test_pause_hides_and_restores() {
        let mut scene = scene("Ann");

        let report = scene.advance(0.016, FrameInput::escape()).unwrap();
        assert!(report.pause_toggled);
        assert_eq!(report.status, GameStatus::Paused);
        assert_eq!(scene.time_scale(), 0.0);
        assert_eq!(scene.board().active_count(), 0);
        assert!(scene.ui().pause_overlay);
        assert!(!scene.ui().leaderboard_button);
        assert!(!scene.ui().reset_control);

        scene.advance(0.016, FrameInput::escape()).unwrap();
        assert_eq!(scene.status(), GameStatus::Running);
        assert_eq!(scene.time_scale(), 1.0);
        assert_eq!(scene.board().active_count(), 12);
        assert!(!scene.ui().pause_overlay);
        assert!(scene.ui().leaderboard_button);
        assert!(scene.ui().reset_control);
    }

    #[test]
    fn test_force_win() {
        let mut scene = scene("Ann");
        scene.force_win();
        assert_eq!(scene.score_keeper().matches(), 4);

        let report = scene.advance(0.016, FrameInput::NONE).unwrap();
        assert!(report.won);
        assert_eq!(scene.status(), GameStatus::Finished);
    }

    #[test]
    fn test_pause_ignored_after_finish() {
        let mut scene = scene("Ann");
        scene.force_win();
        scene.advance(0.016, FrameInput::NONE).unwrap();

        let report = scene.advance(0.016, FrameInput::escape()).unwrap();
        assert!(!report.pause_toggled);
        assert_eq!(scene.status(), GameStatus::Finished);
        assert!(!scene.ui().pause_overlay);
    }
}
