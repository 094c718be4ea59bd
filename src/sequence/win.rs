//! The delayed steps that follow a win.
//!
//! After the last match the controller sends the elapsed time to the score
//! keeper and starts a `WinSequence`. The sequence then yields two steps on
//! later frames:
//!
//! 1. `SubmitScore`, `score_delay` seconds after the win
//! 2. `DeactivateCards`, `deactivate_delay` seconds after step 1
//!
//! Both delays count real time, so they keep running regardless of the
//! simulation time scale.

use super::countdown::Countdown;

/// A step the controller must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinStep {
    /// Compute the score, show it, submit it to the leaderboard and reveal
    /// the congratulations panel.
    SubmitScore,
    /// Hide every remaining card.
    DeactivateCards,
}

/// Timers for the post-win steps. Each step fires exactly once.
#[derive(Clone, Debug)]
pub struct WinSequence {
    score: Countdown,
    deactivate: Option<Countdown>,
    deactivate_delay: f32,
}

impl WinSequence {
    /// Start the sequence. Nothing fires until the next `tick`.
    #[must_use]
    pub fn start(score_delay: f32, deactivate_delay: f32) -> Self {
        Self {
            score: Countdown::new(score_delay),
            deactivate: None,
            deactivate_delay,
        }
    }

    /// Advance by `real_delta` seconds and return the step due this frame.
    ///
    /// The deactivation timer is armed when `SubmitScore` fires and starts
    /// counting on the following tick.
    pub fn tick(&mut self, real_delta: f32) -> Option<WinStep> {
        if let Some(timer) = self.deactivate.as_mut() {
            return timer.tick(real_delta).then_some(WinStep::DeactivateCards);
        }

        if self.score.tick(real_delta) {
            self.deactivate = Some(Countdown::new(self.deactivate_delay));
            tracing::debug!(delay = self.deactivate_delay, "card deactivation armed");
            return Some(WinStep::SubmitScore);
        }

        None
    }

    /// Both steps have fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deactivate.as_ref().is_some_and(Countdown::has_fired)
    }

    /// The score step has fired.
    #[must_use]
    pub fn score_submitted(&self) -> bool {
        self.score.has_fired()
    }
}
