//! Elapsed-time clock with a minutes:seconds reading.

use serde::{Deserialize, Serialize};

use crate::core::MinuteRollover;

/// Accumulates simulation time and keeps the displayed minutes and seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    elapsed: f32,
    minutes: u32,
    seconds: u32,
    policy: MinuteRollover,
}

impl GameClock {
    /// Create a clock at zero.
    #[must_use]
    pub fn new(policy: MinuteRollover) -> Self {
        Self {
            elapsed: 0.0,
            minutes: 0,
            seconds: 0,
            policy,
        }
    }

    /// Create a clock already showing `elapsed`.
    #[must_use]
    pub fn at(policy: MinuteRollover, elapsed: f32) -> Self {
        let mut clock = Self::new(policy);
        clock.elapsed = elapsed.max(0.0);
        clock.refresh();
        clock
    }

    /// Advance by `delta` simulation seconds. Negative deltas are ignored.
    pub fn tick(&mut self, delta: f32) {
        if delta > 0.0 {
            self.elapsed += delta;
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        match self.policy {
            MinuteRollover::Floor => {
                let total = self.elapsed.round() as u32;
                self.minutes = total / 60;
                self.seconds = total % 60;
            }
            MinuteRollover::RoundedBoundary => {
                // Banker's rounding, as the legacy clock did.
                let total = self.elapsed.round_ties_even() as u32;
                if total % 60 == 0 {
                    self.minutes = total / 60;
                }
                self.seconds = (self.elapsed % 60.0).round_ties_even() as u32;
            }
        }
    }

    /// Total elapsed simulation seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Displayed minutes.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Displayed seconds.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// `"M:SS"`, as shown on screen and sent to the leaderboard.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.minutes, self.seconds)
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(MinuteRollover::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_reading() {
        let clock = GameClock::at(MinuteRollover::Floor, 65.4);
        assert_eq!(clock.minutes(), 1);
        assert_eq!(clock.seconds(), 5);
        assert_eq!(clock.label(), "1:05");
    }

    #[test]
    fn test_floor_rounds_up_into_next_minute() {
        let clock = GameClock::at(MinuteRollover::Floor, 59.6);
        assert_eq!(clock.label(), "1:00");
    }

    #[test]
    fn test_tick_accumulates() {
        let mut clock = GameClock::default();
        for _ in 0..125 {
            clock.tick(1.0);
        }
        assert_eq!(clock.elapsed(), 125.0);
        assert_eq!(clock.label(), "2:05");
    }

    #[test]
    fn test_tick_ignores_negative_delta() {
        let mut clock = GameClock::at(MinuteRollover::Floor, 10.0);
        clock.tick(-5.0);
        assert_eq!(clock.elapsed(), 10.0);
    }

    #[test]
    fn test_rounded_boundary_catches_minute_on_exact_frame() {
        let mut clock = GameClock::new(MinuteRollover::RoundedBoundary);
        for _ in 0..65 {
            clock.tick(1.0);
        }
        assert_eq!(clock.minutes(), 1);
        assert_eq!(clock.seconds(), 5);
    }

    #[test]
    fn test_rounded_boundary_misses_skipped_minute() {
        let mut clock = GameClock::new(MinuteRollover::RoundedBoundary);
        clock.tick(65.4);
        assert_eq!(clock.minutes(), 0);
        assert_eq!(clock.label(), "0:05");
    }

    #[test]
    fn test_rounded_boundary_carries_minutes() {
        let mut clock = GameClock::new(MinuteRollover::RoundedBoundary);
        clock.tick(60.0);
        assert_eq!(clock.minutes(), 1);
        clock.tick(30.0);
        assert_eq!(clock.minutes(), 1);
        assert_eq!(clock.seconds(), 30);
    }
}
