//! Text shown by the scene.

use crate::status::GameClock;

/// `"{name} - {minutes}:{seconds:02}"`
#[must_use]
pub fn time_text(player_name: &str, clock: &GameClock) -> String {
    format!("{} - {}", player_name, clock.label())
}

/// `"Score: {score}"`
#[must_use]
pub fn score_text(score: i64) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MinuteRollover;

    #[test]
    fn test_time_text() {
        let clock = GameClock::at(MinuteRollover::Floor, 65.4);
        assert_eq!(time_text("Ann", &clock), "Ann - 1:05");

        let clock = GameClock::default();
        assert_eq!(time_text("John Doe", &clock), "John Doe - 0:00");
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(673), "Score: 673");
        assert_eq!(score_text(-1), "Score: -1");
    }
}
