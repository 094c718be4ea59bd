//! Score keeping.
//!
//! The score keeper owns the match counter (gameplay increments it when two
//! cards match) and turns the final elapsed time into a score.

/// Contract the scene controller needs from a score keeper.
pub trait ScoreKeeper {
    /// Record the total elapsed time used for scoring.
    fn set_elapsed(&mut self, elapsed: f32);

    /// Matches found so far. Polled once per frame.
    fn matches(&self) -> u32;

    /// Overwrite the match counter.
    fn set_matches(&mut self, matches: u32);

    /// Compute the score from the recorded elapsed time.
    fn calculate_score(&mut self);

    /// The last computed score, `None` before `calculate_score`.
    fn score(&self) -> Option<i64>;
}

/// Score keeper whose score shrinks linearly with elapsed time.
///
/// `score = max(floor, base - per_second * elapsed)`, rounded to the nearest
/// integer.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedScoreKeeper {
    base: i64,
    per_second: f32,
    floor: i64,
    elapsed: f32,
    matches: u32,
    score: Option<i64>,
}

impl Default for TimedScoreKeeper {
    fn default() -> Self {
        Self::new(1000, 5.0, 0)
    }
}

impl TimedScoreKeeper {
    #[must_use]
    pub fn new(base: i64, per_second: f32, floor: i64) -> Self {
        Self {
            base,
            per_second,
            floor,
            elapsed: 0.0,
            matches: 0,
            score: None,
        }
    }

    /// Count one more match.
    pub fn record_match(&mut self) {
        self.matches += 1;
    }

    /// Elapsed time last handed over by the controller.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl ScoreKeeper for TimedScoreKeeper {
    fn set_elapsed(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    fn matches(&self) -> u32 {
        self.matches
    }

    fn set_matches(&mut self, matches: u32) {
        self.matches = matches;
    }

    fn calculate_score(&mut self) {
        let penalty = (self.per_second * self.elapsed).round() as i64;
        self.score = Some((self.base - penalty).max(self.floor));
    }

    fn score(&self) -> Option<i64> {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_score_before_calculation() {
        let keeper = TimedScoreKeeper::default();
        assert_eq!(keeper.score(), None);
    }

    #[test]
    fn test_score_decays_with_time() {
        let mut keeper = TimedScoreKeeper::new(1000, 5.0, 0);
        keeper.set_elapsed(65.4);
        keeper.calculate_score();
        assert_eq!(keeper.score(), Some(673));
    }

    #[test]
    fn test_score_floor() {
        let mut keeper = TimedScoreKeeper::new(100, 10.0, 25);
        keeper.set_elapsed(3600.0);
        keeper.calculate_score();
        assert_eq!(keeper.score(), Some(25));
    }

    #[test]
    fn test_match_counter() {
        let mut keeper = TimedScoreKeeper::default();
        keeper.record_match();
        keeper.record_match();
        assert_eq!(keeper.matches(), 2);
        keeper.set_matches(4);
        assert_eq!(keeper.matches(), 4);
    }
}
