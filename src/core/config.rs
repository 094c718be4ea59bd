//! Scene configuration.
//!
//! `SceneConfig` carries every constant the scene controller needs: grid
//! shape, card spacing, symbol multiset, win-sequence delays and the clock
//! policy. Defaults reproduce the classic 4×3 board with four symbols in
//! triples.

use serde::{Deserialize, Serialize};

use super::error::{Result, SceneError};

/// Preference key holding the player's display name.
pub const PLAYER_NAME_KEY: &str = "playerName";

/// Largest board whose cells all fit in a `CardId`.
pub const MAX_CELLS: usize = u16::MAX as usize + 1;

/// How the displayed minute counter advances.
///
/// `RoundedBoundary` is the original clock; pick it for exact parity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinuteRollover {
    /// Minutes and seconds derived from the rounded total:
    /// `total / 60` and `total % 60`.
    #[default]
    Floor,
    /// Minutes recomputed only on frames where the rounded elapsed time is an
    /// exact multiple of 60, otherwise carried forward. Seconds are
    /// `elapsed % 60`. Misses a minute if a frame skips over the boundary.
    RoundedBoundary,
}

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Number of grid columns.
    pub grid_cols: usize,

    /// Number of grid rows.
    pub grid_rows: usize,

    /// Horizontal distance between neighbouring cards.
    pub offset_x: f32,

    /// Vertical distance between neighbouring cards.
    pub offset_y: f32,

    /// Number of distinct symbols. Also the number of matches needed to win.
    pub symbol_count: u8,

    /// How many cards carry each symbol.
    pub copies_per_symbol: usize,

    /// Real-time delay between the win and the score submission.
    pub score_delay: f32,

    /// Real-time delay between the score submission and card deactivation.
    pub deactivate_delay: f32,

    /// Name shown when the stored player name is missing or blank.
    pub default_player_name: String,

    /// Clock policy for the minute counter.
    #[serde(default)]
    pub minute_rollover: MinuteRollover,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_cols: 4,
            grid_rows: 3,
            offset_x: 4.0,
            offset_y: 5.0,
            symbol_count: 4,
            copies_per_symbol: 3,
            score_delay: 0.3,
            deactivate_delay: 1.0,
            default_player_name: "John Doe".to_string(),
            minute_rollover: MinuteRollover::Floor,
        }
    }
}

impl SceneConfig {
    /// Set the grid shape.
    #[must_use]
    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.grid_cols = cols;
        self.grid_rows = rows;
        self
    }

    /// Set the card spacing.
    #[must_use]
    pub fn with_offsets(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the symbol multiset.
    #[must_use]
    pub fn with_symbols(mut self, symbol_count: u8, copies_per_symbol: usize) -> Self {
        self.symbol_count = symbol_count;
        self.copies_per_symbol = copies_per_symbol;
        self
    }

    /// Set both win-sequence delays.
    #[must_use]
    pub fn with_delays(mut self, score_delay: f32, deactivate_delay: f32) -> Self {
        self.score_delay = score_delay;
        self.deactivate_delay = deactivate_delay;
        self
    }

    /// Set the fallback player name.
    #[must_use]
    pub fn with_default_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = name.into();
        self
    }

    /// Set the minute counter policy.
    #[must_use]
    pub fn with_minute_rollover(mut self, policy: MinuteRollover) -> Self {
        self.minute_rollover = policy;
        self
    }

    /// Number of cells on the board, `None` if it overflows `usize`.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.grid_cols.checked_mul(self.grid_rows)
    }

    /// Number of matches that ends the game.
    #[must_use]
    pub fn total_matches(&self) -> u32 {
        u32::from(self.symbol_count)
    }

    /// Check that the board can be filled exactly by the symbol multiset.
    pub fn validate(&self) -> Result<()> {
        if self.symbol_count == 0 || self.copies_per_symbol == 0 {
            return Err(SceneError::invalid_config(
                "symbol_count and copies_per_symbol must be positive",
            ));
        }

        let cells = self.cell_count().ok_or_else(|| {
            SceneError::invalid_config(format!(
                "{}x{} grid overflows the cell count",
                self.grid_cols, self.grid_rows
            ))
        })?;
        let cards = usize::from(self.symbol_count)
            .checked_mul(self.copies_per_symbol)
            .ok_or_else(|| {
                SceneError::invalid_config(format!(
                    "{} symbols x {} copies overflows the card count",
                    self.symbol_count, self.copies_per_symbol
                ))
            })?;

        if cards != cells {
            return Err(SceneError::invalid_config(format!(
                "{}x{} grid has {} cells but {} symbols x {} copies make {} cards",
                self.grid_cols,
                self.grid_rows,
                cells,
                self.symbol_count,
                self.copies_per_symbol,
                cards
            )));
        }

        if cells > MAX_CELLS {
            return Err(SceneError::invalid_config(format!(
                "{} cells exceed the limit of {}",
                cells, MAX_CELLS
            )));
        }

        if !(self.score_delay >= 0.0 && self.deactivate_delay >= 0.0) {
            return Err(SceneError::invalid_config("delays must be non-negative"));
        }

        Ok(())
    }
}
