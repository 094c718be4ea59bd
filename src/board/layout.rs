//! Board shuffling and grid layout.
//!
//! The board is built from a symbol multiset (`copies_per_symbol` of each
//! symbol), permuted with a forward Fisher–Yates pass, then laid out on the
//! grid relative to an origin card.

use smallvec::SmallVec;

use super::card::{Card, CardId, Position, SymbolId};
use crate::core::{GameRng, SceneConfig, MAX_CELLS};

/// Inline capacity covers the default 4×3 board without heap allocation.
pub type CardVec = SmallVec<[Card; 12]>;

/// Build the unshuffled multiset `{0×copies, 1×copies, ...}`.
#[must_use]
pub fn symbol_multiset(config: &SceneConfig) -> Vec<SymbolId> {
    (0..config.symbol_count)
        .flat_map(|s| std::iter::repeat(SymbolId::new(s)).take(config.copies_per_symbol))
        .collect()
}

/// Shuffle a slice in place.
///
/// For each index `i` from first to last, swap with an index drawn uniformly
/// from `[i, len)`.
pub fn shuffle_symbols<T>(values: &mut [T], rng: &mut GameRng) {
    let len = values.len();
    for i in 0..len {
        let r = rng.gen_range_usize(i..len);
        values.swap(i, r);
    }
}

/// The shuffled grid of cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cards: CardVec,
    cols: usize,
    rows: usize,
}

impl Board {
    /// Shuffle the symbol multiset and lay out every cell.
    ///
    /// Card 0 sits on `origin`; the card at `(col, row)` sits at
    /// `origin + (offset_x * col, offset_y * row)` and gets symbol
    /// `numbers[row * cols + col]`.
    ///
    /// `config` must pass `SceneConfig::validate`.
    pub fn organize(config: &SceneConfig, origin: Position, rng: &mut GameRng) -> Self {
        let mut numbers = symbol_multiset(config);
        shuffle_symbols(&mut numbers, rng);

        let (cols, rows) = (config.grid_cols, config.grid_rows);
        debug_assert_eq!(config.cell_count(), Some(numbers.len()));
        debug_assert!(numbers.len() <= MAX_CELLS);
        let mut slots: Vec<Option<Card>> = vec![None; numbers.len()];

        for col in 0..cols {
            for row in 0..rows {
                let index = row * cols + col;
                let symbol = numbers[index];
                let position = origin.offset(config.offset_x * col as f32, config.offset_y * row as f32);
                slots[index] = Some(Card::new(
                    CardId::new(index as u16),
                    symbol,
                    position,
                    col,
                    row,
                ));
            }
        }

        let cards: CardVec = slots.into_iter().flatten().collect();
        tracing::debug!(cols, rows, cards = cards.len(), "board organized");

        Self { cards, cols, rows }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in grid-index order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Look up the card at a grid cell.
    #[must_use]
    pub fn at(&self, col: usize, row: usize) -> Option<&Card> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cards.get(row * self.cols + col)
    }

    /// Symbols in grid-index order.
    #[must_use]
    pub fn symbols(&self) -> Vec<SymbolId> {
        self.cards.iter().map(|c| c.symbol).collect()
    }

    /// Count how many cards carry each symbol, indexed by symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        for card in &self.cards {
            let s = usize::from(card.symbol.raw());
            if counts.len() <= s {
                counts.resize(s + 1, 0);
            }
            counts[s] += 1;
        }
        counts
    }

    /// Show or hide every card.
    pub fn set_all_active(&mut self, active: bool) {
        for card in &mut self.cards {
            card.active = active;
        }
    }

    /// Number of cards currently shown.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cards.iter().filter(|c| c.active).count()
    }
}
