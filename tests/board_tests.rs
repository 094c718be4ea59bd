//! Board shuffling property tests.
//!
//! The shuffle must always be a permutation of the symbol multiset, for any
//! seed and any board shape the configuration accepts.

use memory_match::board::{shuffle_symbols, symbol_multiset};
use memory_match::{Board, GameRng, Position, SceneConfig};
use proptest::prelude::*;

// =============================================================================
// Default Board
// =============================================================================

proptest! {
    /// Every seed yields 12 cards with exactly 3 of each symbol.
    #[test]
    fn prop_default_board_counts(seed in any::<u64>()) {
        let board = Board::organize(&SceneConfig::default(), Position::default(), &mut GameRng::new(seed));

        prop_assert_eq!(board.len(), 12);
        prop_assert_eq!(board.symbol_counts(), vec![3, 3, 3, 3]);
        prop_assert!(board.cards().all(|c| c.symbol.raw() < 4));
    }

    /// Each grid cell holds exactly one card.
    #[test]
    fn prop_default_board_cells_unique(seed in any::<u64>()) {
        let board = Board::organize(&SceneConfig::default(), Position::default(), &mut GameRng::new(seed));

        let mut cells: Vec<_> = board.cards().map(|c| (c.col, c.row)).collect();
        cells.sort_unstable();
        cells.dedup();
        prop_assert_eq!(cells.len(), 12);
    }

    /// Shuffling never creates or loses values.
    #[test]
    fn prop_shuffle_preserves_multiset(
        seed in any::<u64>(),
        values in proptest::collection::vec(0u8..8, 0..40),
    ) {
        let mut values = values;
        let mut expected = values.clone();
        shuffle_symbols(&mut values, &mut GameRng::new(seed));

        expected.sort_unstable();
        values.sort_unstable();
        prop_assert_eq!(values, expected);
    }
}

// =============================================================================
// Other Board Shapes
// =============================================================================

proptest! {
    /// Larger boards keep the same invariant.
    #[test]
    fn prop_pairs_board(seed in any::<u64>(), symbols in 1u8..10) {
        let cols = usize::from(symbols);
        let config = SceneConfig::default().with_grid(cols, 2).with_symbols(symbols, 2);
        prop_assert!(config.validate().is_ok());

        let board = Board::organize(&config, Position::default(), &mut GameRng::new(seed));
        prop_assert_eq!(board.len(), cols * 2);
        prop_assert_eq!(board.symbol_counts(), vec![2; cols]);
    }
}

/// Over many seeds every symbol shows up in the first cell.
#[test]
fn test_shuffle_reaches_every_symbol_in_first_cell() {
    let config = SceneConfig::default();
    let mut seen = [false; 4];

    for seed in 0..200 {
        let mut numbers = symbol_multiset(&config);
        shuffle_symbols(&mut numbers, &mut GameRng::new(seed));
        seen[usize::from(numbers[0].raw())] = true;
    }

    assert_eq!(seen, [true; 4]);
}
