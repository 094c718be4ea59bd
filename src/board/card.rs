//! Cards on the board.
//!
//! A `Card` binds a symbol to a grid cell and a world position. The host
//! renders it and reads `active` to decide whether it is shown and clickable.

use serde::{Deserialize, Serialize};

/// Grid index of a card (row-major, `row * cols + col`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Symbol shown on a card face. Two cards match when their symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// World-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Translate in the board plane, keeping depth.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

/// A card placed on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: SymbolId,
    pub position: Position,
    /// Column index in the grid.
    pub col: usize,
    /// Row index in the grid.
    pub row: usize,
    /// Shown and clickable. Cleared while paused and after the game ends.
    pub active: bool,
}

impl Card {
    /// Create an active card.
    #[must_use]
    pub fn new(id: CardId, symbol: SymbolId, position: Position, col: usize, row: usize) -> Self {
        Self {
            id,
            symbol,
            position,
            col,
            row,
            active: true,
        }
    }

    /// Check whether two cards form a match.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display() {
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
        assert_eq!(format!("{}", SymbolId::new(2)), "Symbol(2)");
        assert_eq!(CardId::new(7).index(), 7);
    }

    #[test]
    fn test_position_offset_keeps_depth() {
        let p = Position::new(1.0, 2.0, -3.0).offset(4.0, 5.0);
        assert_eq!(p, Position::new(5.0, 7.0, -3.0));
    }

    #[test]
    fn test_card_matches() {
        let origin = Position::default();
        let a = Card::new(CardId::new(0), SymbolId::new(1), origin, 0, 0);
        let b = Card::new(CardId::new(1), SymbolId::new(1), origin, 1, 0);
        let c = Card::new(CardId::new(2), SymbolId::new(2), origin, 2, 0);

        assert!(a.active);
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
        assert!(!a.matches(&a), "a card never matches itself");
    }
}
