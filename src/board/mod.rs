//! The card grid: symbols, positions and the shuffler that lays them out.

pub mod card;
pub mod layout;

pub use card::{Card, CardId, Position, SymbolId};
pub use layout::{shuffle_symbols, symbol_multiset, Board, CardVec};
