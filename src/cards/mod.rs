//! Card and deck model.
//!
//! ## Modules
//!
//! - `card`: `Rank`, `Suit`, `Card` and notation parsing
//! - `deck`: the 52-card deck, used-card filtering and shuffling

pub mod card;
pub mod deck;

pub use card::{parse_cards, Card, Rank, Suit};
pub use deck::{available_deck, build_deck, cards_equal, is_used, shuffle, shuffle_in_place, CardMask};
