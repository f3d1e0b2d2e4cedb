//! Deck utilities.
//!
//! The full deck is 52 unique cards in a fixed enumeration order (suit
//! major: hearts, diamonds, clubs, spades; rank minor: 2 through A). The
//! order has no meaning for hand strength.
//!
//! The simulator builds an "available" pool by removing every known card
//! (hole cards and fixed board cards) and then draws completions from a
//! shuffled copy of that pool.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::{Card, Rank, Suit};

/// Build the 52-card deck in enumeration order.
pub fn build_deck() -> [Card; 52] {
    let mut cards = [Card::new(Rank::Two, Suit::Hearts); 52];
    let mut i = 0;
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards[i] = Card::new(rank, suit);
            i += 1;
        }
    }
    cards
}

/// Value equality between two cards.
#[inline]
pub fn cards_equal(a: &Card, b: &Card) -> bool {
    a == b
}

/// Check whether `card` is equal to any card in `used`.
pub fn is_used(card: &Card, used: &[Card]) -> bool {
    used.iter().any(|u| cards_equal(card, u))
}

/// The deck minus every card equal to one in `used`, in deck order.
///
/// Repeated entries in `used` collapse, so the result has
/// `52 - |distinct used|` cards.
pub fn available_deck(used: &[Card]) -> Vec<Card> {
    let mask = CardMask::from_cards(used);
    build_deck()
        .into_iter()
        .filter(|card| !mask.contains(*card))
        .collect()
}

/// Return a uniformly random permutation of `cards`.
///
/// The input is left untouched; the permutation is a single working copy
/// shuffled with Fisher-Yates.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Shuffle `cards` in place (Fisher-Yates).
#[inline]
pub fn shuffle_in_place<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// A set of cards stored as a 52-bit mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardMask(u64);

impl CardMask {
    /// Create an empty mask.
    pub fn new() -> Self {
        Self(0)
    }

    /// Build a mask from a list of cards. Duplicates collapse.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut mask = Self::new();
        for &card in cards {
            mask.insert(card);
        }
        mask
    }

    /// Add a card. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Check if a card is in the set.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<Card> = build_deck()
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect();
        write!(f, "CardMask({:?})", cards)
    }
}
