//! Card representation.
//!
//! This module provides the value types every other part of the engine
//! works with:
//! - `Rank`: 2 through Ace, ordered by numeric value (2=2 .. A=14)
//! - `Suit`: hearts, diamonds, clubs, spades (no ordering between suits)
//! - `Card`: an immutable (rank, suit) pair
//!
//! Cards print in evaluator notation (`As`, `Th`, `2c`) and parse back from
//! it. `Card::pretty` gives the symbol notation used for display (`A♠`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EquityError;

/// Rank characters in evaluator notation, indexed by `rank - 2`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters in evaluator notation, indexed by suit.
const SUIT_CHARS: [char; 4] = ['h', 'd', 'c', 's'];

/// Suit symbols for display, indexed by suit.
const SUIT_SYMBOLS: [char; 4] = ['♥', '♦', '♣', '♠'];

/// Rank of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value (2-14).
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its numeric value (2-14).
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Self::ALL[(value - 2) as usize]),
            _ => None,
        }
    }

    /// Evaluator-notation character.
    pub fn to_char(self) -> char {
        RANK_CHARS[(self.value() - 2) as usize]
    }

    /// Parse a rank token: `2`-`9`, `T`/`10`, `J`, `Q`, `K`, `A`.
    pub fn parse(token: &str) -> Option<Rank> {
        if token == "10" {
            return Some(Rank::Ten);
        }
        let mut chars = token.chars();
        let c = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        let idx = RANK_CHARS.iter().position(|&r| r == c)?;
        Some(Self::ALL[idx])
    }

    /// Display token; ten prints as `10`.
    fn label(self) -> String {
        match self {
            Rank::Ten => "10".to_string(),
            r => r.to_char().to_string(),
        }
    }
}

/// Suit of a card.
///
/// Suits only matter for flush detection; they carry no ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Index 0-3 in deck order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Evaluator-notation character.
    pub fn to_char(self) -> char {
        SUIT_CHARS[self.index()]
    }

    /// Display symbol.
    pub fn symbol(self) -> char {
        SUIT_SYMBOLS[self.index()]
    }

    /// Parse a suit from its letter (any case) or symbol.
    pub fn from_char(c: char) -> Option<Suit> {
        let lower = c.to_ascii_lowercase();
        SUIT_CHARS
            .iter()
            .position(|&s| s == lower)
            .or_else(|| SUIT_SYMBOLS.iter().position(|&s| s == c))
            .map(|idx| Self::ALL[idx])
    }
}

/// A single playing card.
///
/// Two cards are equal iff rank and suit both match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card from rank and suit.
    #[inline]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Create a card from its dense id (0-51, deck order).
    pub fn from_id(id: u8) -> Option<Self> {
        if id >= 52 {
            return None;
        }
        Some(Self::new(
            Rank::ALL[(id % 13) as usize],
            Suit::ALL[(id / 13) as usize],
        ))
    }

    /// Dense id 0-51: `suit * 13 + (rank - 2)`, which is the card's
    /// position in `build_deck()`.
    #[inline]
    pub fn id(&self) -> u8 {
        self.suit as u8 * 13 + (self.rank.value() - 2)
    }

    /// Get the card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Symbol notation for display, e.g. `A♠`, `10♥`.
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Card {
    type Err = EquityError;

    /// Parse a card from evaluator notation like `As`, `Th`, `10h`, `2C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || EquityError::InvalidCard(s.to_string());

        let suit_char = s.chars().last().ok_or_else(invalid)?;
        let rank_token = &s[..s.len() - suit_char.len_utf8()];

        let rank = Rank::parse(rank_token).ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        Ok(Self::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = EquityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parse a list of cards, either whitespace separated (`"As Kd"`) or
/// run together (`"AsKd"`).
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EquityError> {
    let mut cards = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        for card_token in split_run(token)? {
            cards.push(card_token.parse()?);
        }
    }
    Ok(cards)
}

/// Split a run like `AsKd10h` into per-card tokens.
fn split_run(run: &str) -> Result<Vec<&str>, EquityError> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut iter = run.char_indices().peekable();
    while let Some((idx, c)) = iter.next() {
        // A rank is one character except for "10".
        let rank_end = if c == '1' {
            match iter.next() {
                Some((_, '0')) => idx + 2,
                _ => return Err(EquityError::InvalidCard(run.to_string())),
            }
        } else {
            idx + c.len_utf8()
        };
        let (suit_idx, suit) = iter
            .next()
            .ok_or_else(|| EquityError::InvalidCard(run[start..].to_string()))?;
        debug_assert_eq!(suit_idx, rank_end);
        let end = suit_idx + suit.len_utf8();
        tokens.push(&run[start..end]);
        start = end;
    }
    Ok(tokens)
}
