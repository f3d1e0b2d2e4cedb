//! Hand categories and the scalar strength score.
//!
//! A classified 5-card hand is a `HandClass`: one variant per category,
//! each carrying only the ranks its own tiebreak needs. `HandClass::score`
//! collapses the variant into one `f64` where lower is better and the
//! ranges of different categories never overlap:
//!
//! ```text
//! Royal Flush       1
//! Straight Flush   10 + (14 - high)
//! Four of a Kind   20 + tiebreak
//! Full House       40 + tiebreak
//! Flush            60 + tiebreak
//! Straight         80 + (14 - high)
//! Three of a Kind 100 + tiebreak
//! Two Pair        120 + tiebreak
//! One Pair        140 + tiebreak
//! High Card       160 + tiebreak
//! ```
//!
//! The tiebreak of ranks `k0, k1, ...` (most significant first) is
//! `(14 - k0) + (14 - k1) / 100 + (14 - k2) / 100^2 + ...`, which stays
//! below 13 and so inside its category's band.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rank;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Ordinal 0-9, 9 best.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Lowest (best) score any hand of this category can have.
    pub fn base_score(&self) -> f64 {
        match self {
            HandCategory::RoyalFlush => 1.0,
            HandCategory::StraightFlush => 10.0,
            HandCategory::FourOfAKind => 20.0,
            HandCategory::FullHouse => 40.0,
            HandCategory::Flush => 60.0,
            HandCategory::Straight => 80.0,
            HandCategory::ThreeOfAKind => 100.0,
            HandCategory::TwoPair => 120.0,
            HandCategory::OnePair => 140.0,
            HandCategory::HighCard => 160.0,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified 5-card hand with the ranks needed to break ties.
///
/// Straights carry their high card; the wheel (A-2-3-4-5) has high card 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandClass {
    HighCard([Rank; 5]),
    OnePair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    ThreeOfAKind { trips: Rank, kickers: [Rank; 2] },
    Straight { high: Rank },
    Flush([Rank; 5]),
    FullHouse { trips: Rank, pair: Rank },
    FourOfAKind { quads: Rank, kicker: Rank },
    StraightFlush { high: Rank },
    RoyalFlush,
}

impl HandClass {
    /// The category of this hand.
    pub fn category(&self) -> HandCategory {
        match self {
            HandClass::HighCard(_) => HandCategory::HighCard,
            HandClass::OnePair { .. } => HandCategory::OnePair,
            HandClass::TwoPair { .. } => HandCategory::TwoPair,
            HandClass::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            HandClass::Straight { .. } => HandCategory::Straight,
            HandClass::Flush(_) => HandCategory::Flush,
            HandClass::FullHouse { .. } => HandCategory::FullHouse,
            HandClass::FourOfAKind { .. } => HandCategory::FourOfAKind,
            HandClass::StraightFlush { .. } => HandCategory::StraightFlush,
            HandClass::RoyalFlush => HandCategory::RoyalFlush,
        }
    }

    /// Scalar strength score. Lower is better, and comparing scores alone
    /// orders hands across categories.
    pub fn score(&self) -> f64 {
        let base = self.category().base_score();
        match *self {
            HandClass::RoyalFlush => base,
            HandClass::StraightFlush { high } | HandClass::Straight { high } => {
                tiebreak(base, &[high])
            }
            HandClass::FourOfAKind { quads, kicker } => tiebreak(base, &[quads, kicker]),
            HandClass::FullHouse { trips, pair } => tiebreak(base, &[trips, pair]),
            HandClass::Flush(ranks) | HandClass::HighCard(ranks) => tiebreak(base, &ranks),
            HandClass::ThreeOfAKind { trips, kickers } => {
                tiebreak(base, &[trips, kickers[0], kickers[1]])
            }
            HandClass::TwoPair { high, low, kicker } => tiebreak(base, &[high, low, kicker]),
            HandClass::OnePair { pair, kickers } => {
                tiebreak(base, &[pair, kickers[0], kickers[1], kickers[2]])
            }
        }
    }
}

/// Add the kicker digits to a category base. Equal rank sequences always
/// take the same arithmetic path and so produce bit-identical scores.
fn tiebreak(base: f64, ranks: &[Rank]) -> f64 {
    let mut score = base;
    let mut scale = 1.0;
    for rank in ranks {
        score += (14 - rank.value()) as f64 / scale;
        scale *= 100.0;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn test_category_ordering() {
        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
        assert!(HandCategory::OnePair > HandCategory::HighCard);
        assert_eq!(HandCategory::RoyalFlush.ordinal(), 9);
        assert_eq!(HandCategory::HighCard.ordinal(), 0);
        assert_eq!(HandCategory::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn test_worst_of_category_beats_best_of_next() {
        // Worst hand of each category against the best of the one below.
        let pairs = [
            (HandClass::RoyalFlush, HandClass::StraightFlush { high: King }),
            (
                HandClass::StraightFlush { high: Five },
                HandClass::FourOfAKind { quads: Ace, kicker: King },
            ),
            (
                HandClass::FourOfAKind { quads: Two, kicker: Three },
                HandClass::FullHouse { trips: Ace, pair: King },
            ),
            (
                HandClass::FullHouse { trips: Two, pair: Three },
                HandClass::Flush([Ace, King, Queen, Jack, Nine]),
            ),
            (
                HandClass::Flush([Seven, Five, Four, Three, Two]),
                HandClass::Straight { high: Ace },
            ),
            (
                HandClass::Straight { high: Five },
                HandClass::ThreeOfAKind { trips: Ace, kickers: [King, Queen] },
            ),
            (
                HandClass::ThreeOfAKind { trips: Two, kickers: [Four, Three] },
                HandClass::TwoPair { high: Ace, low: King, kicker: Queen },
            ),
            (
                HandClass::TwoPair { high: Three, low: Two, kicker: Four },
                HandClass::OnePair { pair: Ace, kickers: [King, Queen, Jack] },
            ),
            (
                HandClass::OnePair { pair: Two, kickers: [Five, Four, Three] },
                HandClass::HighCard([Ace, King, Queen, Jack, Nine]),
            ),
        ];

        for (better, worse) in pairs {
            assert!(better.category() > worse.category());
            assert!(
                better.score() < worse.score(),
                "{:?} ({}) should score below {:?} ({})",
                better,
                better.score(),
                worse,
                worse.score()
            );
        }
    }

    #[test]
    fn test_kicker_significance() {
        let a = HandClass::OnePair { pair: Nine, kickers: [Ace, Three, Two] };
        let b = HandClass::OnePair { pair: Nine, kickers: [King, Queen, Jack] };
        assert!(a.score() < b.score());

        let c = HandClass::HighCard([Ace, King, Queen, Jack, Three]);
        let d = HandClass::HighCard([Ace, King, Queen, Jack, Two]);
        assert!(c.score() < d.score());
    }

    #[test]
    fn test_equal_hands_score_identically() {
        let a = HandClass::TwoPair { high: Jack, low: Four, kicker: Nine };
        let b = HandClass::TwoPair { high: Jack, low: Four, kicker: Nine };
        assert_eq!(a.score().to_bits(), b.score().to_bits());
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        let wheel = HandClass::Straight { high: Five };
        let six_high = HandClass::Straight { high: Six };
        assert!(six_high.score() < wheel.score());
        assert_eq!(wheel.score(), 89.0);
    }
}
