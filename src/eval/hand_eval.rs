//! Poker hand evaluation.
//!
//! `HandEvaluator::evaluate_7` finds the best 5-card hand out of 7 cards by
//! trying all 21 five-card subsets. The search is exhaustive on purpose:
//! the best hand is not always built from the 5 highest cards (a flush can
//! hide among higher off-suit cards).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::category::{HandCategory, HandClass};
use crate::cards::{Card, CardMask, Rank};
use crate::error::{EquityError, Result};

/// Result of evaluating a hand.
///
/// Keeps both comparison styles: the category ordinal (higher is better)
/// and the disjoint-range scalar score (lower is better). `Ord` orders by
/// strength, so `a > b` means `a` wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    /// Hand category.
    pub category: HandCategory,
    /// Scalar strength score, lower is better.
    pub score: f64,
    /// The classified hand with its tiebreak ranks.
    pub class: HandClass,
}

impl HandValue {
    fn from_class(class: HandClass) -> Self {
        Self {
            category: class.category(),
            score: class.score(),
            class,
        }
    }

    /// Category display name, e.g. "Full House".
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

// Scores are never NaN.
impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| other.score.total_cmp(&self.score))
    }
}

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate exactly 7 distinct cards.
    ///
    /// # Errors
    /// `InvalidCardCount` if `cards.len() != 7`, `DuplicateCard` if any
    /// (rank, suit) repeats.
    pub fn evaluate(&self, cards: &[Card]) -> Result<HandValue> {
        let cards: &[Card; 7] = cards.try_into().map_err(|_| EquityError::InvalidCardCount {
            expected: 7,
            actual: cards.len(),
        })?;

        let mut seen = CardMask::new();
        for &card in cards {
            if !seen.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }
        }

        Ok(self.evaluate_7(cards))
    }

    /// Evaluate two hole cards with a complete board.
    #[inline]
    pub fn evaluate_hand(&self, hole: &[Card; 2], board: &[Card; 5]) -> HandValue {
        self.evaluate_7(&[
            hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
        ])
    }

    /// Evaluate a 7-card hand (best 5-card combination).
    ///
    /// The cards must be distinct; callers that cannot guarantee that go
    /// through `evaluate`.
    pub fn evaluate_7(&self, cards: &[Card; 7]) -> HandValue {
        debug_assert_eq!(CardMask::from_cards(cards).len(), 7, "duplicate card in {:?}", cards);

        let mut best = self.evaluate_5(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);

        // Try all 21 combinations of 5 cards from 7
        for i in 0..7 {
            for j in (i + 1)..7 {
                for k in (j + 1)..7 {
                    for l in (k + 1)..7 {
                        for m in (l + 1)..7 {
                            let hand = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                            let value = self.evaluate_5(&hand);
                            if value > best {
                                best = value;
                            }
                        }
                    }
                }
            }
        }

        best
    }

    /// Classify a 5-card hand.
    ///
    /// Checks run from the best category down and the first match wins.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandValue {
        HandValue::from_class(classify(cards))
    }
}

/// Rank groups of a 5-card hand, sorted by (count desc, rank desc).
struct RankGroups {
    groups: [(u8, Rank); 5],
    len: usize,
}

impl RankGroups {
    fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let mut groups = [(0u8, Rank::Two); 5];
        let mut len = 0;
        for count in (1..=4u8).rev() {
            for rank in Rank::ALL.iter().rev() {
                if counts[rank.value() as usize] == count {
                    groups[len] = (count, *rank);
                    len += 1;
                }
            }
        }
        Self { groups, len }
    }

    #[inline]
    fn count(&self, i: usize) -> u8 {
        self.groups[i].0
    }

    #[inline]
    fn rank(&self, i: usize) -> Rank {
        self.groups[i].1
    }

    /// High card of the straight, if the five ranks are consecutive.
    fn straight_high(&self) -> Option<Rank> {
        if self.len != 5 {
            return None;
        }
        let top = self.rank(0);
        if top.value() - self.rank(4).value() == 4 {
            return Some(top);
        }
        // Wheel: A-5-4-3-2 plays as a five-high straight
        if top == Rank::Ace && self.rank(1) == Rank::Five {
            return Some(Rank::Five);
        }
        None
    }

    /// All five ranks, descending. Only valid when every rank is distinct.
    fn singles(&self) -> [Rank; 5] {
        [self.rank(0), self.rank(1), self.rank(2), self.rank(3), self.rank(4)]
    }
}

fn classify(cards: &[Card; 5]) -> HandClass {
    let groups = RankGroups::new(cards);
    let suit = cards[0].suit();
    let is_flush = cards.iter().all(|c| c.suit() == suit);
    let straight_high = groups.straight_high();

    if is_flush {
        if let Some(high) = straight_high {
            return if high == Rank::Ace {
                HandClass::RoyalFlush
            } else {
                HandClass::StraightFlush { high }
            };
        }
    }

    if groups.count(0) == 4 {
        return HandClass::FourOfAKind { quads: groups.rank(0), kicker: groups.rank(1) };
    }

    if groups.count(0) == 3 && groups.count(1) == 2 {
        return HandClass::FullHouse { trips: groups.rank(0), pair: groups.rank(1) };
    }

    if is_flush {
        return HandClass::Flush(groups.singles());
    }

    if let Some(high) = straight_high {
        return HandClass::Straight { high };
    }

    if groups.count(0) == 3 {
        return HandClass::ThreeOfAKind {
            trips: groups.rank(0),
            kickers: [groups.rank(1), groups.rank(2)],
        };
    }

    if groups.count(0) == 2 && groups.count(1) == 2 {
        return HandClass::TwoPair {
            high: groups.rank(0),
            low: groups.rank(1),
            kicker: groups.rank(2),
        };
    }

    if groups.count(0) == 2 {
        return HandClass::OnePair {
            pair: groups.rank(0),
            kickers: [groups.rank(1), groups.rank(2), groups.rank(3)],
        };
    }

    HandClass::HighCard(groups.singles())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn cards_from_str(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn arr5(cards: &[Card]) -> [Card; 5] {
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    fn eval5(s: &str) -> HandValue {
        HandEvaluator::new().evaluate_5(&arr5(&cards_from_str(s)))
    }

    fn eval7(s: &str) -> HandValue {
        HandEvaluator::new().evaluate(&cards_from_str(s)).unwrap()
    }

    #[test]
    fn test_high_card() {
        let rank = eval5("As Kd Qh Jc 9s");
        assert_eq!(rank.category, HandCategory::HighCard);
    }

    #[test]
    fn test_one_pair() {
        let rank = eval5("As Ad Kh Qc Js");
        assert_eq!(rank.category, HandCategory::OnePair);
        assert_eq!(
            rank.class,
            HandClass::OnePair { pair: Rank::Ace, kickers: [Rank::King, Rank::Queen, Rank::Jack] }
        );
    }

    #[test]
    fn test_two_pair() {
        let rank = eval5("As Ad Kh Kc Js");
        assert_eq!(rank.category, HandCategory::TwoPair);
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = eval5("As Ad Ah Kc Js");
        assert_eq!(rank.category, HandCategory::ThreeOfAKind);
    }

    #[test]
    fn test_straight() {
        // Regular straight
        assert_eq!(eval5("Ts 9d 8h 7c 6s").category, HandCategory::Straight);

        // Broadway
        assert_eq!(eval5("As Kd Qh Jc Ts").category, HandCategory::Straight);

        // Wheel (A-2-3-4-5) plays five-high
        let wheel = eval5("5s 4d 3h 2c As");
        assert_eq!(wheel.class, HandClass::Straight { high: Rank::Five });
        assert!(wheel < eval5("6s 5d 4h 3c 2s"));
    }

    #[test]
    fn test_not_a_straight() {
        // Q-K-A-2-3 does not wrap around
        assert_eq!(eval5("Qs Kd Ah 2c 3s").category, HandCategory::HighCard);
    }

    #[test]
    fn test_flush() {
        assert_eq!(eval5("As Ks 9s 7s 2s").category, HandCategory::Flush);
    }

    #[test]
    fn test_full_house() {
        let rank = eval5("As Ad Ah Kc Kd");
        assert_eq!(rank.category, HandCategory::FullHouse);
        assert_eq!(rank.class, HandClass::FullHouse { trips: Rank::Ace, pair: Rank::King });

        // Trips rank decides before pair rank
        let low_trips = eval5("2s 2d 2h Ac Ad");
        assert_eq!(low_trips.class, HandClass::FullHouse { trips: Rank::Two, pair: Rank::Ace });
        assert!(rank > low_trips);
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(eval5("As Ad Ah Ac Ks").category, HandCategory::FourOfAKind);
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(eval5("9s 8s 7s 6s 5s").category, HandCategory::StraightFlush);
        assert_eq!(eval5("5h 4h 3h 2h Ah").class, HandClass::StraightFlush { high: Rank::Five });
        assert_eq!(eval5("As Ks Qs Js Ts").category, HandCategory::RoyalFlush);
    }

    #[test]
    fn test_7_card_evaluation() {
        // Should find the best 5-card hand
        let rank = eval7("Ah As Ad Ac Kh Qs Jd");
        assert_eq!(rank.category, HandCategory::FourOfAKind);
        assert_eq!(rank.class, HandClass::FourOfAKind { quads: Rank::Ace, kicker: Rank::King });
    }

    #[test]
    fn test_hidden_flush() {
        // The five highest cards make only a pair; the flush uses low hearts.
        let rank = eval7("Ah Kd Kc 7h 5h 3h 2h");
        assert_eq!(rank.category, HandCategory::Flush);
        assert_eq!(
            rank.class,
            HandClass::Flush([Rank::Ace, Rank::Seven, Rank::Five, Rank::Three, Rank::Two])
        );
    }

    #[test]
    fn test_two_trips_make_full_house() {
        let rank = eval7("9s 9d 9h 4c 4d 4h 2s");
        assert_eq!(rank.class, HandClass::FullHouse { trips: Rank::Nine, pair: Rank::Four });
    }

    #[test]
    fn test_three_pairs_use_best_two() {
        let rank = eval7("Ks Kd 8h 8c 3d 3h Qs");
        assert_eq!(
            rank.class,
            HandClass::TwoPair { high: Rank::King, low: Rank::Eight, kicker: Rank::Queen }
        );
    }

    #[test]
    fn test_straight_with_pair_on_board() {
        let rank = eval7("6h 7d 8c 9s Ts Td 2c");
        assert_eq!(rank.class, HandClass::Straight { high: Rank::Ten });
    }

    #[test]
    fn test_invalid_card_count() {
        let eval = HandEvaluator::new();
        let err = eval.evaluate(&cards_from_str("As Kd Qh Jc 9s 8s")).unwrap_err();
        assert!(matches!(err, EquityError::InvalidCardCount { expected: 7, actual: 6 }));

        let err = eval.evaluate(&cards_from_str("As Kd Qh Jc 9s 8s 7s 6s")).unwrap_err();
        assert!(matches!(err, EquityError::InvalidCardCount { actual: 8, .. }));
    }

    #[test]
    fn test_duplicate_card() {
        let err = HandEvaluator::new()
            .evaluate(&cards_from_str("As Kd Qh Jc 9s 8s As"))
            .unwrap_err();
        match err {
            EquityError::DuplicateCard(card) => assert_eq!(card.to_string(), "As"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_order_invariance() {
        let eval = HandEvaluator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let hands = [
            "Ah Kd Kc 7h 5h 3h 2h",
            "9s 9d 9h 4c 4d 4h 2s",
            "As Ks Qs Js Ts 2h 3d",
            "2c 7d 9h Jc Ks 4s 5d",
        ];
        for hand in hands {
            let mut cards = cards_from_str(hand);
            let reference = eval.evaluate(&cards).unwrap();
            for _ in 0..20 {
                cards.shuffle(&mut rng);
                let value = eval.evaluate(&cards).unwrap();
                assert_eq!(value.category, reference.category);
                assert_eq!(value.score.to_bits(), reference.score.to_bits());
            }
        }
    }

    #[test]
    fn test_exact_tie_across_suits() {
        // Same structure and ranks, different suits
        let a = eval7("Ah Kd Qc 9s 7h 4d 2c");
        let b = eval7("As Kh Qd 9c 7s 4h 2d");
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a, b);

        // Board plays for both: a split pot
        let c = eval7("2h 3d Ac Kc Qc Jc Tc");
        let d = eval7("4h 5s Ac Kc Qc Jc Tc");
        assert_eq!(c.category, HandCategory::RoyalFlush);
        assert_eq!(c.score.to_bits(), d.score.to_bits());
    }

    #[test]
    fn test_score_and_category_agree() {
        let hands = [
            "As Ks Qs Js Ts 2h 3d",
            "9s 8s 7s 6s 5s 2h 2d",
            "Ah As Ad Ac 2h 3s 4d",
            "Kh Ks Kd 2c 2h 7s 9d",
            "Ah 9h 7h 5h 3h Kd Qc",
            "Th 9d 8c 7s 6h 2d 2c",
            "Qh Qs Qd 9c 2h 7s 4d",
            "Jh Js 5d 5c 2h 7s 9d",
            "Ah As Kd 2c 4h 7s 9d",
            "Ah Ks Jd 9c 7h 5s 2d",
        ];
        let values: Vec<HandValue> = hands.iter().map(|h| eval7(h)).collect();
        for pair in values.windows(2) {
            assert!(pair[0].category > pair[1].category);
            assert!(pair[0].score < pair[1].score);
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_hand_comparison() {
        let eval = HandEvaluator::new();
        let board = arr5(&cards_from_str("Qs Jc 7d 3s 2h"));
        let aa = eval.evaluate_hand(&["Ah".parse().unwrap(), "Ad".parse().unwrap()], &board);
        let kk = eval.evaluate_hand(&["Kh".parse().unwrap(), "Kd".parse().unwrap()], &board);
        assert!(aa > kk);
        assert!(aa.score < kk.score);
        assert_eq!(aa.name(), "One Pair");
    }
}
