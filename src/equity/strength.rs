//! Single hand against a field of random opponents.
//!
//! Unlike field equity, the opponents' hole cards are unknown: every trial
//! deals them fresh from the pool together with the missing board cards.
//! Opponents are not tracked individually; only the hero's result counts.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::board::{complete_board, known_board_cards, unresolved_slots, BoardSlots};
use super::config::SimulationConfig;
use super::field::check_distinct;
use super::runner::run_trials;
use super::tally::Outcome;
use crate::cards::{available_deck, Card};
use crate::error::{EquityError, Result};
use crate::eval::HandEvaluator;

/// The hero's share of trials won and tied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    /// Percentage of trials won outright (0-100).
    pub win_pct: f64,
    /// Percentage of trials tied for the best hand (0-100).
    pub tie_pct: f64,
}

impl HandStrength {
    /// Pot share as a fraction: wins plus half the ties.
    pub fn equity(&self) -> f64 {
        (self.win_pct + self.tie_pct / 2.0) / 100.0
    }
}

/// Estimate how often `hero` wins or ties against `opponent_count` random
/// hands.
///
/// # Errors
/// `InvalidOpponentCount` for zero opponents, `DuplicateCard` if the hero
/// and board share a card, `ExhaustedPool` if the pool cannot deal every
/// opponent plus the missing board cards, and `Config` for an invalid
/// configuration.
pub fn estimate_hand_strength(
    hero: &[Card; 2],
    board: &BoardSlots,
    opponent_count: u32,
    config: &SimulationConfig,
) -> Result<HandStrength> {
    config.validate()?;
    if opponent_count == 0 {
        return Err(EquityError::InvalidOpponentCount(opponent_count));
    }

    let mut known = hero.to_vec();
    known.extend(known_board_cards(board));
    check_distinct(&known)?;

    let pool = available_deck(&known);
    let opponent_cards = 2 * opponent_count as usize;
    let needed = opponent_cards + unresolved_slots(board);
    if pool.len() < needed {
        return Err(EquityError::ExhaustedPool { needed, available: pool.len() });
    }

    let evaluator = HandEvaluator::new();

    let tally = run_trials(config, &pool, 1, |scratch, rng, tally| {
        let (draws, _) = scratch.partial_shuffle(rng, needed);
        let (dealt, runout) = draws.split_at(opponent_cards);
        let full_board = complete_board(board, runout);

        let hero_score = evaluator.evaluate_hand(hero, &full_board).score;
        let best_opponent = dealt
            .chunks_exact(2)
            .map(|pair| evaluator.evaluate_hand(&[pair[0], pair[1]], &full_board).score)
            .fold(f64::INFINITY, f64::min);

        let outcome = if hero_score < best_opponent {
            Outcome::Win
        } else if hero_score == best_opponent {
            Outcome::Tie
        } else {
            Outcome::Loss
        };
        tally.record(0, outcome);
    })?;

    Ok(HandStrength {
        win_pct: tally.win_pct(0),
        tie_pct: tally.tie_pct(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::equity::board::{parse_board, EMPTY_BOARD};

    fn hand(s: &str) -> [Card; 2] {
        let cards = parse_cards(s).unwrap();
        [cards[0], cards[1]]
    }

    fn seeded(trials: u32) -> SimulationConfig {
        SimulationConfig::default().with_trials(trials).with_seed(7)
    }

    #[test]
    fn test_royal_flush_always_wins() {
        let board = parse_board("Qs Js Ts 2h 3d").unwrap();
        for trials in [1, 100] {
            let result = estimate_hand_strength(&hand("As Ks"), &board, 1, &seeded(trials)).unwrap();
            assert_eq!(result.win_pct, 100.0);
            assert_eq!(result.tie_pct, 0.0);
        }
    }

    #[test]
    fn test_aces_vs_random() {
        let result = estimate_hand_strength(&hand("As Ah"), &EMPTY_BOARD, 1, &seeded(2000)).unwrap();
        assert!(result.win_pct > 75.0, "AA win% {} should be > 75", result.win_pct);
        assert!(result.equity() > 0.75);
    }

    #[test]
    fn test_more_opponents_lower_equity() {
        let heads_up = estimate_hand_strength(&hand("Qh Qd"), &EMPTY_BOARD, 1, &seeded(3000)).unwrap();
        let four_way = estimate_hand_strength(&hand("Qh Qd"), &EMPTY_BOARD, 4, &seeded(3000)).unwrap();
        assert!(four_way.win_pct < heads_up.win_pct);
    }

    #[test]
    fn test_percentages_bounded() {
        let board = parse_board("9h 9c 4d").unwrap();
        for opponents in 1..=5 {
            let r = estimate_hand_strength(&hand("4h 5h"), &board, opponents, &seeded(500)).unwrap();
            assert!((0.0..=100.0).contains(&r.win_pct));
            assert!((0.0..=100.0).contains(&r.tie_pct));
            assert!(r.win_pct + r.tie_pct <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn test_board_nuts_ties() {
        // The board is a royal flush, so every opponent ties the hero.
        let board = parse_board("Ac Kc Qc Jc Tc").unwrap();
        let r = estimate_hand_strength(&hand("2h 3d"), &board, 2, &seeded(200)).unwrap();
        assert_eq!(r.win_pct, 0.0);
        assert_eq!(r.tie_pct, 100.0);
        assert_eq!(r.equity(), 0.5);
    }

    #[test]
    fn test_seeded_determinism() {
        let board = parse_board("Kd 7s 2c").unwrap();
        let a = estimate_hand_strength(&hand("Ah Qh"), &board, 3, &seeded(5000)).unwrap();
        let b = estimate_hand_strength(&hand("Ah Qh"), &board, 3, &seeded(5000).with_threads(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = estimate_hand_strength(&hand("As Ah"), &EMPTY_BOARD, 0, &seeded(10)).unwrap_err();
        assert!(matches!(err, EquityError::InvalidOpponentCount(0)));

        let board = parse_board("As 2c 3c").unwrap();
        let err = estimate_hand_strength(&hand("As Ah"), &board, 1, &seeded(10)).unwrap_err();
        assert!(matches!(err, EquityError::DuplicateCard(_)));

        // 50 cards left, 24 opponents need 48 plus 5 board cards
        let err = estimate_hand_strength(&hand("As Ah"), &EMPTY_BOARD, 24, &seeded(10)).unwrap_err();
        assert!(matches!(err, EquityError::ExhaustedPool { needed: 53, available: 50 }));
    }
}
