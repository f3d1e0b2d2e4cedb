//! Multi-player equity over a fixed field of known hands.
//!
//! Every participant's hole cards stay fixed across trials; only the
//! unresolved board slots are redrawn each trial.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::board::{complete_board, known_board_cards, unresolved_slots, BoardSlots};
use super::config::SimulationConfig;
use super::runner::run_trials;
use crate::cards::{available_deck, Card, CardMask};
use crate::error::{EquityError, Result};
use crate::eval::HandEvaluator;

/// Most players that fit in one deck with a five-card board.
const MAX_PLAYERS: usize = 23;

/// A participant with up to two known hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Caller-chosen identifier, echoed back in the results.
    pub id: String,
    /// Hole cards; `None` marks a card not yet chosen.
    pub hole_cards: [Option<Card>; 2],
}

impl Player {
    /// Create a player with possibly incomplete hole cards.
    pub fn new(id: impl Into<String>, hole_cards: [Option<Card>; 2]) -> Self {
        Self {
            id: id.into(),
            hole_cards,
        }
    }

    /// Create a player holding two known cards.
    pub fn with_hand(id: impl Into<String>, hand: [Card; 2]) -> Self {
        Self::new(id, [Some(hand[0]), Some(hand[1])])
    }

    /// Both hole cards, if both are known.
    pub fn complete_hand(&self) -> Option<[Card; 2]> {
        match self.hole_cards {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }
}

/// Equity estimate for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEquity {
    /// The participant's id.
    pub id: String,
    /// Percentage of trials won outright (0-100).
    pub win_pct: f64,
    /// Percentage of trials tied for the best hand (0-100).
    pub tie_pct: f64,
}

impl PlayerEquity {
    fn zero(id: &str) -> Self {
        Self {
            id: id.to_string(),
            win_pct: 0.0,
            tie_pct: 0.0,
        }
    }
}

/// Estimate each player's win and tie percentage at showdown.
///
/// Players without both hole cards take no part in the simulation and
/// report 0% / 0%. With fewer than two complete hands nothing is simulated
/// and every player reports 0% / 0%.
///
/// # Errors
/// `DuplicateCard` if a known card appears twice among the complete hands
/// and the board, `ExhaustedPool` if the pool cannot fill the board, and
/// `Config` for an invalid configuration.
pub fn estimate_field_equity(
    players: &[Player],
    board: &BoardSlots,
    config: &SimulationConfig,
) -> Result<Vec<PlayerEquity>> {
    config.validate()?;

    let live: Vec<(usize, [Card; 2])> = players
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.complete_hand().map(|hand| (i, hand)))
        .collect();

    if live.len() < 2 {
        log::debug!(
            "{} of {} players have complete hands; skipping simulation",
            live.len(),
            players.len()
        );
        return Ok(players.iter().map(|p| PlayerEquity::zero(&p.id)).collect());
    }

    let mut known: Vec<Card> = live.iter().flat_map(|(_, hand)| *hand).collect();
    known.extend(known_board_cards(board));
    check_distinct(&known)?;

    let pool = available_deck(&known);
    let needed = unresolved_slots(board);
    if pool.len() < needed {
        return Err(EquityError::ExhaustedPool { needed, available: pool.len() });
    }
    // Distinct known cards plus a full board fit in 52 cards.
    debug_assert!(live.len() <= MAX_PLAYERS);

    let evaluator = HandEvaluator::new();
    let hands: Vec<[Card; 2]> = live.iter().map(|(_, hand)| *hand).collect();

    let tally = run_trials(config, &pool, hands.len(), |scratch, rng, tally| {
        let (draws, _) = scratch.partial_shuffle(rng, needed);
        let full_board = complete_board(board, draws);

        let mut scores = [0.0f64; MAX_PLAYERS];
        for (score, hand) in scores.iter_mut().zip(&hands) {
            *score = evaluator.evaluate_hand(hand, &full_board).score;
        }
        tally.record_showdown(&scores[..hands.len()]);
    })?;

    let mut results: Vec<PlayerEquity> = players.iter().map(|p| PlayerEquity::zero(&p.id)).collect();
    for (slot, (index, _)) in live.iter().enumerate() {
        results[*index].win_pct = tally.win_pct(slot);
        results[*index].tie_pct = tally.tie_pct(slot);
    }
    Ok(results)
}

/// Fail on the first card that appears twice.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<()> {
    let mut seen = CardMask::new();
    for &card in cards {
        if !seen.insert(card) {
            return Err(EquityError::DuplicateCard(card));
        }
    }
    Ok(())
}
