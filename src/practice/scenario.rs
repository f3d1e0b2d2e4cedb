//! Practice scenario generation.
//!
//! A scenario deals the hero a hand, a few villains and a 3-5 card board,
//! picks a pot, and then sizes the villain's bet from the hero's simulated
//! equity so that calling is a close (or clearly correct) decision.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{build_deck, shuffle, Card};
use crate::equity::{board_from_cards, estimate_hand_strength, SimulationConfig};
use crate::error::Result;

/// Trials used to size the bet of a generated scenario.
pub const GENERATOR_TRIALS: u32 = 20_000;

/// Hard limit on villains at a practice table.
pub const MAX_OPPONENTS: u32 = 4;

const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How tightly the bet tracks the break-even size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Lower bound and width of the multiplier applied to the fair bet.
    fn variation(self) -> (f64, f64) {
        match self {
            Difficulty::Easy => (0.75, 0.5),
            Difficulty::Medium => (0.85, 0.3),
            Difficulty::Hard => (0.925, 0.15),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty {other:?} (expected easy, medium or hard)")),
        }
    }
}

/// Settings for generating a practice hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSettings {
    /// Fewest villains.
    pub min_opponents: u32,
    /// Most villains.
    pub max_opponents: u32,
    /// Bet sizing difficulty.
    pub difficulty: Difficulty,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            min_opponents: 1,
            max_opponents: 3,
            difficulty: Difficulty::Medium,
        }
    }
}

impl PracticeSettings {
    /// Opponent range clamped to `1..=MAX_OPPONENTS` with `max >= min`.
    pub fn opponent_bounds(&self) -> (u32, u32) {
        let min = self.min_opponents.clamp(1, MAX_OPPONENTS);
        let max = self.max_opponents.min(MAX_OPPONENTS).max(min);
        (min, max)
    }
}

/// A generated practice hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeScenario {
    /// Short random identifier.
    pub id: String,
    /// The hero's hole cards.
    pub hero_hand: [Card; 2],
    /// The villains' hole cards, hidden from the player.
    pub villain_hands: Vec<[Card; 2]>,
    /// Number of villains.
    pub opponent_count: u32,
    /// Community cards dealt so far (3-5).
    pub board: Vec<Card>,
    /// Pot before the villain's bet.
    pub pot: u32,
    /// The bet the hero must call.
    pub bet: u32,
}

/// Deal a practice hand and size the bet from the hero's equity.
///
/// `config` controls the equity simulation; [`GENERATOR_TRIALS`] is the
/// usual trial count.
pub fn generate_practice_hand<R: Rng + ?Sized>(
    settings: &PracticeSettings,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PracticeScenario> {
    let deck = shuffle(&build_deck(), rng);

    let hero_hand = [deck[0], deck[1]];

    let (min, max) = settings.opponent_bounds();
    let opponent_count = rng.gen_range(min..=max);

    let mut next = 2;
    let mut villain_hands = Vec::with_capacity(opponent_count as usize);
    for _ in 0..opponent_count {
        villain_hands.push([deck[next], deck[next + 1]]);
        next += 2;
    }

    let board_size = rng.gen_range(3..=5);
    let board = deck[next..next + board_size].to_vec();

    let pot = rng.gen_range(50..200);

    let strength = estimate_hand_strength(
        &hero_hand,
        &board_from_cards(&board)?,
        opponent_count,
        config,
    )?;
    let equity = strength.equity();
    let bet = fair_bet(equity, pot, settings.difficulty, rng);

    log::info!(
        "practice hand: hero {}{} vs {} opponents, board {:?}, equity {:.1}%, pot {}, bet {}",
        hero_hand[0],
        hero_hand[1],
        opponent_count,
        board,
        equity * 100.0,
        pot,
        bet
    );

    Ok(PracticeScenario {
        id: random_id(rng),
        hero_hand,
        villain_hands,
        opponent_count,
        board,
        pot,
        bet,
    })
}

/// Size a bet that makes calling a close decision.
///
/// With `equity >= 0.5` the hero is the favourite and any bet up to the pot
/// is a call, so the bet is a random 50-100% of the pot. Otherwise the
/// break-even bet satisfies `equity * (pot + 2 * bet) = bet`, i.e.
/// `bet = equity * pot / (1 - 2 * equity)`; the result is jittered by
/// difficulty and clamped to `[pot / 10, 2 * pot]`. Never below 1.
pub fn fair_bet<R: Rng + ?Sized>(equity: f64, pot: u32, difficulty: Difficulty, rng: &mut R) -> u32 {
    let pot = pot as f64;

    let bet = if equity >= 0.5 {
        (pot * rng.gen_range(0.5..1.0)).floor()
    } else {
        let denominator = 1.0 - 2.0 * equity;
        if denominator <= 0.05 {
            pot
        } else {
            let fair = equity * pot / denominator;
            let (low, width) = difficulty.variation();
            let variation = low + rng.gen::<f64>() * width;
            (fair * variation).floor().min(pot * 2.0).max((pot * 0.1).floor())
        }
    };

    bet.max(1.0) as u32
}

/// Six random base-36 characters.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..6)
        .map(|_| ID_CHARS[rng.gen_range(0..ID_CHARS.len())] as char)
        .collect()
}
