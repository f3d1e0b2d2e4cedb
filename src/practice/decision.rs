//! Grading a call/fold decision on a practice scenario.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::scenario::PracticeScenario;
use crate::equity::{board_from_cards, estimate_hand_strength, SimulationConfig};
use crate::error::Result;

/// The player's answer to the villain's bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Call,
    Fold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Call => write!(f, "call"),
            Decision::Fold => write!(f, "fold"),
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(Decision::Call),
            "fold" => Ok(Decision::Fold),
            other => Err(format!("unknown decision {other:?} (expected call or fold)")),
        }
    }
}

/// How a decision measured up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    /// The decision being graded.
    pub decision: Decision,
    /// Hero's pot share in percent (wins plus half the ties).
    pub equity_pct: f64,
    /// Price of the call as a percentage of the pot after calling.
    pub pot_odds_pct: f64,
    /// Expected value of calling, in chips.
    pub ev: f64,
    /// Whether the decision was the +EV one.
    pub correct: bool,
}

/// Grade a decision using a fresh equity simulation.
///
/// The usual trial count here is `SimulationConfig::precise()`.
pub fn grade_decision(
    scenario: &PracticeScenario,
    decision: Decision,
    config: &SimulationConfig,
) -> Result<DecisionOutcome> {
    let strength = estimate_hand_strength(
        &scenario.hero_hand,
        &board_from_cards(&scenario.board)?,
        scenario.opponent_count,
        config,
    )?;
    Ok(grade_with_equity(scenario, decision, strength.equity()))
}

/// Grade a decision given the hero's equity as a fraction.
///
/// Every villain is assumed to put in the bet, so the pot after calling is
/// `pot + opponent_count * bet`. Calling is correct iff
/// `equity * pot_after_call - bet > 0`.
pub fn grade_with_equity(scenario: &PracticeScenario, decision: Decision, equity: f64) -> DecisionOutcome {
    let call = scenario.bet as f64;
    let pot_after_call = scenario.pot as f64 + scenario.opponent_count as f64 * call;
    let pot_odds = call / pot_after_call;
    let ev = equity * pot_after_call - call;

    let should_call = ev > 0.0;
    let correct = match decision {
        Decision::Call => should_call,
        Decision::Fold => !should_call,
    };

    DecisionOutcome {
        decision,
        equity_pct: equity * 100.0,
        pot_odds_pct: pot_odds * 100.0,
        ev,
        correct,
    }
}
