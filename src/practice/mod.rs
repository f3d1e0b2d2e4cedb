//! Pot-odds practice drills built on the hand-strength simulator.
//!
//! ## Modules
//!
//! - `scenario`: dealing a practice hand and sizing the villain's bet
//! - `decision`: grading a call/fold answer by expected value

pub mod decision;
pub mod scenario;

pub use decision::{grade_decision, grade_with_equity, Decision, DecisionOutcome};
pub use scenario::{
    fair_bet, generate_practice_hand, Difficulty, PracticeScenario, PracticeSettings, GENERATOR_TRIALS,
};
