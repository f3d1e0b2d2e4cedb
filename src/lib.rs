//! # Hold'em Equity
//!
//! A Texas Hold'em hand evaluator and Monte Carlo equity simulator.
//!
//! ## Features
//!
//! - **Exhaustive 7-card evaluation**: best 5 of 7 over all 21 subsets
//! - **Disjoint-range scores**: one `f64` orders any two hands, lower wins
//! - **Field equity**: win/tie percentages for a table of known hands
//! - **Hand strength**: one hand against N random opponents
//! - **Parallel and reproducible**: trials fan out over rayon with one
//!   seeded RNG stream per chunk
//! - **Practice drills**: bet sizing and call/fold grading from equity
//!
//! ## Quick Start
//!
//! ```
//! use holdem_equity::cards::parse_cards;
//! use holdem_equity::equity::{estimate_field_equity, Player, SimulationConfig, EMPTY_BOARD};
//!
//! let aa = parse_cards("As Ah").unwrap();
//! let kk = parse_cards("Ks Kh").unwrap();
//! let players = vec![
//!     Player::with_hand("aces", [aa[0], aa[1]]),
//!     Player::with_hand("kings", [kk[0], kk[1]]),
//! ];
//!
//! let config = SimulationConfig::quick().with_seed(1);
//! let results = estimate_field_equity(&players, &EMPTY_BOARD, &config).unwrap();
//! assert!(results[0].win_pct > results[1].win_pct);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    known cards    ┌──────────────────────────┐
//! │ cards        │ ────────────────▶ │ equity                   │
//! │ deck, shuffle│ ◀──────────────── │ field / strength         │
//! └──────────────┘   available pool  │ runner (rayon chunks)    │
//!                                    └────────────┬─────────────┘
//!                                                 │ 7 cards per hand
//!                                                 ▼
//!                                    ┌──────────────────────────┐
//!                                    │ eval                     │
//!                                    │ best 5 of 7, score       │
//!                                    └──────────────────────────┘
//! ```

/// Card and deck model.
pub mod cards;

/// Monte Carlo equity simulation.
pub mod equity;

/// Crate-wide error type.
pub mod error;

/// Hand evaluation.
pub mod eval;

/// Practice scenarios built on the simulator.
pub mod practice;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, Rank, Suit};
pub use equity::{
    estimate_field_equity, estimate_hand_strength, HandStrength, Player, PlayerEquity, SimulationConfig,
};
pub use error::{EquityError, Result};
pub use eval::{HandCategory, HandEvaluator, HandValue};
