//! Monte Carlo equity simulation.
//!
//! Two entry points share one trial driver:
//!
//! - [`estimate_field_equity`]: a fixed set of known hands; only the board
//!   is redrawn each trial ("known rivals").
//! - [`estimate_hand_strength`]: one hero hand against opponents whose hole
//!   cards are redrawn each trial ("unknown opponents").
//!
//! Both remove every known card from the deck, then per trial take a
//! random prefix of the shuffled pool (sampling without replacement),
//! evaluate every live hand and credit a win to a unique best score or a
//! tie to every hand sharing it.
//!
//! ## Modules
//!
//! - `config`: `SimulationConfig` (trials, threads, seed)
//! - `board`: five-slot community board helpers
//! - `tally`: win/tie accumulator
//! - `runner`: chunked parallel trial driver
//! - `field`: multi-player equity
//! - `strength`: hero vs random opponents

pub mod board;
pub mod config;
pub mod field;
pub mod runner;
pub mod strength;
pub mod tally;

pub use board::{board_from_cards, known_board_cards, parse_board, unresolved_slots, BoardSlots, EMPTY_BOARD};
pub use config::{ConfigError, SimulationConfig, DEFAULT_TRIALS};
pub use field::{estimate_field_equity, Player, PlayerEquity};
pub use strength::{estimate_hand_strength, HandStrength};
pub use tally::{Outcome, Tally};
