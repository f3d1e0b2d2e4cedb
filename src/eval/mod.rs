//! Hand evaluation.
//!
//! ## Modules
//!
//! - `category`: `HandCategory`, the `HandClass` variant and the scalar score
//! - `hand_eval`: `HandEvaluator` (best 5 of 7) and `HandValue`

pub mod category;
pub mod hand_eval;

pub use category::{HandCategory, HandClass};
pub use hand_eval::{HandEvaluator, HandValue};
