//! Error types shared by the evaluator, simulator and practice generator.

use thiserror::Error;

use crate::cards::Card;
use crate::equity::ConfigError;

/// Errors reported by the equity engine.
///
/// Every variant is a caller-side contract violation. Nothing here is
/// transient, so nothing is ever retried.
#[derive(Debug, Error)]
pub enum EquityError {
    #[error("expected {expected} cards, got {actual}")]
    InvalidCardCount { expected: usize, actual: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("need {needed} cards from the pool but only {available} remain")]
    ExhaustedPool { needed: usize, available: usize },

    #[error("opponent count must be at least 1, got {0}")]
    InvalidOpponentCount(u32),

    #[error("invalid card: {0:?}")]
    InvalidCard(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EquityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EquityError::InvalidCardCount { expected: 7, actual: 6 };
        assert_eq!(err.to_string(), "expected 7 cards, got 6");

        let card: Card = "As".parse().unwrap();
        let err = EquityError::DuplicateCard(card);
        assert_eq!(err.to_string(), "card As appears more than once");

        let err = EquityError::ExhaustedPool { needed: 12, available: 3 };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: EquityError = ConfigError::ZeroTrials.into();
        assert!(matches!(err, EquityError::Config(ConfigError::ZeroTrials)));
    }
}
