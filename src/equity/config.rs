//! Configuration options for the equity simulator.
//!
//! This module provides the configuration struct that controls how many
//! Monte Carlo trials a simulation runs, how many worker threads it may
//! use, and whether its random streams are seeded.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::EquityError;

/// Default number of trials per simulation.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Configuration for a simulation run.
///
/// # Example
/// ```
/// use holdem_equity::equity::SimulationConfig;
///
/// let config = SimulationConfig::default().with_seed(42);
/// assert_eq!(config.trials, 10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of Monte Carlo trials.
    ///
    /// Percentages are integer counts over this value, so the result has
    /// denominator `trials`.
    pub trials: u32,

    /// Number of worker threads.
    ///
    /// Set to `None` to use rayon's global pool (all available cores).
    pub num_threads: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// If set, every chunk of trials draws from a stream derived from this
    /// seed, so identical inputs give identical counts regardless of the
    /// thread count. If `None`, each chunk seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            num_threads: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fewer trials for interactive use.
    pub fn quick() -> Self {
        Self {
            trials: 1_000,
            ..Default::default()
        }
    }

    /// More trials, used when grading a practice decision.
    pub fn precise() -> Self {
        Self {
            trials: 100_000,
            ..Default::default()
        }
    }

    /// Builder method: set the number of trials.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EquityError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string. Missing fields take their
    /// default values.
    pub fn from_json_str(json: &str) -> Result<Self, EquityError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }

        if self.num_threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(())
    }
}

/// Errors that can occur when validating a simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A simulation needs at least one trial.
    #[error("trial count must be at least 1")]
    ZeroTrials,
    /// An explicit thread count of zero.
    #[error("thread count must be at least 1")]
    ZeroThreads,
}
