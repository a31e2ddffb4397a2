//! Simulation run configuration with documented defaults
//!
//! These values control how many rounds are sampled and how the work is
//! scheduled. They never change combat rules; the profiles do that.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of combat rounds to sample
    ///
    /// Every round resolves the character's full attack sequence against
    /// every target AC, so at 5 APR each AC sees `5 × rounds` attacks.
    pub rounds: u32,

    /// Seed for the random source
    ///
    /// `None` draws a fresh seed per run. The seed actually used is always
    /// written into the report so the run can be replayed.
    pub seed: Option<u64>,

    /// Spread rounds across the rayon thread pool
    pub parallel: bool,

    /// Rounds simulated by one parallel work unit
    ///
    /// Each chunk owns its own generator stream. Results for a given seed
    /// depend on this value but not on the number of threads.
    pub rounds_per_chunk: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 500,
            seed: None,
            parallel: false,
            rounds_per_chunk: 100,
        }
    }
}

impl SimulationConfig {
    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same config with a different round count
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(SimError::InvalidConfig("rounds must be at least 1".into()));
        }

        if self.rounds_per_chunk == 0 {
            return Err(SimError::InvalidConfig(
                "rounds_per_chunk must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Number of parallel chunks needed to cover all rounds
    pub fn chunk_count(&self) -> u32 {
        self.rounds.div_ceil(self.rounds_per_chunk.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rounds, 500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = SimulationConfig::default().with_seed(9).with_rounds(40);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rounds, 40);
        assert_eq!(config.rounds_per_chunk, 100);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = SimulationConfig::default().with_rounds(0);
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_chunk_rejected() {
        let config = SimulationConfig {
            rounds_per_chunk: 0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chunk_count_rounds_up() {
        let config = SimulationConfig {
            rounds: 250,
            rounds_per_chunk: 100,
            ..SimulationConfig::default()
        };
        assert_eq!(config.chunk_count(), 3);

        let exact = SimulationConfig {
            rounds: 300,
            rounds_per_chunk: 100,
            ..SimulationConfig::default()
        };
        assert_eq!(exact.chunk_count(), 3);
    }
}
