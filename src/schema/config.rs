//! Configuration types for landscape search parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Engine configuration. Fixed once an engine is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandscapeConfig {
    /// Length of every generated sequence.
    #[serde(default = "default_seq_length")]
    pub seq_length: usize,
    /// Number of candidates generated per round.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Number of winners archived per round.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            seq_length: default_seq_length(),
            pool_size: default_pool_size(),
            top_k: default_top_k(),
            random_seed: None,
        }
    }
}

fn default_seq_length() -> usize {
    16
}
fn default_pool_size() -> usize {
    200
}
fn default_top_k() -> usize {
    20
}

impl LandscapeConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seq_length == 0 {
            return Err(ConfigError::ZeroSequenceLength);
        }
        if self.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        if self.top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }
        if self.top_k > self.pool_size {
            return Err(ConfigError::TopKExceedsPool {
                top_k: self.top_k,
                pool_size: self.pool_size,
            });
        }
        Ok(())
    }
}

/// A complete batch run: engine settings plus how many rounds to play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Engine configuration.
    #[serde(default)]
    pub landscape: LandscapeConfig,
    /// Number of rounds to run.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Multiplier applied to the novelty term of the fitness.
    #[serde(default = "default_novelty_weight")]
    pub novelty_weight: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            landscape: LandscapeConfig::default(),
            rounds: default_rounds(),
            novelty_weight: default_novelty_weight(),
        }
    }
}

fn default_rounds() -> usize {
    10
}
fn default_novelty_weight() -> f32 {
    1.0
}

impl RunConfig {
    /// Read a run configuration from a JSON file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RunConfigError> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the engine settings and the novelty weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.landscape.validate()?;
        if !self.novelty_weight.is_finite() {
            return Err(ConfigError::InvalidNoveltyWeight(self.novelty_weight));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Sequence length must be non-zero")]
    ZeroSequenceLength,
    #[error("Pool size must be non-zero")]
    ZeroPoolSize,
    #[error("Top-k must be non-zero")]
    ZeroTopK,
    #[error("Top-k ({top_k}) exceeds pool size ({pool_size})")]
    TopKExceedsPool { top_k: usize, pool_size: usize },
    #[error("Novelty weight must be finite, got {0}")]
    InvalidNoveltyWeight(f32),
}

/// Errors raised while loading a [`RunConfig`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum RunConfigError {
    #[error("Failed to read run config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse run config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid run config: {0}")]
    Invalid(#[from] ConfigError),
}
