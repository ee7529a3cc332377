//! Configuration System
//!
//! Simulation parameters are plain struct fields with reference defaults,
//! optionally overridden from a TOML tuning file so runs can be adjusted
//! without recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// How the per-tick satisfaction aggregate is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionMetric {
    /// Sum of `wealth * cooperation_index` over all agents.
    WealthWeighted,
    /// Average cooperation index over all agents.
    MeanCooperation,
}

/// Top-level simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of agents; constant for the whole run. Must be even when any
    /// pairwise interaction is enabled.
    pub population_size: usize,
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// Initial pooled market balance.
    pub initial_market_balance: f64,
    /// Initial agent wealth is an integer drawn uniformly from this range.
    pub initial_wealth_min: i64,
    pub initial_wealth_max: i64,
    /// Per-agent cooperation index is drawn uniformly from this range and
    /// fixed for the agent's lifetime.
    pub cooperation_index_min: f64,
    pub cooperation_index_max: f64,
    /// Run the zero-sum competition pass over agent pairs each tick.
    pub enable_competition: bool,
    /// Run the cooperation pass over agent pairs each tick.
    pub enable_cooperation: bool,
    /// Which satisfaction aggregate to record per tick.
    pub satisfaction_metric: SatisfactionMetric,
    /// Seed for the initialization RNG; unseeded runs draw from entropy and
    /// are not reproducible.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            ticks: 500,
            initial_market_balance: 5000.0,
            initial_wealth_min: 20,
            initial_wealth_max: 100,
            cooperation_index_min: 0.8,
            cooperation_index_max: 1.2,
            enable_competition: true,
            enable_cooperation: true,
            satisfaction_metric: SatisfactionMetric::WealthWeighted,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default path, or use defaults if the
    /// file is not present.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Whether any pairwise interaction pass runs each tick.
    pub fn pairwise_enabled(&self) -> bool {
        self.enable_competition || self.enable_cooperation
    }

    /// Check invariants that would otherwise surface as mid-run faults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.pairwise_enabled() && self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation {
                size: self.population_size,
            });
        }
        if self.initial_wealth_min > self.initial_wealth_max {
            return Err(ConfigError::InvalidRange {
                name: "initial wealth",
                low: self.initial_wealth_min as f64,
                high: self.initial_wealth_max as f64,
            });
        }
        if self.cooperation_index_min > self.cooperation_index_max {
            return Err(ConfigError::InvalidRange {
                name: "cooperation index",
                low: self.cooperation_index_min,
                high: self.cooperation_index_max,
            });
        }
        Ok(())
    }
}
