//! Error Types
//!
//! Configuration errors are raised at setup time; simulation errors abort a
//! run mid-tick and identify which tick and sub-step triggered the fault.

use thiserror::Error;

use crate::engine::TickPhase;

/// Errors detected while loading or validating a [`crate::SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pairwise interactions index `agents[i + 1]`; an odd population would
    /// fail mid-run, so it is rejected up front.
    #[error("population size {size} must be even when pairwise interactions are enabled")]
    OddPopulation { size: usize },

    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("invalid {name} range: [{low}, {high}]")]
    InvalidRange {
        name: &'static str,
        low: f64,
        high: f64,
    },

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that abort a simulation run.
///
/// All arithmetic faults are fail-fast: no partial or recovered continuation
/// is defined. The silent consumption skip for non-positive wealth is
/// intentional economic modeling, not an error path.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// An agent's wealth became NaN or infinite.
    #[error("agent {agent} reached non-finite wealth at tick {tick} during {phase}")]
    NonFiniteWealth {
        tick: u64,
        phase: TickPhase,
        agent: usize,
    },

    /// The market balance became NaN or infinite.
    #[error("market balance became non-finite at tick {tick} during {phase}")]
    NonFiniteBalance { tick: u64, phase: TickPhase },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
