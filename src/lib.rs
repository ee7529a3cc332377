//! Agent-Based Wealth Exchange Simulation
//!
//! A discrete-time toy economy: a population of agents exchanges wealth with
//! a shared market under taxation, cooperation, and competition rules. The
//! engine drives a fixed-length tick loop and records per-tick aggregate
//! series for an external rendering layer.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod setup;

pub use components::{Agent, Government, Market, Role};
pub use config::{SatisfactionMetric, SimulationConfig};
pub use engine::{SimulationEngine, TickPhase};
pub use error::{ConfigError, SimulationError};
pub use output::{MetricsSink, NullSink, TickMetrics, WealthSeries};
