//! Simulation Engine
//!
//! Owns the agent population, the market, and the government, and drives the
//! fixed-length tick loop. The sub-step order within a tick is semantics:
//! later agents' computations depend on earlier agents' effects (the work
//! draw reads a market balance already debited by earlier workers), so every
//! sub-step completes for the whole population before the next begins.

use tracing::{debug, info};

use crate::components::agent::Agent;
use crate::components::government::Government;
use crate::components::market::Market;
use crate::config::{SatisfactionMetric, SimulationConfig};
use crate::error::{ConfigError, SimulationError};
use crate::output::metrics::{MetricsSink, NullSink, TickMetrics, WealthSeries};
use crate::setup;

/// Sub-steps of a tick, in execution order. Reported when a run aborts so
/// the fault can be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    MarketAdjust,
    Competition,
    Cooperation,
    WorkConsumeAdapt,
    Taxation,
}

impl std::fmt::Display for TickPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TickPhase::MarketAdjust => "market adjustment",
            TickPhase::Competition => "competition",
            TickPhase::Cooperation => "cooperation",
            TickPhase::WorkConsumeAdapt => "work/consume/adapt",
            TickPhase::Taxation => "taxation",
        };
        f.write_str(name)
    }
}

/// The simulation engine. Exclusively owns all mutable state for the
/// duration of a run; single-threaded and synchronous throughout.
pub struct SimulationEngine {
    config: SimulationConfig,
    agents: Vec<Agent>,
    market: Market,
    government: Government,
    series: WealthSeries,
    current_tick: u64,
}

impl SimulationEngine {
    /// Build an engine from a validated config, spawning the population
    /// from the config's (optionally seeded) RNG.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = setup::make_rng(config.seed);
        let agents = setup::spawn_agents(&config, &mut rng);
        let market = Market::new(config.initial_market_balance);
        Ok(Self::from_parts(config, agents, market))
    }

    /// Build an engine over an explicit population and market, for scripted
    /// scenarios. `population_size` is taken from the slice, not the config.
    pub fn with_population(
        mut config: SimulationConfig,
        agents: Vec<Agent>,
        market: Market,
    ) -> Result<Self, ConfigError> {
        if agents.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }
        if config.pairwise_enabled() && agents.len() % 2 != 0 {
            return Err(ConfigError::OddPopulation { size: agents.len() });
        }
        config.population_size = agents.len();
        Ok(Self::from_parts(config, agents, market))
    }

    fn from_parts(config: SimulationConfig, agents: Vec<Agent>, market: Market) -> Self {
        let series = WealthSeries::with_capacity(config.ticks as usize);
        Self {
            config,
            agents,
            market,
            government: Government::new(),
            series,
            current_tick: 0,
        }
    }

    /// Run the configured number of ticks, recording aggregates internally.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        self.run_with_sink(&mut NullSink)
    }

    /// Run the configured number of ticks, forwarding each tick's
    /// aggregates to `sink` as they are produced.
    pub fn run_with_sink(&mut self, sink: &mut dyn MetricsSink) -> Result<(), SimulationError> {
        info!(
            population = self.agents.len(),
            ticks = self.config.ticks,
            seed = ?self.config.seed,
            market_balance = self.market.balance(),
            "starting simulation"
        );

        for _ in 0..self.config.ticks {
            self.step(sink)?;

            if self.current_tick % 100 == 0 {
                debug!(
                    tick = self.current_tick,
                    market_balance = self.market.balance(),
                    "progress"
                );
            }
        }

        info!(ticks = self.current_tick, "simulation complete");
        Ok(())
    }

    /// Advance one tick. Sub-step order is fixed: market adjustment,
    /// pairwise competition across all pairs, pairwise cooperation across
    /// all pairs, then work/consume/adapt per agent in index order, then
    /// taxation, then metrics.
    fn step(&mut self, sink: &mut dyn MetricsSink) -> Result<(), SimulationError> {
        self.market.adjust_conditions();
        self.check_state(TickPhase::MarketAdjust)?;

        if self.config.enable_competition {
            self.run_pairwise(Agent::compete);
            self.check_state(TickPhase::Competition)?;
        }
        if self.config.enable_cooperation {
            self.run_pairwise(Agent::cooperate);
            self.check_state(TickPhase::Cooperation)?;
        }

        for agent in &mut self.agents {
            agent.work(&mut self.market);
            agent.consume(&mut self.market);
            agent.adapt();
        }
        self.check_state(TickPhase::WorkConsumeAdapt)?;

        self.government.tax_and_redistribute(&mut self.agents);
        self.check_state(TickPhase::Taxation)?;

        let metrics = self.collect_metrics();
        self.series.push(&metrics);
        sink.record_tick(&metrics);

        self.current_tick += 1;
        Ok(())
    }

    /// Apply a pairwise interaction over agents in fixed index order,
    /// pairing `(2k, 2k + 1)`. Construction guarantees an even population
    /// whenever this can run.
    fn run_pairwise(&mut self, interact: fn(&mut Agent, &mut Agent)) {
        for k in (0..self.agents.len()).step_by(2) {
            let (left, right) = self.agents.split_at_mut(k + 1);
            interact(&mut left[k], &mut right[0]);
        }
    }

    /// Fail fast on non-finite state, identifying tick and sub-step. The
    /// reference rules are reproduced unclamped, so wealth may legitimately
    /// go negative; only NaN/infinity aborts the run.
    fn check_state(&self, phase: TickPhase) -> Result<(), SimulationError> {
        for (index, agent) in self.agents.iter().enumerate() {
            if !agent.wealth.is_finite() {
                return Err(SimulationError::NonFiniteWealth {
                    tick: self.current_tick,
                    phase,
                    agent: index,
                });
            }
        }
        if !self.market.balance().is_finite() {
            return Err(SimulationError::NonFiniteBalance {
                tick: self.current_tick,
                phase,
            });
        }
        Ok(())
    }

    fn collect_metrics(&self) -> TickMetrics {
        let mut employer_wealth = 0.0;
        let mut employee_wealth = 0.0;
        for agent in &self.agents {
            if agent.role.is_employer() {
                employer_wealth += agent.wealth;
            } else {
                employee_wealth += agent.wealth;
            }
        }

        let satisfaction = match self.config.satisfaction_metric {
            SatisfactionMetric::WealthWeighted => self
                .agents
                .iter()
                .map(|a| a.wealth * a.cooperation_index)
                .sum(),
            SatisfactionMetric::MeanCooperation => {
                self.agents.iter().map(|a| a.cooperation_index).sum::<f64>()
                    / self.agents.len() as f64
            }
        };

        TickMetrics {
            tick: self.current_tick,
            employer_wealth,
            employee_wealth,
            satisfaction,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        self.agents.as_slice()
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn series(&self) -> &WealthSeries {
        &self.series
    }

    pub fn into_series(self) -> WealthSeries {
        self.series
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }
}
