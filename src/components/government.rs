//! Government
//!
//! Stateless two-tier taxation over the whole population: deduct federal and
//! regional tax from every agent, then redistribute the pooled total evenly.
//! Wealth-conserving in exact arithmetic; floating-point drift is accepted.

use crate::components::agent::Agent;

/// Federal tax rate applied to every agent's wealth.
pub const FEDERAL_TAX_RATE: f64 = 0.07;
/// Regional tax rate applied to every agent's wealth.
pub const REGIONAL_TAX_RATE: f64 = 0.03;

/// The taxing authority. Holds no state; operates over the full agent
/// collection each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Government;

impl Government {
    pub fn new() -> Self {
        Self
    }

    /// Two-pass taxation: pass 1 deducts both tiers from every agent and
    /// accumulates the totals, pass 2 credits every agent an even share of
    /// the pool. Redistribution is agent-to-agent and never touches the
    /// market.
    ///
    /// There is no guard against wealth going non-positive here; repeated
    /// taxation of a poor agent can drive it below zero (reference
    /// semantics, see the engine's fail-fast checks).
    pub fn tax_and_redistribute(&self, agents: &mut [Agent]) {
        if agents.is_empty() {
            return;
        }

        let mut total_federal = 0.0;
        let mut total_regional = 0.0;

        for agent in agents.iter_mut() {
            let federal = agent.wealth * FEDERAL_TAX_RATE;
            let regional = agent.wealth * REGIONAL_TAX_RATE;
            agent.wealth -= federal + regional;
            total_federal += federal;
            total_regional += regional;
        }

        let share = (total_federal + total_regional) / agents.len() as f64;
        for agent in agents.iter_mut() {
            agent.wealth += share;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::Role;

    fn population(wealths: &[f64]) -> Vec<Agent> {
        wealths
            .iter()
            .map(|&w| Agent::new(w, Role::Employee, 1.0))
            .collect()
    }

    #[test]
    fn test_tax_conserves_total_wealth() {
        let mut agents = population(&[20.0, 55.5, 100.0, 3.25, 999.0]);
        let before: f64 = agents.iter().map(|a| a.wealth).sum();
        Government::new().tax_and_redistribute(&mut agents);
        let after: f64 = agents.iter().map(|a| a.wealth).sum();
        assert!((after - before).abs() <= before.abs() * 1e-9);
    }

    #[test]
    fn test_tax_moves_wealth_toward_the_mean() {
        let mut agents = population(&[100.0, 0.0]);
        Government::new().tax_and_redistribute(&mut agents);
        // Rich agent pays 10, both get 5 back
        assert!((agents[0].wealth - 95.0).abs() < 1e-9);
        assert!((agents[1].wealth - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_population_unchanged() {
        let mut agents = population(&[40.0, 40.0, 40.0, 40.0]);
        Government::new().tax_and_redistribute(&mut agents);
        for agent in &agents {
            assert!((agent.wealth - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_population_is_noop() {
        let mut agents: Vec<Agent> = Vec::new();
        Government::new().tax_and_redistribute(&mut agents);
    }
}
