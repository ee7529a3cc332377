//! Population Setup
//!
//! Spawns the agent population from an explicitly owned, optionally seeded
//! generator. Seeded runs are fully reproducible; unseeded runs draw from
//! entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::agent::{Agent, Role};
use crate::config::SimulationConfig;

/// Build the initialization RNG from an optional seed.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Spawn the full population with randomized wealth, role, and cooperation
/// index. Draw order is fixed (wealth, role, index, per agent in sequence)
/// so a given seed always produces the same population.
pub fn spawn_agents(config: &SimulationConfig, rng: &mut SmallRng) -> Vec<Agent> {
    (0..config.population_size)
        .map(|_| {
            let wealth =
                rng.gen_range(config.initial_wealth_min..=config.initial_wealth_max) as f64;
            let role = if rng.gen_bool(0.5) {
                Role::Employer
            } else {
                Role::Employee
            };
            let cooperation_index =
                rng.gen_range(config.cooperation_index_min..=config.cooperation_index_max);
            Agent::new(wealth, role, cooperation_index)
        })
        .collect()
}
