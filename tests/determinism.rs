//! Determinism verification tests
//!
//! Two runs with the same seed and configuration must produce identical
//! aggregate series; different seeds must diverge.

use econosim::{SimulationConfig, SimulationEngine, WealthSeries};

fn run_series(seed: u64, config: &SimulationConfig) -> WealthSeries {
    let config = SimulationConfig {
        seed: Some(seed),
        ..config.clone()
    };
    let mut engine = SimulationEngine::new(config).expect("valid config");
    engine.run().expect("run completes");
    engine.into_series()
}

#[test]
fn test_same_seed_same_series() {
    let config = SimulationConfig {
        population_size: 50,
        ticks: 200,
        ..SimulationConfig::default()
    };

    let first = run_series(42, &config);
    let second = run_series(42, &config);

    assert_eq!(first.employer_wealth, second.employer_wealth);
    assert_eq!(first.employee_wealth, second.employee_wealth);
    assert_eq!(first.satisfaction, second.satisfaction);
}

#[test]
fn test_different_seeds_diverge() {
    let config = SimulationConfig {
        population_size: 50,
        ticks: 50,
        ..SimulationConfig::default()
    };

    let first = run_series(42, &config);
    let second = run_series(43, &config);

    assert_ne!(first.satisfaction, second.satisfaction);
}

#[test]
fn test_determinism_holds_without_pairwise_rules() {
    let config = SimulationConfig {
        population_size: 25,
        ticks: 100,
        enable_competition: false,
        enable_cooperation: false,
        ..SimulationConfig::default()
    };

    let first = run_series(7, &config);
    let second = run_series(7, &config);

    assert_eq!(first.employer_wealth, second.employer_wealth);
    assert_eq!(first.employee_wealth, second.employee_wealth);
}
