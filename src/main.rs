//! Agent-Based Wealth Exchange Simulation
//!
//! Runs the tick loop over a randomized population and writes the recorded
//! aggregate series as JSON for the external rendering layer.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use econosim::output::write_series;
use econosim::{SimulationConfig, SimulationEngine};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "econosim")]
#[command(about = "An agent-based wealth exchange simulation")]
struct Args {
    /// Random seed for reproducibility; unseeded runs draw from entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Number of agents (must be even when pairwise interactions are enabled)
    #[arg(long)]
    agents: Option<usize>,

    /// Tuning file with full simulation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the recorded series as JSON
    #[arg(long, default_value = "output/metrics.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::load_or_default(),
    };

    // CLI flags override the tuning file
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(agents) = args.agents {
        config.population_size = agents;
    }

    let mut engine = SimulationEngine::new(config)?;
    engine.run()?;

    let series = engine.into_series();
    write_series(&series, &args.output)?;
    info!(
        path = %args.output.display(),
        ticks = series.len(),
        "wrote metrics series"
    );
    Ok(())
}
