//! Check command: resolved configuration and a smoke simulation.

use clap::Args;
use tracing::info;

use sim_core::Scenario;
use sim_paths::{apply_leverage, generate_gbm_path, PathParams, SimRng};

use crate::{commands, Result};

/// Arguments for `levsim check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Number of Monte Carlo paths the configuration would use
    #[arg(long, default_value_t = 1_000)]
    pub paths: usize,

    /// Number of daily steps the configuration would use
    #[arg(long, default_value_t = 365)]
    pub steps: usize,

    /// Initial asset price
    #[arg(long, default_value_t = 100.0)]
    pub initial_value: f64,

    /// Base seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Validates the configuration, prints it, and runs a ten-step smoke
/// simulation through the whole kernel.
pub fn run(args: &CheckArgs) -> Result<()> {
    let sweep = commands::sweep_config(args.paths, args.steps, args.initial_value, args.seed)?;

    println!("levsim configuration");
    println!("  paths:         {}", sweep.n_paths());
    println!("  steps:         {}", sweep.n_steps());
    println!("  initial value: {}", sweep.initial_value());
    match sweep.seed() {
        Some(seed) => println!("  seed:          {}", seed),
        None => println!("  seed:          (entropy, drawn per run)"),
    }

    // Smoke run: GBM + leverage over ten steps
    let scenario = Scenario::new(0.15, 0.08)?;
    let params = PathParams::new(10, sweep.initial_value(), scenario)?;
    let mut rng = match sweep.seed() {
        Some(seed) => SimRng::from_seed(seed),
        None => SimRng::from_entropy(),
    };
    let path = generate_gbm_path(&params, &mut rng)?;
    let levered = apply_leverage(path.values(), 2.0)?;
    println!(
        "  smoke run:     10 steps, terminal {:.4} (2x: {:.4}), seed {}",
        path.terminal(),
        levered[levered.len() - 1],
        rng.seed()
    );

    info!("configuration OK");
    Ok(())
}
