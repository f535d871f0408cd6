//! Optimal-lever command: lever grid scan per scenario.

use clap::Args;
use tracing::info;

use sim_sweep::{lever_scan, AxisRange};

use crate::{commands, config, Result};

/// Arguments for `levsim optimal-lever`.
#[derive(Args, Debug)]
pub struct OptimalLeverArgs {
    /// Output CSV path
    #[arg(short, long)]
    pub output: String,

    /// TOML scenario file (defaults to the built-in scenario spread)
    #[arg(long)]
    pub scenario_file: Option<String>,

    /// First lever of the grid (included)
    #[arg(long, default_value_t = 0.0)]
    pub lever_start: f64,

    /// Upper bound of the lever grid (excluded)
    #[arg(long, default_value_t = 3.5)]
    pub lever_stop: f64,

    /// Lever grid spacing
    #[arg(long, default_value_t = 0.01)]
    pub lever_step: f64,

    /// Number of Monte Carlo base paths per scenario
    #[arg(long, default_value_t = 10_000)]
    pub paths: usize,

    /// Number of daily steps (default: five years)
    #[arg(long, default_value_t = 1825)]
    pub steps: usize,

    /// Initial asset price
    #[arg(long, default_value_t = 100.0)]
    pub initial_value: f64,

    /// Base seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Runs the lever scan per scenario and writes long-format CSV rows.
pub fn run(args: &OptimalLeverArgs) -> Result<()> {
    let scenarios = match &args.scenario_file {
        Some(path) => config::load_scenarios(path)?,
        None => config::default_scan_scenarios(),
    };
    let levers = AxisRange::new(args.lever_start, args.lever_stop, args.lever_step)?.values();
    let sweep = commands::sweep_config(args.paths, args.steps, args.initial_value, args.seed)?;

    let mut writer = csv::Writer::from_path(&args.output)?;
    writer.write_record(["volatility", "expected_return", "lever", "median_final"])?;

    for scenario in scenarios {
        let result = lever_scan(&sweep, scenario, &levers)?;
        for (lever, median_final) in result.levers.iter().zip(&result.median_finals) {
            writer.write_record([
                format!("{}", scenario.volatility),
                format!("{}", scenario.expected_return),
                format!("{}", lever),
                format!("{:.6}", median_final),
            ])?;
        }
        if let Some((best_lever, best_median)) = result.optimal() {
            info!(
                scenario = %scenario.label(),
                best_lever,
                best_median,
                "optimal lever"
            );
        }
    }
    writer.flush()?;

    info!(output = %args.output, "lever scan written");
    Ok(())
}
