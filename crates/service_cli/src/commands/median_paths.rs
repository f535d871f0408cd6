//! Median-paths command: typical leveraged trajectories per scenario.

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use sim_sweep::{median_paths, LeveredScenario};

use crate::{commands, config, Result};

/// Arguments for `levsim median-paths`.
#[derive(Args, Debug)]
pub struct MedianPathsArgs {
    /// Output CSV path
    #[arg(short, long)]
    pub output: String,

    /// TOML scenario file (defaults to an S&P-500-like scenario)
    #[arg(long)]
    pub scenario_file: Option<String>,

    /// Leverage factors applied to every scenario
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.5, 1.0, 2.0])]
    pub levers: Vec<f64>,

    /// Number of Monte Carlo paths per scenario/lever pair
    #[arg(long, default_value_t = 100)]
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

    /// Calendar date of step 0 in the exported CSV
    #[arg(long, default_value = "2025-01-01", value_parser = super::parse_date)]
    pub start_date: NaiveDate,
}

/// Runs the median-paths sweep and writes one CSV column per run.
pub fn run(args: &MedianPathsArgs) -> Result<()> {
    let scenarios = match &args.scenario_file {
        Some(path) => config::load_scenarios(path)?,
        None => vec![config::default_median_scenario()],
    };
    let runs: Vec<LeveredScenario> = scenarios
        .iter()
        .flat_map(|&scenario| {
            args.levers
                .iter()
                .map(move |&lever| LeveredScenario { scenario, lever })
        })
        .collect();

    let sweep = commands::sweep_config(args.paths, args.steps, args.initial_value, args.seed)?;
    let results = median_paths(&sweep, &runs)?;

    let mut writer = csv::Writer::from_path(&args.output)?;
    let mut header = vec!["date".to_string()];
    header.extend(runs.iter().map(LeveredScenario::label));
    writer.write_record(&header)?;

    for step in 0..=args.steps {
        let mut record = vec![commands::step_date(args.start_date, step).to_string()];
        for result in &results {
            record.push(format!("{:.6}", result.median_path[step]));
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(
        output = %args.output,
        runs = results.len(),
        "median paths written"
    );
    Ok(())
}
