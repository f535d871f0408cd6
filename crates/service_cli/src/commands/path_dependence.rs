//! Path-dependence command: shared-endpoint bridge paths and their
//! leveraged counterparts.

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use sim_sweep::path_dependence;

use crate::{commands, config, Result};

/// Arguments for `levsim path-dependence`.
#[derive(Args, Debug)]
pub struct PathDependenceArgs {
    /// Output CSV path
    #[arg(short, long)]
    pub output: String,

    /// TOML scenario file (defaults to three volatility levels at 8% return)
    #[arg(long)]
    pub scenario_file: Option<String>,

    /// Leverage factor applied to each bridge path
    #[arg(long, default_value_t = 2.0)]
    pub lever: f64,

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

/// Generates one bridge path and its leveraged version per scenario and
/// writes them as paired CSV columns.
pub fn run(args: &PathDependenceArgs) -> Result<()> {
    let scenarios = match &args.scenario_file {
        Some(path) => config::load_scenarios(path)?,
        None => config::default_dependence_scenarios(),
    };
    // One trajectory per scenario; the path count is irrelevant here
    let sweep = commands::sweep_config(1, args.steps, args.initial_value, args.seed)?;

    let results = path_dependence(&sweep, &scenarios, args.lever)?;

    let mut writer = csv::Writer::from_path(&args.output)?;
    let mut header = vec!["date".to_string()];
    for result in &results {
        header.push(format!("{} base", result.scenario.label()));
        header.push(format!("{} lever {:.1}x", result.scenario.label(), args.lever));
    }
    writer.write_record(&header)?;

    for step in 0..=args.steps {
        let mut record = vec![commands::step_date(args.start_date, step).to_string()];
        for result in &results {
            record.push(format!("{:.6}", result.base_path[step]));
            record.push(format!("{:.6}", result.levered_path[step]));
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(
        output = %args.output,
        scenarios = results.len(),
        lever = args.lever,
        "path dependence written"
    );
    Ok(())
}
