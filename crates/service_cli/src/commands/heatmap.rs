//! Heatmap command: leveraged/unleveraged ratio over a parameter grid.

use clap::{Args, ValueEnum};
use tracing::info;

use sim_sweep::{heatmap, AxisRange};

use crate::{commands, Result};

/// Export format for the heatmap grid.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Long-format CSV rows: volatility, expected_return, ratio
    Csv,
    /// The full result structure, pretty-printed
    Json,
}

/// Arguments for `levsim heatmap`.
#[derive(Args, Debug)]
pub struct HeatmapArgs {
    /// Output path
    #[arg(short, long)]
    pub output: String,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Leverage factor the grid is computed for
    #[arg(long, default_value_t = 2.0)]
    pub lever: f64,

    /// First volatility of the grid (included)
    #[arg(long, default_value_t = 0.05)]
    pub vol_start: f64,

    /// Upper bound of the volatility axis (excluded)
    #[arg(long, default_value_t = 0.31)]
    pub vol_stop: f64,

    /// Volatility axis spacing
    #[arg(long, default_value_t = 0.01)]
    pub vol_step: f64,

    /// First expected return of the grid (included)
    #[arg(long, default_value_t = 0.0)]
    pub ret_start: f64,

    /// Upper bound of the expected-return axis (excluded)
    #[arg(long, default_value_t = 0.16)]
    pub ret_stop: f64,

    /// Expected-return axis spacing
    #[arg(long, default_value_t = 0.01)]
    pub ret_step: f64,

    /// Number of Monte Carlo paths per cell and batch
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

/// Runs the grid sweep and writes the ratios as CSV or JSON.
pub fn run(args: &HeatmapArgs) -> Result<()> {
    let volatilities = AxisRange::new(args.vol_start, args.vol_stop, args.vol_step)?.values();
    let expected_returns = AxisRange::new(args.ret_start, args.ret_stop, args.ret_step)?.values();
    let sweep = commands::sweep_config(args.paths, args.steps, args.initial_value, args.seed)?;

    let result = heatmap(&sweep, &volatilities, &expected_returns, args.lever)?;

    match args.format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_path(&args.output)?;
            writer.write_record(["volatility", "expected_return", "median_final_ratio"])?;
            for (vol_idx, volatility) in result.volatilities.iter().enumerate() {
                for (ret_idx, expected_return) in result.expected_returns.iter().enumerate() {
                    writer.write_record([
                        format!("{}", volatility),
                        format!("{}", expected_return),
                        format!("{:.6}", result.ratio_at(vol_idx, ret_idx)),
                    ])?;
                }
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let file = std::fs::File::create(&args.output)?;
            serde_json::to_writer_pretty(file, &result)?;
        }
    }

    info!(
        output = %args.output,
        cells = result.ratios.len(),
        lever = args.lever,
        "heatmap written"
    );
    Ok(())
}
