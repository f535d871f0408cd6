//! levsim CLI - Volatility Drag Exploration from the Command Line
//!
//! Operational entry point for the levsim workspace. Each subcommand runs
//! one of the Monte Carlo sweeps and writes its numeric results to CSV (or
//! JSON) for an external renderer to plot.
//!
//! # Commands
//!
//! - `levsim median-paths` - median leveraged paths per scenario/lever pair
//! - `levsim optimal-lever` - median terminal value across a lever grid
//! - `levsim heatmap` - leveraged/unleveraged ratio over a vol × return grid
//! - `levsim path-dependence` - shared-endpoint bridge paths and their
//!   leveraged counterparts
//! - `levsim check` - print the resolved configuration and exit

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// levsim: constant-leverage rebalancing simulator
#[derive(Parser)]
#[command(name = "levsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute median leveraged paths for scenario/lever pairs
    MedianPaths(commands::median_paths::MedianPathsArgs),

    /// Scan a lever grid for the median-maximising constant leverage
    OptimalLever(commands::optimal_lever::OptimalLeverArgs),

    /// Sweep a volatility × expected-return grid at a fixed leverage
    Heatmap(commands::heatmap::HeatmapArgs),

    /// Demonstrate path dependence with shared-endpoint bridge paths
    PathDependence(commands::path_dependence::PathDependenceArgs),

    /// Print the resolved configuration and dependencies
    Check(commands::check::CheckArgs),
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::MedianPaths(args) => commands::median_paths::run(&args),
        Commands::OptimalLever(args) => commands::optimal_lever::run(&args),
        Commands::Heatmap(args) => commands::heatmap::run(&args),
        Commands::PathDependence(args) => commands::path_dependence::run(&args),
        Commands::Check(args) => commands::check::run(&args),
    }
}
