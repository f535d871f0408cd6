//! CLI error type.
//!
//! Wraps every failure source a command can hit (simulation errors, IO,
//! and the various parse/serialise layers) into one error with `#[from]`
//! conversions so command bodies stay `?`-only.

use thiserror::Error;

/// Errors surfaced by the levsim CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Simulation or sweep failure.
    #[error("simulation error: {0}")]
    Sim(#[from] sim_core::SimError),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Scenario file parse failure.
    #[error("scenario file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON export failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A referenced input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument combination the type system cannot rule out.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result alias for CLI code.
pub type Result<T> = std::result::Result<T, CliError>;
