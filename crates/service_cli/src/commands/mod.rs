//! CLI command implementations.
//!
//! Each submodule implements one subcommand: argument struct, sweep call,
//! artifact export.

pub mod check;
pub mod heatmap;
pub mod median_paths;
pub mod optimal_lever;
pub mod path_dependence;

use chrono::NaiveDate;
use sim_sweep::SweepConfig;

use crate::Result;

/// Builds a validated sweep configuration from common CLI arguments.
pub(crate) fn sweep_config(
    n_paths: usize,
    n_steps: usize,
    initial_value: f64,
    seed: Option<u64>,
) -> Result<SweepConfig> {
    let mut builder = SweepConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .initial_value(initial_value);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}

/// Clap value parser for `YYYY-MM-DD` dates.
pub(crate) fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD, got '{}': {}", raw, err))
}

/// The calendar date label for step `i` of an exported path.
pub(crate) fn step_date(start: NaiveDate, step: usize) -> NaiveDate {
    start + chrono::Duration::days(step as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2025-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("01/01/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_step_date_offsets_by_days() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(step_date(start, 0), start);
        assert_eq!(
            step_date(start, 365),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_sweep_config_passes_seed_through() {
        let config = sweep_config(10, 20, 100.0, Some(5)).unwrap();
        assert_eq!(config.seed(), Some(5));
        let config = sweep_config(10, 20, 100.0, None).unwrap();
        assert_eq!(config.seed(), None);
    }
}
