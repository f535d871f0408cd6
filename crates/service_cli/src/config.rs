//! Scenario file loading and built-in scenario sets.
//!
//! The sweep studies were originally driven by hard-coded scenario lists;
//! here those lists are explicit data: either built-in defaults or a TOML
//! file supplied with `--scenario-file`:
//!
//! ```toml
//! [[scenarios]]
//! volatility = 0.15
//! expected_return = 0.08
//!
//! [[scenarios]]
//! volatility = 0.30
//! expected_return = 0.03
//! ```

use serde::Deserialize;
use sim_core::Scenario;

use crate::{CliError, Result};

/// On-disk scenario list.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    scenarios: Vec<ScenarioEntry>,
}

/// One scenario entry in a TOML scenario file.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ScenarioEntry {
    volatility: f64,
    expected_return: f64,
}

/// Loads and validates scenarios from a TOML file.
pub fn load_scenarios(path: &str) -> Result<Vec<Scenario>> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    parse_scenarios(&raw)
}

fn parse_scenarios(raw: &str) -> Result<Vec<Scenario>> {
    let file: ScenarioFile = toml::from_str(raw)?;
    if file.scenarios.is_empty() {
        return Err(CliError::InvalidArgument(
            "scenario file contains no scenarios".to_string(),
        ));
    }
    file.scenarios
        .iter()
        .map(|entry| Ok(Scenario::new(entry.volatility, entry.expected_return)?))
        .collect()
}

/// Built-in scenarios for the optimal-lever scan.
///
/// A spread of volatility/return pairs around realistic equity-index values,
/// including an S&P-500-like scenario with and without a financing-cost
/// haircut on the expected return.
pub fn default_scan_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            volatility: 0.15,
            expected_return: 0.08,
        },
        // S&P 500 minus a central-bank financing rate
        Scenario {
            volatility: 0.15,
            expected_return: 0.08 - 0.0325,
        },
        Scenario {
            volatility: 0.20,
            expected_return: 0.08,
        },
        Scenario {
            volatility: 0.20,
            expected_return: 0.05,
        },
        Scenario {
            volatility: 0.30,
            expected_return: 0.03,
        },
        Scenario {
            volatility: 0.30,
            expected_return: 0.10,
        },
    ]
}

/// Built-in scenarios for the path-dependence demonstration: one expected
/// return, three volatility levels.
pub fn default_dependence_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            volatility: 0.05,
            expected_return: 0.08,
        },
        Scenario {
            volatility: 0.15,
            expected_return: 0.08,
        },
        Scenario {
            volatility: 0.30,
            expected_return: 0.08,
        },
    ]
}

/// Built-in scenario for median-path runs: roughly the S&P 500.
pub fn default_median_scenario() -> Scenario {
    Scenario {
        volatility: 0.15,
        expected_return: 0.08,
    }
}
