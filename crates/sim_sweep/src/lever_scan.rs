//! Optimal-lever scan.
//!
//! Sweeps a grid of leverage factors against one scenario and reports the
//! median terminal value per lever. Every lever is applied to the SAME batch
//! of base paths: the comparison across levers is then free of sampling
//! noise, and the argmax is a meaningful "optimal constant leverage" for the
//! scenario (the discrete-time cousin of the Kelly-style vol-drag optimum).

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use sim_core::{stats, Scenario, SimError};
use sim_paths::{apply_leverage, generate_gbm_path};

use crate::config::{path_rng, SweepConfig};

/// Median terminal values across a lever grid for one scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeverScanResult {
    /// The simulated scenario.
    pub scenario: Scenario,
    /// The scanned leverage factors.
    pub levers: Vec<f64>,
    /// Median terminal value per lever, parallel to `levers`.
    pub median_finals: Vec<f64>,
}

impl LeverScanResult {
    /// The lever with the highest median terminal value, with that median.
    ///
    /// Returns `None` only for an empty scan, which [`lever_scan`] never
    /// produces.
    pub fn optimal(&self) -> Option<(f64, f64)> {
        self.levers
            .iter()
            .zip(&self.median_finals)
            .map(|(&lever, &median)| (lever, median))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Scans leverage factors against one scenario.
///
/// Generates `config.n_paths()` base GBM paths and applies every lever in
/// `levers` to each of them, then reduces terminal values to a median per
/// lever.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] on invalid configuration, scenario
/// or an empty lever grid.
pub fn lever_scan(
    config: &SweepConfig,
    scenario: Scenario,
    levers: &[f64],
) -> Result<LeverScanResult, SimError> {
    config.validate()?;
    if levers.is_empty() {
        return Err(SimError::invalid_parameter(
            "levers",
            "lever scan requires at least one lever",
        ));
    }
    let params = config.path_params(scenario)?;
    let base_seed = config.resolve_seed();
    info!(
        scenario = %scenario.label(),
        n_levers = levers.len(),
        n_paths = config.n_paths(),
        seed = base_seed,
        "lever scan"
    );

    // finals[path][lever]: each base path contributes one terminal value per lever
    let finals: Vec<Vec<f64>> = (0..config.n_paths())
        .into_par_iter()
        .map(|path_idx| {
            let mut rng = path_rng(base_seed, path_idx);
            let base = generate_gbm_path(&params, &mut rng)?;
            levers
                .iter()
                .map(|&lever| {
                    let levered = apply_leverage(base.values(), lever)?;
                    Ok(levered[levered.len() - 1])
                })
                .collect::<Result<Vec<f64>, SimError>>()
        })
        .collect::<Result<_, _>>()?;

    let median_finals = (0..levers.len())
        .map(|lever_idx| {
            let column: Vec<f64> = finals.iter().map(|row| row[lever_idx]).collect();
            stats::median(&column)
        })
        .collect::<Result<Vec<f64>, SimError>>()?;

    Ok(LeverScanResult {
        scenario,
        levers: levers.to_vec(),
        median_finals,
    })
}
