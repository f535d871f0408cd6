//! Volatility × expected-return ratio grid.
//!
//! For every (σ, μ) cell: simulate terminal values with and without leverage
//! and report the ratio of medians. A ratio above 1 means the leveraged
//! product typically beat the unleveraged one over the horizon; below 1, the
//! volatility drag won.
//!
//! The leveraged and unleveraged batches use independent draws per cell;
//! the ratio of medians is robust enough at the configured path counts that
//! pairing the draws is not needed.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use sim_core::{stats, Scenario, SimError};
use sim_paths::{apply_leverage, generate_gbm_path};

use crate::config::{path_rng, SweepConfig};

/// Median-outcome ratio grid over volatility × expected return.
///
/// `ratios` is row-major with one row per volatility:
/// `ratios[vol_idx · expected_returns.len() + ret_idx]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapResult {
    /// Volatility axis (row labels).
    pub volatilities: Vec<f64>,
    /// Expected-return axis (column labels).
    pub expected_returns: Vec<f64>,
    /// The leverage factor the grid was computed for.
    pub lever: f64,
    /// Median(leveraged final) / median(unleveraged final), row-major.
    pub ratios: Vec<f64>,
}

impl HeatmapResult {
    /// Ratio at one grid cell.
    #[inline]
    pub fn ratio_at(&self, vol_idx: usize, ret_idx: usize) -> f64 {
        self.ratios[vol_idx * self.expected_returns.len() + ret_idx]
    }

    /// Number of grid rows (volatilities).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.volatilities.len()
    }

    /// Number of grid columns (expected returns).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.expected_returns.len()
    }
}

/// Computes the leveraged/unleveraged median-final ratio over a grid.
///
/// Cells are independent and simulated in parallel; each cell derives its
/// seeds from the base seed and its stable cell index.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] on invalid configuration, empty
/// axes, or out-of-domain axis values (e.g. a negative volatility on the
/// axis).
pub fn heatmap(
    config: &SweepConfig,
    volatilities: &[f64],
    expected_returns: &[f64],
    lever: f64,
) -> Result<HeatmapResult, SimError> {
    config.validate()?;
    if volatilities.is_empty() {
        return Err(SimError::invalid_parameter(
            "volatilities",
            "heatmap requires at least one volatility",
        ));
    }
    if expected_returns.is_empty() {
        return Err(SimError::invalid_parameter(
            "expected_returns",
            "heatmap requires at least one expected return",
        ));
    }

    let base_seed = config.resolve_seed();
    let n_cols = expected_returns.len();
    let n_cells = volatilities.len() * n_cols;
    info!(
        n_cells,
        n_paths = config.n_paths(),
        lever,
        seed = base_seed,
        "heatmap sweep"
    );

    let ratios: Vec<f64> = (0..n_cells)
        .into_par_iter()
        .map(|cell_idx| {
            let scenario = Scenario::new(
                volatilities[cell_idx / n_cols],
                expected_returns[cell_idx % n_cols],
            )?;
            let params = config.path_params(scenario)?;
            // Each cell owns a seed block; within it, even path indices feed
            // the leveraged batch and odd ones the unleveraged batch.
            let cell_seed = base_seed.wrapping_add((cell_idx as u64) << 32);

            let mut leveraged_finals = Vec::with_capacity(config.n_paths());
            let mut unleveraged_finals = Vec::with_capacity(config.n_paths());
            for path_idx in 0..config.n_paths() {
                let mut rng = path_rng(cell_seed, 2 * path_idx);
                let path = generate_gbm_path(&params, &mut rng)?;
                let levered = apply_leverage(path.values(), lever)?;
                leveraged_finals.push(levered[levered.len() - 1]);

                let mut rng = path_rng(cell_seed, 2 * path_idx + 1);
                let path = generate_gbm_path(&params, &mut rng)?;
                let unlevered = apply_leverage(path.values(), 1.0)?;
                unleveraged_finals.push(unlevered[unlevered.len() - 1]);
            }

            Ok(stats::median(&leveraged_finals)? / stats::median(&unleveraged_finals)?)
        })
        .collect::<Result<_, _>>()?;

    Ok(HeatmapResult {
        volatilities: volatilities.to_vec(),
        expected_returns: expected_returns.to_vec(),
        lever,
        ratios,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(n_paths: usize, n_steps: usize) -> SweepConfig {
        SweepConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_grid_shape() {
        let result = heatmap(
            &config(40, 60),
            &[0.1, 0.2, 0.3],
            &[0.0, 0.05],
            2.0,
        )
        .unwrap();
        assert_eq!(result.n_rows(), 3);
        assert_eq!(result.n_cols(), 2);
        assert_eq!(result.ratios.len(), 6);
    }

    #[test]
    fn test_ratio_at_indexing() {
        let result = HeatmapResult {
            volatilities: vec![0.1, 0.2],
            expected_returns: vec![0.0, 0.05, 0.10],
            lever: 2.0,
            ratios: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        };
        assert_eq!(result.ratio_at(0, 0), 1.0);
        assert_eq!(result.ratio_at(0, 2), 3.0);
        assert_eq!(result.ratio_at(1, 0), 4.0);
        assert_eq!(result.ratio_at(1, 2), 6.0);
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = heatmap(&config(30, 50), &[0.15, 0.25], &[0.04], 2.0).unwrap();
        let b = heatmap(&config(30, 50), &[0.15, 0.25], &[0.04], 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_volatility_zero_return_ratio_is_one() {
        // Deterministic flat paths: leveraging a constant path changes nothing
        let result = heatmap(&config(10, 30), &[0.0], &[0.0], 2.0).unwrap();
        assert_relative_eq!(result.ratios[0], 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_drag_dominates_high_volatility_low_return() {
        // 30% volatility, 0% return, 2x lever over two years: the leveraged
        // median decays well below the unleveraged one.
        let result = heatmap(&config(300, 730), &[0.30], &[0.0], 2.0).unwrap();
        assert!(
            result.ratios[0] < 0.95,
            "expected drag ratio < 0.95, got {}",
            result.ratios[0]
        );
    }

    #[test]
    fn test_lever_one_ratio_is_near_one() {
        // Both batches sample the same distribution; with enough paths
        // the ratio of medians sits near 1.
        let result = heatmap(&config(2000, 30), &[0.2], &[0.05], 1.0).unwrap();
        assert!(
            (result.ratios[0] - 1.0).abs() < 0.05,
            "ratio {} too far from 1",
            result.ratios[0]
        );
    }

    #[test]
    fn test_empty_axes_rejected() {
        assert!(heatmap(&config(10, 10), &[], &[0.05], 2.0).is_err());
        assert!(heatmap(&config(10, 10), &[0.1], &[], 2.0).is_err());
    }

    #[test]
    fn test_negative_axis_volatility_rejected() {
        assert!(heatmap(&config(10, 10), &[-0.1], &[0.05], 2.0).is_err());
    }
}
