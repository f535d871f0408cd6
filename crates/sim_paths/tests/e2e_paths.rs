//! End-to-end tests for the path generation kernel.
//!
//! These exercise the full call chain the sweeps rely on: parameters in,
//! generator out, leverage transform over the generated path.

use approx::assert_relative_eq;
use sim_core::{Scenario, DAYS_PER_YEAR};
use sim_paths::{
    apply_leverage, generate_bridge_path, generate_gbm_path, PathParams, PricePath, SimRng,
};

const FIVE_YEARS: usize = 5 * 365;

fn sp500_like() -> PathParams {
    PathParams::new(FIVE_YEARS, 100.0, Scenario::new(0.15, 0.08).unwrap()).unwrap()
}

#[test]
fn e2e_gbm_then_leverage_preserves_shape() {
    let params = sp500_like();
    let mut rng = SimRng::from_seed(42);

    let path = generate_gbm_path(&params, &mut rng).unwrap();
    assert_eq!(path.len(), FIVE_YEARS + 1);

    for lever in [0.0, 0.5, 1.0, 2.0, 3.0] {
        let levered = apply_leverage(path.values(), lever).unwrap();
        assert_eq!(levered.len(), path.len());
        assert_eq!(levered[0], path.initial());
    }
}

#[test]
fn e2e_bridge_paths_share_endpoints_but_levered_finals_differ() {
    let params = PathParams::new(FIVE_YEARS, 100.0, Scenario::new(0.30, 0.08).unwrap()).unwrap();
    let expected_terminal = 100.0 * (1.08_f64).powf(FIVE_YEARS as f64 / DAYS_PER_YEAR);

    let mut levered_finals = Vec::new();
    for seed in 0..8 {
        let path = generate_bridge_path(&params, &mut SimRng::from_seed(seed)).unwrap();
        assert_relative_eq!(path.terminal(), expected_terminal, max_relative = 1e-12);

        let levered = apply_leverage(path.values(), 2.0).unwrap();
        levered_finals.push(levered[levered.len() - 1]);
    }

    // Identical unleveraged endpoints, distinct leveraged endpoints: the
    // leveraged outcome depends on the trajectory, not just the terminal.
    let first = levered_finals[0];
    assert!(levered_finals.iter().skip(1).any(|&v| v != first));
}

#[test]
fn e2e_leverage_on_bridge_average_drag() {
    // With a deterministic endpoint above the start, the 2x version should
    // typically finish below 2x-the-return because of volatility drag.
    let params = PathParams::new(FIVE_YEARS, 100.0, Scenario::new(0.30, 0.08).unwrap()).unwrap();
    let unleveraged_final = 100.0 * (1.08_f64).powf(FIVE_YEARS as f64 / DAYS_PER_YEAR);
    let naive_doubled_gain = 100.0 + 2.0 * (unleveraged_final - 100.0);

    let n = 200;
    let below = (0..n)
        .filter(|&seed| {
            let path = generate_bridge_path(&params, &mut SimRng::from_seed(seed)).unwrap();
            let levered = apply_leverage(path.values(), 2.0).unwrap();
            levered[levered.len() - 1] < naive_doubled_gain
        })
        .count();

    // At 30% volatility the drag dominates; allow a small minority of lucky paths.
    assert!(below > (n as usize) * 3 / 4, "only {}/{} paths showed drag", below, n);
}

#[test]
fn e2e_external_path_validation_round_trip() {
    // Externally supplied data goes through the validating constructor
    let path = PricePath::from_values(vec![100.0, 104.0, 101.0, 108.0]).unwrap();
    let levered = apply_leverage(path.values(), 1.0).unwrap();
    for (original, levered) in path.values().iter().zip(&levered) {
        assert_relative_eq!(original, levered, max_relative = 1e-12);
    }

    assert!(PricePath::from_values(vec![100.0, -1.0]).is_err());
}
