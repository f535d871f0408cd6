//! Brownian bridge with drift: shared-endpoint path generation.
//!
//! Produces paths whose terminal value is forced to the drift-implied
//! deterministic value `initial_value · (1+μ)^(n_steps/365)`, while the
//! intermediate values follow a Brownian bridge scaled by volatility. Sample
//! paths therefore share identical start and end values and differ only in
//! trajectory, which isolates the path-dependence of leveraged outcomes from
//! terminal price.
//!
//! Note the drift exponent here carries no `−σ²/2` variance correction,
//! unlike the free GBM generator. The two generators are intentionally not
//! comparable in expectation before the terminal override; reconciling them
//! would change the simulated distributions this toolkit exists to explore.

use sim_core::{SimError, DAYS_PER_YEAR};

use crate::path::{PathParams, PricePath};
use crate::rng::SimRng;

/// Generates a Brownian-bridge-with-drift path of length `params.n_steps + 1`.
///
/// # Algorithm
///
/// 1. Build a Wiener path `w` by cumulative sum of standard normal draws
///    scaled by `1/√365`, with `w[0] = 0`.
/// 2. Pin it into a bridge: `b[i] = w[i] − (i/n_steps)·w[n_steps]`, which is
///    zero at both ends regardless of the realised draws.
/// 3. Exponentiate: `x[i] = exp(drift·i/365 + σ·b[i])`.
/// 4. Override the final element with the exact deterministic terminal value
///    `(1+μ)^(n_steps/365)`.
/// 5. Scale the whole path by `initial_value`.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `params` fails validation.
///
/// # Examples
///
/// ```rust
/// use sim_core::Scenario;
/// use sim_paths::{generate_bridge_path, PathParams, SimRng};
///
/// let params = PathParams::new(730, 100.0, Scenario::new(0.3, 0.08).unwrap()).unwrap();
///
/// // The terminal value is deterministic: every seed lands on the same endpoint
/// let a = generate_bridge_path(&params, &mut SimRng::from_seed(1)).unwrap();
/// let b = generate_bridge_path(&params, &mut SimRng::from_seed(2)).unwrap();
/// assert_eq!(a.terminal(), b.terminal());
/// assert_ne!(a.values()[365], b.values()[365]);
/// ```
pub fn generate_bridge_path(params: &PathParams, rng: &mut SimRng) -> Result<PricePath, SimError> {
    params.validate()?;

    let n_steps = params.n_steps;
    let sigma = params.scenario.volatility;
    let drift = params.scenario.drift();
    let increment_scale = 1.0 / DAYS_PER_YEAR.sqrt();

    let mut draws = vec![0.0; n_steps];
    rng.fill_normal(&mut draws);

    // Wiener path over the step grid
    let mut wiener = Vec::with_capacity(n_steps + 1);
    wiener.push(0.0);
    for z in draws {
        let previous = wiener[wiener.len() - 1];
        wiener.push(previous + z * increment_scale);
    }
    let wiener_terminal = wiener[n_steps];

    let mut values = Vec::with_capacity(n_steps + 1);
    for (i, &w) in wiener.iter().enumerate() {
        let t = i as f64 / n_steps as f64;
        let bridge = w - t * wiener_terminal;
        values.push((drift * i as f64 / DAYS_PER_YEAR + sigma * bridge).exp());
    }

    // Hard override: the endpoint is the drift-implied deterministic value,
    // independent of the realised draws.
    values[n_steps] =
        (1.0 + params.scenario.expected_return).powf(n_steps as f64 / DAYS_PER_YEAR);

    for value in &mut values {
        *value *= params.initial_value;
    }

    Ok(PricePath::from_generated(values))
}
