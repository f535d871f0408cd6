//! Free geometric Brownian motion path generation.
//!
//! Uses the exact-solution discretisation in log space:
//!
//! ```text
//! S(t+dt) = S(t) × exp((drift − σ²/2)·dt + σ·√dt·Z),   Z ~ N(0, 1)
//! ```
//!
//! with `drift = ln(1 + μ)` derived from the simple annual return and
//! `dt = 1/365` (daily steps). Every per-step factor is an exponential, so
//! positivity of the path holds by construction.

use sim_core::{SimError, DAYS_PER_YEAR};

use crate::path::{PathParams, PricePath};
use crate::rng::SimRng;

/// Generates a free GBM path of length `params.n_steps + 1`.
///
/// The first element equals `params.initial_value`; each subsequent element
/// multiplies the previous one by an exponential per-step factor. With zero
/// volatility the path is the deterministic compounding curve
/// `initial_value · (1+μ)^(i/365)`.
///
/// # Arguments
///
/// * `params` - Validated step count, initial value and scenario
/// * `rng` - Injected entropy source; same seed, same path
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `params` fails validation.
///
/// # Examples
///
/// ```rust
/// use sim_core::Scenario;
/// use sim_paths::{generate_gbm_path, PathParams, SimRng};
///
/// let params = PathParams::new(365, 100.0, Scenario::new(0.2, 0.05).unwrap()).unwrap();
/// let path = generate_gbm_path(&params, &mut SimRng::from_seed(1)).unwrap();
///
/// assert_eq!(path.len(), 366);
/// assert_eq!(path.initial(), 100.0);
/// assert!(path.values().iter().all(|&p| p > 0.0));
/// ```
pub fn generate_gbm_path(params: &PathParams, rng: &mut SimRng) -> Result<PricePath, SimError> {
    params.validate()?;

    let dt = 1.0 / DAYS_PER_YEAR;
    let sigma = params.scenario.volatility;

    // Precompute the per-step drift and diffusion scale
    let drift_dt = (params.scenario.drift() - 0.5 * sigma * sigma) * dt;
    let vol_sqrt_dt = sigma * dt.sqrt();

    let mut draws = vec![0.0; params.n_steps];
    rng.fill_normal(&mut draws);

    let mut values = Vec::with_capacity(params.n_steps + 1);
    values.push(params.initial_value);
    for z in draws {
        let previous = values[values.len() - 1];
        values.push(previous * (drift_dt + vol_sqrt_dt * z).exp());
    }

    Ok(PricePath::from_generated(values))
}
