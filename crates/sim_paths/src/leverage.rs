//! Daily-rebalanced constant-leverage transform.
//!
//! Models how leveraged ETFs operate in discrete time: at every step the
//! exposure is reset to the target multiple, so each per-step percentage
//! return of the underlying is multiplied by the leverage factor before
//! compounding. No continuous-time approximation is used.

use sim_core::SimError;

/// Applies a constant daily-rebalanced leverage factor to a price path.
///
/// Given a path `P` and leverage `L`, produces `P'` of the same length with
/// `P'[0] = P[0]` and `P'[i] = P'[i−1] · (1 + L·r_i)` where
/// `r_i = (P[i] − P[i−1]) / P[i−1]`.
///
/// The input must be strictly positive (the per-step return divides by the
/// previous price). The output carries no positivity guarantee: a large
/// adverse move with `L·r_i ≤ −1` wipes the leveraged position to zero or
/// below, and those values are passed through unchanged for the caller to
/// interpret.
///
/// `L = 0` yields a constant path at `P[0]`; `L = 1` reproduces the input up
/// to floating-point rounding through the divide/multiply round trip.
///
/// # Errors
///
/// - [`SimError::InvalidParameter`] if the path is empty or `lever` is
///   non-finite.
/// - [`SimError::NonPositivePrice`] if any input value preceding a step is
///   zero or negative (unreachable when the path comes from the generators).
///
/// # Examples
///
/// ```rust
/// use sim_paths::apply_leverage;
///
/// // +10% then -10%, doubled to +20% / -20%
/// let levered = apply_leverage(&[100.0, 110.0, 99.0], 2.0).unwrap();
/// assert_eq!(levered, vec![100.0, 120.0, 96.0]);
/// ```
pub fn apply_leverage(path: &[f64], lever: f64) -> Result<Vec<f64>, SimError> {
    if path.is_empty() {
        return Err(SimError::invalid_parameter(
            "path",
            "a price path must contain at least one value",
        ));
    }
    if !lever.is_finite() {
        return Err(SimError::invalid_parameter(
            "lever",
            format!("must be finite, got {}", lever),
        ));
    }

    let mut levered = Vec::with_capacity(path.len());
    levered.push(path[0]);
    for i in 1..path.len() {
        let previous = path[i - 1];
        if !previous.is_finite() || previous <= 0.0 {
            return Err(SimError::NonPositivePrice {
                index: i - 1,
                value: previous,
            });
        }
        let step_return = (path[i] - previous) / previous;
        let compounded = levered[i - 1] * (1.0 + lever * step_return);
        levered.push(compounded);
    }
    Ok(levered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use sim_core::Scenario;

    use crate::gbm::generate_gbm_path;
    use crate::path::PathParams;
    use crate::rng::SimRng;

    #[test]
    fn test_concrete_two_step_scenario() {
        // Returns +10% and -10%; doubled they compound 1.2 × 0.8.
        let levered = apply_leverage(&[100.0, 110.0, 99.0], 2.0).unwrap();
        assert_eq!(levered.len(), 3);
        assert_relative_eq!(levered[0], 100.0);
        assert_relative_eq!(levered[1], 120.0);
        assert_relative_eq!(levered[2], 96.0, max_relative = 1e-12);
    }

    #[test]
    fn test_volatility_drag_on_round_trip_path() {
        // The underlying returns to exactly 100 (+10%, then -1/11), but the
        // 2x version compounds 1.2 × (1 - 2/11) = 1080/11 ≈ 98.18: strictly
        // less than both the unleveraged final and double its return.
        let levered = apply_leverage(&[100.0, 110.0, 100.0], 2.0).unwrap();
        assert_relative_eq!(levered[2], 1080.0 / 11.0, max_relative = 1e-12);
        assert!(levered[2] < 100.0);
    }

    #[test]
    fn test_lever_zero_gives_constant_path() {
        let levered = apply_leverage(&[100.0, 130.0, 70.0, 105.0], 0.0).unwrap();
        assert_eq!(levered, vec![100.0; 4]);
    }

    #[test]
    fn test_lever_one_round_trips() {
        let path = [100.0, 103.5, 97.25, 101.0, 99.99];
        let levered = apply_leverage(&path, 1.0).unwrap();
        for (original, levered) in path.iter().zip(&levered) {
            assert_relative_eq!(original, levered, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_negative_lever_inverts_returns() {
        // -1x of a +10% step is a -10% step
        let levered = apply_leverage(&[100.0, 110.0], -1.0).unwrap();
        assert_relative_eq!(levered[1], 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_wipe_out_passes_through() {
        // A -60% step at 2x leverage takes the position below zero; the
        // transform reports it rather than flooring it.
        let levered = apply_leverage(&[100.0, 40.0, 44.0], 2.0).unwrap();
        assert_relative_eq!(levered[1], -20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_single_element_path() {
        let levered = apply_leverage(&[100.0], 3.0).unwrap();
        assert_eq!(levered, vec![100.0]);
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            apply_leverage(&[], 2.0).unwrap_err(),
            SimError::InvalidParameter { name: "path", .. }
        ));
    }

    #[test]
    fn test_non_finite_lever_rejected() {
        assert!(apply_leverage(&[100.0, 101.0], f64::NAN).is_err());
        assert!(apply_leverage(&[100.0, 101.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_positive_input_price_fails_fast() {
        let err = apply_leverage(&[100.0, 0.0, 99.0], 2.0).unwrap_err();
        assert_eq!(
            err,
            SimError::NonPositivePrice {
                index: 1,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_generated_path_composition() {
        let params =
            PathParams::new(365, 100.0, Scenario::new(0.2, 0.08).unwrap()).unwrap();
        let path = generate_gbm_path(&params, &mut SimRng::from_seed(42)).unwrap();
        let levered = apply_leverage(path.values(), 2.0).unwrap();
        assert_eq!(levered.len(), path.len());
        assert_eq!(levered[0], path.initial());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Length preservation and first-element identity for arbitrary
        /// positive paths and finite levers.
        #[test]
        fn prop_length_and_anchor(
            path in prop::collection::vec(0.01..1e4f64, 1..200),
            lever in -3.0..4.0f64,
        ) {
            let levered = apply_leverage(&path, lever).unwrap();
            prop_assert_eq!(levered.len(), path.len());
            prop_assert_eq!(levered[0], path[0]);
        }

        /// L = 1 reproduces the input within floating-point tolerance.
        #[test]
        fn prop_unit_lever_round_trip(path in prop::collection::vec(0.01..1e4f64, 2..200)) {
            let levered = apply_leverage(&path, 1.0).unwrap();
            for (original, levered) in path.iter().zip(&levered) {
                prop_assert!((original - levered).abs() <= 1e-9 * original.abs());
            }
        }

        /// L = 0 freezes the path at its initial value.
        #[test]
        fn prop_zero_lever_constant(path in prop::collection::vec(0.01..1e4f64, 1..200)) {
            let levered = apply_leverage(&path, 0.0).unwrap();
            prop_assert!(levered.iter().all(|&v| v == path[0]));
        }
    }
}
