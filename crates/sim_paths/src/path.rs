//! Validated generator inputs and the positive price path type.

use sim_core::{Scenario, SimError};

/// Parameters for a single path generation call.
///
/// Validation happens at construction: an invalid parameter set is rejected
/// with a structured error instead of silently producing a NaN path.
///
/// # Examples
///
/// ```
/// use sim_core::Scenario;
/// use sim_paths::PathParams;
///
/// let scenario = Scenario::new(0.2, 0.05).unwrap();
/// let params = PathParams::new(365, 100.0, scenario).unwrap();
/// assert_eq!(params.n_steps, 365);
///
/// // Zero steps and non-positive initial values are precondition violations
/// assert!(PathParams::new(0, 100.0, scenario).is_err());
/// assert!(PathParams::new(365, 0.0, scenario).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathParams {
    /// Number of discrete daily steps (≥ 1); the generated path has
    /// `n_steps + 1` values.
    pub n_steps: usize,
    /// Initial price (> 0).
    pub initial_value: f64,
    /// Volatility / expected-return bundle.
    pub scenario: Scenario,
}

impl PathParams {
    /// Creates new path parameters, validating the domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] naming the offending field.
    pub fn new(n_steps: usize, initial_value: f64, scenario: Scenario) -> Result<Self, SimError> {
        let params = Self {
            n_steps,
            initial_value,
            scenario,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameter domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `n_steps` is zero, if
    /// `initial_value` is non-positive or non-finite, or if the scenario
    /// fails its own validation.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.n_steps == 0 {
            return Err(SimError::invalid_parameter(
                "n_steps",
                "must be at least 1, got 0",
            ));
        }
        if !self.initial_value.is_finite() || self.initial_value <= 0.0 {
            return Err(SimError::invalid_parameter(
                "initial_value",
                format!("must be finite and > 0, got {}", self.initial_value),
            ));
        }
        self.scenario.validate()
    }
}

/// A simulated price path.
///
/// An ordered sequence of `n_steps + 1` strictly positive prices; index 0 is
/// the initial value. Paths are read-only after construction: the leverage
/// transform produces a new value sequence rather than mutating in place.
///
/// Positivity is guaranteed by construction for generator output (every
/// per-step factor is an exponential). [`PricePath::from_values`] offers the
/// same guarantee to externally supplied data by validating it.
#[derive(Clone, Debug, PartialEq)]
pub struct PricePath {
    values: Vec<f64>,
}

impl PricePath {
    /// Wraps externally supplied values, validating the path invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] on an empty input and
    /// [`SimError::NonPositivePrice`] on the first value that is not strictly
    /// positive and finite.
    pub fn from_values(values: Vec<f64>) -> Result<Self, SimError> {
        if values.is_empty() {
            return Err(SimError::invalid_parameter(
                "values",
                "a price path must contain at least one value",
            ));
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::NonPositivePrice { index, value });
            }
        }
        Ok(Self { values })
    }

    /// Wraps generator output. The generators produce positive values by
    /// construction, so this skips the release-mode validation pass.
    pub(crate) fn from_generated(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(values.iter().all(|v| v.is_finite() && *v > 0.0));
        Self { values }
    }

    /// The path values, index 0 first.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the path (`n_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a path contains at least its initial value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The initial price (index 0).
    #[inline]
    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    /// The terminal price (last index).
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Consumes the path and returns the underlying values.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario::new(0.15, 0.08).unwrap()
    }

    #[test]
    fn test_params_valid() {
        assert!(PathParams::new(1, 1.0, scenario()).is_ok());
        assert!(PathParams::new(1825, 100.0, scenario()).is_ok());
    }

    #[test]
    fn test_params_zero_steps_rejected() {
        let err = PathParams::new(0, 100.0, scenario()).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidParameter { name: "n_steps", .. }
        ));
    }

    #[test]
    fn test_params_bad_initial_value_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(PathParams::new(10, bad, scenario()).is_err());
        }
    }

    #[test]
    fn test_params_invalid_scenario_rejected() {
        let bad = Scenario {
            volatility: -0.1,
            expected_return: 0.05,
        };
        assert!(PathParams::new(10, 100.0, bad).is_err());
    }

    #[test]
    fn test_from_values_accepts_positive_path() {
        let path = PricePath::from_values(vec![100.0, 110.0, 99.0]).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.initial(), 100.0);
        assert_eq!(path.terminal(), 99.0);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_from_values_rejects_empty() {
        assert!(PricePath::from_values(vec![]).is_err());
    }

    #[test]
    fn test_from_values_rejects_non_positive() {
        let err = PricePath::from_values(vec![100.0, 0.0, 99.0]).unwrap_err();
        assert_eq!(
            err,
            SimError::NonPositivePrice {
                index: 1,
                value: 0.0
            }
        );

        assert!(PricePath::from_values(vec![100.0, -5.0]).is_err());
        assert!(PricePath::from_values(vec![100.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_into_values_round_trip() {
        let values = vec![1.0, 2.0, 3.0];
        let path = PricePath::from_values(values.clone()).unwrap();
        assert_eq!(path.into_values(), values);
    }
}
