//! Scenario parameter bundle.

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// An immutable (volatility, expected return) parameter pair.
///
/// A scenario is a pure value: two scenarios with the same fields are the
/// same scenario. It carries annualised parameters:
///
/// - `volatility`: annualised standard deviation of returns, σ ≥ 0
/// - `expected_return`: simple annual return, μ > −1
///
/// The continuous-time drift used by the path generators is derived via
/// [`Scenario::drift`] as `ln(1 + μ)`.
///
/// # Examples
///
/// ```
/// use sim_core::Scenario;
///
/// // Roughly S&P 500
/// let scenario = Scenario::new(0.15, 0.08).unwrap();
/// assert!((scenario.drift() - 0.08_f64.ln_1p()).abs() < 1e-15);
///
/// // A return of -100% or worse is rejected
/// assert!(Scenario::new(0.15, -1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Annualised volatility (σ ≥ 0).
    pub volatility: f64,
    /// Expected simple annual return (μ > −1).
    pub expected_return: f64,
}

impl Scenario {
    /// Creates a new scenario, validating the parameter domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `volatility` is negative or
    /// non-finite, or if `expected_return` is ≤ −1 or non-finite.
    pub fn new(volatility: f64, expected_return: f64) -> Result<Self, SimError> {
        let scenario = Self {
            volatility,
            expected_return,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Validates the parameter domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] naming the offending field.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(SimError::invalid_parameter(
                "volatility",
                format!("must be finite and >= 0, got {}", self.volatility),
            ));
        }
        if !self.expected_return.is_finite() || self.expected_return <= -1.0 {
            return Err(SimError::invalid_parameter(
                "expected_return",
                format!("must be finite and > -1, got {}", self.expected_return),
            ));
        }
        Ok(())
    }

    /// Continuous-time drift implied by the simple annual return.
    ///
    /// `drift = ln(1 + expected_return)`, so that compounding the drift over
    /// a year reproduces the simple annual return exactly.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.expected_return.ln_1p()
    }

    /// Human-readable label, used for CSV column headers and log lines.
    ///
    /// Format matches the convention of the sweep exports:
    /// `"vol 15%, ret 8.00%"`.
    pub fn label(&self) -> String {
        format!(
            "vol {:.0}%, ret {:.2}%",
            self.volatility * 100.0,
            self.expected_return * 100.0
        )
    }
}
