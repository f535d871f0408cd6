//! Arithmetic grids for sweep axes.

use serde::{Deserialize, Serialize};
use sim_core::SimError;

/// A half-open arithmetic range `[start, stop)` with a fixed step.
///
/// Materialises to the values `start + k·step` for `k = 0, 1, …` while the
/// value stays below `stop`. The stop value itself is never included in
/// the grid.
///
/// # Examples
///
/// ```
/// use sim_sweep::AxisRange;
///
/// let levers = AxisRange::new(0.0, 3.5, 0.5).unwrap();
/// assert_eq!(levers.values(), vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// First grid value (included).
    pub start: f64,
    /// Upper bound (excluded).
    pub stop: f64,
    /// Grid spacing (> 0).
    pub step: f64,
}

impl AxisRange {
    /// Creates a new range, validating the domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if any bound is non-finite, if
    /// `step` is not strictly positive, or if `stop <= start` (an empty
    /// grid is always a caller mistake here).
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, SimError> {
        if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
            return Err(SimError::invalid_parameter(
                "axis_range",
                format!("bounds must be finite, got [{}, {}) step {}", start, stop, step),
            ));
        }
        if step <= 0.0 {
            return Err(SimError::invalid_parameter(
                "step",
                format!("must be > 0, got {}", step),
            ));
        }
        if stop <= start {
            return Err(SimError::invalid_parameter(
                "stop",
                format!("must be > start ({}), got {}", start, stop),
            ));
        }
        Ok(Self { start, stop, step })
    }

    /// Number of grid values.
    pub fn len(&self) -> usize {
        ((self.stop - self.start) / self.step).ceil().max(0.0) as usize
    }

    /// Whether the grid is empty (never true for a validated range).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialises the grid values.
    pub fn values(&self) -> Vec<f64> {
        (0..self.len())
            .map(|k| self.start + k as f64 * self.step)
            .collect()
    }
}
