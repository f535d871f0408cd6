//! Sweep configuration.
//!
//! Immutable, validated configuration shared by every sweep driver. Use
//! [`SweepConfigBuilder`] to construct instances; validation happens at
//! build time so the drivers can assume a sane domain.

use sim_core::{Scenario, SimError};
use sim_paths::{PathParams, SimRng};

/// Maximum number of Monte Carlo paths allowed per sweep point.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo sweep configuration.
///
/// # Examples
///
/// ```rust
/// use sim_sweep::SweepConfig;
///
/// let config = SweepConfig::builder()
///     .n_paths(10_000)
///     .n_steps(1825)
///     .initial_value(100.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SweepConfig {
    n_paths: usize,
    n_steps: usize,
    initial_value: f64,
    seed: Option<u64>,
}

impl SweepConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::default()
    }

    /// Number of Monte Carlo paths per sweep point.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of daily steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Initial price shared by all generated paths.
    #[inline]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Configured base seed, if any. `None` means a fresh entropy seed is
    /// drawn (and logged) per sweep run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `n_paths` or `n_steps` fall
    /// outside `[1, MAX_PATHS]` / `[1, MAX_STEPS]`, or if `initial_value` is
    /// non-positive or non-finite.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(SimError::invalid_parameter(
                "n_paths",
                format!("must be in [1, {}], got {}", MAX_PATHS, self.n_paths),
            ));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(SimError::invalid_parameter(
                "n_steps",
                format!("must be in [1, {}], got {}", MAX_STEPS, self.n_steps),
            ));
        }
        if !self.initial_value.is_finite() || self.initial_value <= 0.0 {
            return Err(SimError::invalid_parameter(
                "initial_value",
                format!("must be finite and > 0, got {}", self.initial_value),
            ));
        }
        Ok(())
    }

    /// Resolves the base seed for a sweep run: the configured seed, or a
    /// fresh entropy draw when none was configured.
    pub(crate) fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| SimRng::from_entropy().seed())
    }

    /// Path parameters for one scenario under this configuration.
    pub(crate) fn path_params(&self, scenario: Scenario) -> Result<PathParams, SimError> {
        PathParams::new(self.n_steps, self.initial_value, scenario)
    }
}

/// Derives the generator for one path of a sweep from the base seed and the
/// path's stable index. `StdRng::seed_from_u64` mixes the seed through
/// SplitMix64, so consecutive seed values give decorrelated streams.
pub(crate) fn path_rng(base_seed: u64, index: usize) -> SimRng {
    SimRng::from_seed(base_seed.wrapping_add(index as u64))
}

/// Builder for [`SweepConfig`].
///
/// Defaults: 1 000 paths, 365 steps, initial value 100.0, no seed.
#[derive(Clone, Debug, Default)]
pub struct SweepConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    initial_value: Option<f64>,
    seed: Option<u64>,
}

impl SweepConfigBuilder {
    /// Sets the number of Monte Carlo paths per sweep point.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of daily steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the initial price shared by all paths.
    #[inline]
    pub fn initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = Some(initial_value);
        self
    }

    /// Sets the base seed for reproducible sweeps.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for out-of-domain values.
    pub fn build(self) -> Result<SweepConfig, SimError> {
        let config = SweepConfig {
            n_paths: self.n_paths.unwrap_or(1_000),
            n_steps: self.n_steps.unwrap_or(365),
            initial_value: self.initial_value.unwrap_or(100.0),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SweepConfig::builder().build().unwrap();
        assert_eq!(config.n_paths(), 1_000);
        assert_eq!(config.n_steps(), 365);
        assert_eq!(config.initial_value(), 100.0);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = SweepConfig::builder()
            .n_paths(500)
            .n_steps(1825)
            .initial_value(50.0)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(config.n_paths(), 500);
        assert_eq!(config.n_steps(), 1825);
        assert_eq!(config.initial_value(), 50.0);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_zero_paths_rejected() {
        assert!(SweepConfig::builder().n_paths(0).build().is_err());
    }

    #[test]
    fn test_bounds_rejected() {
        assert!(SweepConfig::builder().n_paths(MAX_PATHS + 1).build().is_err());
        assert!(SweepConfig::builder().n_steps(MAX_STEPS + 1).build().is_err());
        assert!(SweepConfig::builder().n_steps(0).build().is_err());
    }

    #[test]
    fn test_bad_initial_value_rejected() {
        for bad in [0.0, -10.0, f64::NAN] {
            assert!(SweepConfig::builder().initial_value(bad).build().is_err());
        }
    }

    #[test]
    fn test_resolve_seed_uses_configured_value() {
        let config = SweepConfig::builder().seed(1234).build().unwrap();
        assert_eq!(config.resolve_seed(), 1234);
    }

    #[test]
    fn test_path_rng_is_stable_per_index() {
        let mut a = path_rng(42, 3);
        let mut b = path_rng(42, 3);
        assert_eq!(a.gen_normal(), b.gen_normal());

        let mut c = path_rng(42, 4);
        assert_ne!(path_rng(42, 3).gen_normal(), c.gen_normal());
    }
}
