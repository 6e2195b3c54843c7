//! Engine configuration.
//!
//! [`EngineConfig`] fixes the simulation shape for a run. The horizon and
//! step count default to one year of daily steps; the path count is the one
//! user-supplied knob and has no default.

use crate::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default step count: daily steps over one year.
pub const DEFAULT_STEPS: usize = 252;

/// Default simulation horizon in years.
pub const DEFAULT_HORIZON: f64 = 1.0;

/// Input-checking behaviour of the pricing driver.
///
/// The closed-form pricer tolerates no zero volatility, zero maturity or
/// non-positive strike; permissive mode lets the resulting NaN/Inf flow
/// through to the average, strict mode reports the first violated
/// precondition as a structured error instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    /// No precondition checks; non-finite results propagate as values.
    #[default]
    Permissive,

    /// Check market inputs and every per-path volatility before pricing.
    Strict,
}

/// Immutable Monte Carlo engine configuration.
///
/// Use [`EngineConfig::builder`] to construct instances; `build` validates
/// every field.
///
/// # Examples
///
/// ```rust
/// use volmc_engine::config::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.horizon(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Number of simulation paths (M).
    n_paths: usize,
    /// Number of time steps per path (N).
    n_steps: usize,
    /// Simulation horizon in years (T).
    horizon: f64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Input-checking behaviour.
    validation: ValidationMode,
}

impl EngineConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the simulation horizon in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the seed, if one was configured.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the input-checking behaviour.
    #[inline]
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - `ConfigError::InvalidPathCount` if `n_paths` is 0 or above [`MAX_PATHS`]
    /// - `ConfigError::InvalidStepCount` if `n_steps` is 0 or above [`MAX_STEPS`]
    /// - `ConfigError::InvalidHorizon` if `horizon` is not positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if !(self.horizon > 0.0) || !self.horizon.is_finite() {
            return Err(ConfigError::InvalidHorizon(self.horizon));
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`].
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    horizon: Option<f64>,
    seed: Option<u64>,
    validation: ValidationMode,
}

impl EngineConfigBuilder {
    /// Sets the number of simulation paths (required).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path (default [`DEFAULT_STEPS`]).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the simulation horizon in years (default [`DEFAULT_HORIZON`]).
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the seed for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the input-checking behaviour (default permissive).
    #[inline]
    pub fn validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if `n_paths` was never set or any field is out
    /// of range.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingParameter { name: "n_paths" })?;

        let config = EngineConfig {
            n_paths,
            n_steps: self.n_steps.unwrap_or(DEFAULT_STEPS),
            horizon: self.horizon.unwrap_or(DEFAULT_HORIZON),
            seed: self.seed,
            validation: self.validation,
        };

        config.validate()?;
        Ok(config)
    }
}
