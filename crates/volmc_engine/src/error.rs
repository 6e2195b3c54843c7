//! Engine error types.

use thiserror::Error;
use volmc_models::ModelError;

use crate::config::{MAX_PATHS, MAX_STEPS};

/// Configuration validation errors.
///
/// # Examples
/// ```
/// use volmc_engine::ConfigError;
///
/// let err = ConfigError::InvalidPathCount(0);
/// assert!(format!("{}", err).contains("path count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Path count outside `1..=MAX_PATHS`.
    #[error("Invalid path count: {0} (must be in 1..={MAX_PATHS})")]
    InvalidPathCount(usize),

    /// Step count outside `1..=MAX_STEPS`.
    #[error("Invalid step count: {0} (must be in 1..={MAX_STEPS})")]
    InvalidStepCount(usize),

    /// Horizon not positive and finite.
    #[error("Invalid horizon: {0} (must be positive and finite)")]
    InvalidHorizon(f64),

    /// A required builder field was never set.
    #[error("Missing configuration parameter: {name}")]
    MissingParameter {
        /// Name of the missing field.
        name: &'static str,
    },
}

/// Errors surfaced by a pricing run.
///
/// In [`ValidationMode::Permissive`](crate::config::ValidationMode) the
/// engine never errors on numeric grounds; non-finite values propagate as
/// values. Strict mode reports precondition violations as `Model` errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Market input or per-path precondition rejected in strict mode.
    #[error(transparent)]
    Model(#[from] ModelError),
}
