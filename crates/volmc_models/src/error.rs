//! Error types for model construction and validation.

use thiserror::Error;

/// Structured validation errors for model parameters and market inputs.
///
/// Each variant carries the offending value so callers can report exactly
/// what was rejected.
///
/// # Examples
/// ```
/// use volmc_models::ModelError;
///
/// let err = ModelError::InvalidSpot(-100.0);
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Spot price must be positive.
    #[error("Invalid spot price: S0 = {0} (must be positive)")]
    InvalidSpot(f64),

    /// Strike must be positive.
    #[error("Invalid strike: K = {0} (must be positive)")]
    InvalidStrike(f64),

    /// Risk-free rate must be finite.
    #[error("Invalid risk-free rate: r = {0} (must be finite)")]
    InvalidRate(f64),

    /// Time to maturity must be positive.
    #[error("Invalid maturity: T = {0} (must be positive)")]
    InvalidMaturity(f64),

    /// Volatility must be positive.
    #[error("Invalid volatility: sigma = {0} (must be positive)")]
    InvalidVolatility(f64),

    /// Mean-reversion level must be positive.
    #[error("Invalid mean-reversion level: theta = {0} (must be positive)")]
    InvalidMeanLevel(f64),

    /// Mean-reversion speed must be positive.
    #[error("Invalid mean-reversion speed: kappa = {0} (must be positive)")]
    InvalidReversionSpeed(f64),

    /// Vol-of-vol must be positive.
    #[error("Invalid vol-of-vol: sigma = {0} (must be positive)")]
    InvalidVolOfVol(f64),

    /// Correlation must lie in [-1, 1].
    #[error("Invalid correlation: rho = {0} (must be in [-1, 1])")]
    InvalidCorrelation(f64),
}
