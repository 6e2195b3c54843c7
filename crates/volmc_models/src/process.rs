//! Mean-reverting volatility process parameters.
//!
//! The volatility follows the Euler-discretised SDE
//! ```text
//! dv = kappa * (theta - v) * dt + sigma * dW
//! ```
//! a mean-reverting process with *constant* diffusion coefficient sigma
//! (an Ornstein-Uhlenbeck-style update, not a square-root diffusion), so
//! the discretisation does not enforce non-negativity of v.

use serde::Deserialize;

use crate::error::ModelError;

/// Parameters of the mean-reverting volatility process.
///
/// Deserialisable from a `[model]` TOML table; any omitted field falls back
/// to the built-in default. Use [`VolProcessParams::new`] for a validated
/// construction, or [`VolProcessParams::validate`] after deserialising.
///
/// `correlation` is declared as part of the model but is consumed by neither
/// the path simulation nor the pricing formula; it is carried for a future
/// correlated-Brownian extension and must not be silently repurposed.
///
/// # Examples
/// ```
/// use volmc_models::VolProcessParams;
///
/// let params = VolProcessParams::default();
/// assert_eq!(params.mean_level, 0.04);
/// assert!(params.validate().is_ok());
///
/// let bad = VolProcessParams::new(0.04, -1.0, 0.1, -0.5);
/// assert!(bad.is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VolProcessParams {
    /// Mean-reversion level (theta > 0).
    pub mean_level: f64,
    /// Mean-reversion speed (kappa > 0).
    pub reversion_speed: f64,
    /// Volatility of volatility (sigma > 0).
    pub vol_of_vol: f64,
    /// Correlation between asset and volatility shocks (rho in [-1, 1]).
    /// Declared but not consumed by the current pricing formula.
    pub correlation: f64,
}

impl Default for VolProcessParams {
    fn default() -> Self {
        Self {
            mean_level: 0.04,
            reversion_speed: 1.0,
            vol_of_vol: 0.1,
            correlation: -0.5,
        }
    }
}

impl VolProcessParams {
    /// Creates validated process parameters.
    ///
    /// # Errors
    /// - `ModelError::InvalidMeanLevel` if `mean_level <= 0`
    /// - `ModelError::InvalidReversionSpeed` if `reversion_speed <= 0`
    /// - `ModelError::InvalidVolOfVol` if `vol_of_vol <= 0`
    /// - `ModelError::InvalidCorrelation` if `correlation` is outside [-1, 1]
    pub fn new(
        mean_level: f64,
        reversion_speed: f64,
        vol_of_vol: f64,
        correlation: f64,
    ) -> Result<Self, ModelError> {
        let params = Self {
            mean_level,
            reversion_speed,
            vol_of_vol,
            correlation,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameter set without consuming it.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.mean_level > 0.0) || !self.mean_level.is_finite() {
            return Err(ModelError::InvalidMeanLevel(self.mean_level));
        }
        if !(self.reversion_speed > 0.0) || !self.reversion_speed.is_finite() {
            return Err(ModelError::InvalidReversionSpeed(self.reversion_speed));
        }
        if !(self.vol_of_vol > 0.0) || !self.vol_of_vol.is_finite() {
            return Err(ModelError::InvalidVolOfVol(self.vol_of_vol));
        }
        if !(-1.0..=1.0).contains(&self.correlation) {
            return Err(ModelError::InvalidCorrelation(self.correlation));
        }
        Ok(())
    }

    /// Starting volatility for a simulated trajectory.
    ///
    /// The trajectory starts at the vol-of-vol sigma, not at the
    /// mean-reversion level theta. This coupling is a deliberate carry-over
    /// of the observed model behaviour; changing it changes every simulated
    /// path and therefore every price.
    #[inline]
    pub fn initial_vol(&self) -> f64 {
        self.vol_of_vol
    }

    /// One Euler step of the volatility update.
    ///
    /// `vol + kappa * (theta - vol) * dt + sigma * sqrt(dt) * dw`
    /// where `dw` is a standard-normal deviate. No floor is applied when the
    /// result goes negative.
    #[inline]
    pub fn euler_step(&self, vol: f64, dt: f64, dw: f64) -> f64 {
        vol + self.reversion_speed * (self.mean_level - vol) * dt
            + self.vol_of_vol * dt.sqrt() * dw
    }
}
