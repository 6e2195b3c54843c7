//! Market inputs for a single European option valuation.

use crate::error::ModelError;

/// Spot, strike and risk-free rate for one pricing run.
///
/// Construction is permissive: the fields are public and nothing is checked
/// at assembly time, matching the behaviour of the pricing formula itself
/// (bad inputs flow through as NaN/Inf). Callers that opt into strict
/// validation use [`MarketInputs::validate`] before pricing.
///
/// # Examples
/// ```
/// use volmc_models::MarketInputs;
///
/// let market = MarketInputs { spot: 100.0, strike: 95.0, rate: 0.03 };
/// assert!(market.validate().is_ok());
///
/// let bad = MarketInputs { spot: -1.0, ..market };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketInputs {
    /// Initial stock price (S0).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Risk-free interest rate (r), annualised.
    pub rate: f64,
}

impl MarketInputs {
    /// Checks the inputs the closed-form pricer cannot tolerate.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if `spot <= 0` or non-finite
    /// - `ModelError::InvalidStrike` if `strike <= 0` or non-finite
    /// - `ModelError::InvalidRate` if `rate` is non-finite
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.spot > 0.0) || !self.spot.is_finite() {
            return Err(ModelError::InvalidSpot(self.spot));
        }
        if !(self.strike > 0.0) || !self.strike.is_finite() {
            return Err(ModelError::InvalidStrike(self.strike));
        }
        if !self.rate.is_finite() {
            return Err(ModelError::InvalidRate(self.rate));
        }
        Ok(())
    }
}
