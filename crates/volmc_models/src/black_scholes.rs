//! Black-Scholes closed-form valuation of a European call.
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use crate::distributions::norm_cdf;
use crate::error::ModelError;

/// European call price under Black-Scholes.
///
/// Pure arithmetic with no precondition checks: `volatility = 0` or
/// `maturity = 0` divides by zero, `strike <= 0` makes the log undefined,
/// and the resulting NaN/Inf propagates to the caller unchanged. Use
/// [`checked_call_price`] when preconditions should be enforced instead.
///
/// # Examples
/// ```
/// use volmc_models::call_price;
///
/// // At-the-money, zero rate, 20% vol, one year.
/// let price = call_price(100.0_f64, 100.0, 0.0, 1.0, 0.2);
/// assert!((price - 7.9656).abs() < 1e-3);
/// ```
#[inline]
pub fn call_price<T: Float>(spot: T, strike: T, rate: T, maturity: T, volatility: T) -> T {
    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = volatility * maturity.sqrt();

    let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    spot * norm_cdf(d1) - strike * (-rate * maturity).exp() * norm_cdf(d2)
}

/// [`call_price`] with the precondition checks the raw formula omits.
///
/// # Errors
/// - `ModelError::InvalidSpot` if `spot <= 0`
/// - `ModelError::InvalidStrike` if `strike <= 0`
/// - `ModelError::InvalidMaturity` if `maturity <= 0`
/// - `ModelError::InvalidVolatility` if `volatility <= 0`
pub fn checked_call_price(
    spot: f64,
    strike: f64,
    rate: f64,
    maturity: f64,
    volatility: f64,
) -> Result<f64, ModelError> {
    if !(spot > 0.0) {
        return Err(ModelError::InvalidSpot(spot));
    }
    if !(strike > 0.0) {
        return Err(ModelError::InvalidStrike(strike));
    }
    if !(maturity > 0.0) {
        return Err(ModelError::InvalidMaturity(maturity));
    }
    if !(volatility > 0.0) {
        return Err(ModelError::InvalidVolatility(volatility));
    }
    Ok(call_price(spot, strike, rate, maturity, volatility))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn atm_zero_rate_reference_value() {
        // Known reference: S=K=100, r=0, T=1, sigma=0.2
        let price = call_price(100.0_f64, 100.0, 0.0, 1.0, 0.2);
        assert_relative_eq!(price, 7.965567, epsilon = 1e-3);
    }

    #[test]
    fn put_call_parity() {
        // C - (S - K·e^{-rT}) equals the put price, which must be positive
        // for an at-the-money option; check parity against the put computed
        // from N(-d2), N(-d1) directly.
        let (s, k, r, t, sigma) = (105.0_f64, 100.0, 0.05, 0.75, 0.25);
        let call = call_price(s, k, r, t, sigma);

        let vol_sqrt_t = sigma * t.sqrt();
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        let put = k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1);

        assert_relative_eq!(call - put, s - k * (-r * t).exp(), epsilon = 1e-6);
    }

    #[test]
    fn deep_in_the_money_approaches_forward_intrinsic() {
        let price = call_price(1000.0_f64, 1.0, 0.0, 1.0, 0.2);
        assert_relative_eq!(price, 999.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_volatility_is_not_guarded() {
        // Division by zero flows through as a non-finite or degenerate value
        // rather than a panic.
        let price = call_price(100.0_f64, 100.0, 0.0, 1.0, 0.0);
        assert!(price.is_nan() || price.is_infinite() || price == 0.0);
    }

    #[test]
    fn checked_variant_rejects_bad_preconditions() {
        assert_eq!(
            checked_call_price(-1.0, 100.0, 0.0, 1.0, 0.2),
            Err(ModelError::InvalidSpot(-1.0))
        );
        assert_eq!(
            checked_call_price(100.0, 0.0, 0.0, 1.0, 0.2),
            Err(ModelError::InvalidStrike(0.0))
        );
        assert_eq!(
            checked_call_price(100.0, 100.0, 0.0, 0.0, 0.2),
            Err(ModelError::InvalidMaturity(0.0))
        );
        assert_eq!(
            checked_call_price(100.0, 100.0, 0.0, 1.0, 0.0),
            Err(ModelError::InvalidVolatility(0.0))
        );
    }

    #[test]
    fn checked_variant_agrees_with_raw_formula() {
        let checked = checked_call_price(110.0, 95.0, 0.02, 0.5, 0.3).unwrap();
        let raw = call_price(110.0_f64, 95.0, 0.02, 0.5, 0.3);
        assert_eq!(checked, raw);
    }

    proptest! {
        #[test]
        fn price_is_monotone_in_spot(
            spot in 70.0..180.0f64,
            bump in 0.5..50.0f64,
        ) {
            let base = call_price(spot, 100.0, 0.02, 1.0, 0.2);
            let bumped = call_price(spot + bump, 100.0, 0.02, 1.0, 0.2);
            prop_assert!(bumped > base);
        }

        #[test]
        fn price_stays_within_no_arbitrage_bounds(
            spot in 20.0..180.0f64,
            sigma in 0.05..0.8f64,
        ) {
            let (k, r, t) = (100.0_f64, 0.02_f64, 1.0_f64);
            let price = call_price(spot, k, r, t, sigma);
            let lower = (spot - k * (-r * t).exp()).max(0.0);
            // Tolerance covers the 1.5e-7 error of the erf approximation.
            prop_assert!(price >= lower - 1e-3);
            prop_assert!(price <= spot + 1e-3);
        }
    }
}
