//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` through the error function,
//! Φ(x) = (1/2)·(1 + erf(x / √2)), generic over `T: Float`.

use num_traits::Float;

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// Maximum absolute error 1.5e-7 over the whole real line. The polynomial
/// is evaluated with Horner's method on |x|, with the sign restored via
/// erf(-x) = -erf(x).
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));
    let erf_abs = one - poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        -erf_abs
    } else {
        erf_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as Φ(x) = 0.5·(1 + erf(x/√2)).
/// Accurate to about 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use volmc_models::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    half * (T::one() + erf_approx(x / sqrt_2))
}
