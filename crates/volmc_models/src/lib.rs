//! # volmc_models
//!
//! Model layer for the volmc stochastic-volatility option pricer:
//!
//! - [`distributions`]: standard normal CDF via the error function
//! - [`black_scholes`]: closed-form European call valuation
//! - [`process`]: mean-reverting volatility process parameters
//! - [`market`]: market inputs (spot, strike, rate)
//!
//! The analytics are generic over `T: num_traits::Float`; everything here is
//! pure computation with no I/O and no random state.

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod market;
pub mod process;

pub use black_scholes::{call_price, checked_call_price};
pub use distributions::norm_cdf;
pub use error::ModelError;
pub use market::MarketInputs;
pub use process::VolProcessParams;
