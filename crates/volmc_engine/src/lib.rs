//! # volmc_engine
//!
//! Monte Carlo engine for the volmc stochastic-volatility option pricer.
//!
//! ## Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── EngineConfig     (paths, steps, horizon, seed, validation mode)
//! ├── GaussianSampler  (seeded Box-Muller standard-normal source)
//! └── Orchestration
//!     ├── simulation::simulate_volatility()
//!     └── per-path Black-Scholes valuation + averaging
//! ```
//!
//! Everything runs single-threaded and synchronously; the only mutable
//! state is the sampler, which advances in strict sequential order so a
//! fixed seed reproduces a run bit for bit.
//!
//! ## Usage
//!
//! ```rust
//! use volmc_engine::config::EngineConfig;
//! use volmc_engine::pricer::MonteCarloPricer;
//! use volmc_models::{MarketInputs, VolProcessParams};
//!
//! let config = EngineConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config);
//! let market = MarketInputs { spot: 100.0, strike: 100.0, rate: 0.05 };
//! let result = pricer.price(&market, &VolProcessParams::default()).unwrap();
//! assert!(result.price.is_finite());
//! ```

pub mod config;
pub mod error;
pub mod pricer;
pub mod rng;
pub mod simulation;

pub use config::{EngineConfig, ValidationMode};
pub use error::{ConfigError, EngineError};
pub use pricer::{MonteCarloPricer, PricingResult};
pub use rng::GaussianSampler;
pub use simulation::simulate_volatility;
