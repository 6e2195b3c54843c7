//! Seeded standard-normal sampler for Monte Carlo simulations.
//!
//! [`GaussianSampler`] wraps an explicit, injectable PRNG (no hidden global
//! stream) and produces standard-normal deviates via the Box-Muller
//! transform.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Standard-normal deviate source for the simulation engine.
///
/// Each deviate is computed from one fresh pair of uniforms via the
/// Box-Muller cosine branch:
///
/// ```text
/// z = sqrt(-2 * ln(u1)) * cos(2 * pi * u2)
/// ```
///
/// The paired sine output is never used, so half the entropy of every
/// uniform pair is discarded by construction. This exact consumption
/// pattern is part of the engine's reproducibility contract: one deviate
/// advances the underlying generator by exactly two uniform draws.
///
/// # Examples
///
/// ```rust
/// use volmc_engine::rng::GaussianSampler;
///
/// let mut a = GaussianSampler::from_seed(42);
/// let mut b = GaussianSampler::from_seed(42);
///
/// // Same seed, same sequence.
/// assert_eq!(a.next_normal(), b.next_normal());
///
/// let batch = a.sample_normals(1000);
/// assert_eq!(batch.len(), 1000);
/// ```
pub struct GaussianSampler {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Seed used for initialisation, if one was given.
    seed: Option<u64>,
}

impl GaussianSampler {
    /// Creates a sampler with a fixed seed for reproducible runs.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a sampler seeded from operating-system entropy.
    ///
    /// Runs are not reproducible across invocations; use
    /// [`GaussianSampler::from_seed`] in tests.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed this sampler was built with, if any.
    ///
    /// Useful for logging reproducibility information.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws one standard-normal deviate (mean 0, variance 1).
    #[inline]
    pub fn next_normal(&mut self) -> f64 {
        // The generator yields uniforms in [0, 1); mapping u -> 1 - u gives
        // (0, 1] so ln(u1) stays finite without resampling.
        let u1 = 1.0 - self.inner.gen::<f64>();
        let u2 = self.inner.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    /// Draws `n` standard-normal deviates in generation order.
    pub fn sample_normals(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_normal()).collect()
    }
}
