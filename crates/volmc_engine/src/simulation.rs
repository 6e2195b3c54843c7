//! Euler simulation of the mean-reverting volatility process.
//!
//! The simulator produces a flat table of `n_steps * n_paths` volatility
//! values: block `i` (0-indexed, length `n_steps`) is path `i`'s trajectory
//! and its last element is that path's terminal volatility.
//!
//! ## Continuation across blocks
//!
//! The running volatility is **not** reset between blocks: block `i + 1`
//! continues the Euler recursion from block `i`'s final value, so the table
//! is one long discretised trajectory chopped into `n_steps`-length windows
//! rather than `n_paths` independent restarts. Downstream pricing reads one
//! terminal value per window. This behaviour is load-bearing for output
//! reproducibility and must not be changed to a per-path reset.

use tracing::debug;

use volmc_models::VolProcessParams;

use crate::rng::GaussianSampler;

/// Advances the volatility recursion over a deviate slice.
///
/// Starting from `vol0`, applies one Euler step per deviate (in index
/// order) and records every intermediate value. This is the deterministic
/// kernel: feeding it a fixed slice reproduces the output bit for bit.
/// Non-finite intermediate values propagate silently.
pub fn evolve_from(
    params: &VolProcessParams,
    vol0: f64,
    dt: f64,
    deviates: &[f64],
) -> Vec<f64> {
    let mut vol = vol0;
    deviates
        .iter()
        .map(|&dw| {
            vol = params.euler_step(vol, dt, dw);
            vol
        })
        .collect()
}

/// Simulates the volatility table for `n_paths` blocks of `n_steps` steps.
///
/// Draws `n_steps * n_paths` deviates from the sampler in one pass and
/// evolves a single running volatility through all of them (see the module
/// docs for the continuation semantics). The trajectory starts at
/// `params.initial_vol()`, i.e. the vol-of-vol.
///
/// `dt = horizon / n_steps`; the block count does not enter the step size.
pub fn simulate_volatility(
    params: &VolProcessParams,
    horizon: f64,
    n_steps: usize,
    n_paths: usize,
    sampler: &mut GaussianSampler,
) -> Vec<f64> {
    let total = n_steps * n_paths;
    let dt = horizon / n_steps as f64;
    debug!(
        "simulating volatility: {} paths x {} steps (dt = {:.6})",
        n_paths, n_steps, dt
    );

    let deviates = sampler.sample_normals(total);
    evolve_from(params, params.initial_vol(), dt, &deviates)
}

/// Iterates the terminal volatility of each block in the flat table.
#[inline]
pub fn terminal_volatilities(table: &[f64], n_steps: usize) -> impl Iterator<Item = f64> + '_ {
    table.chunks_exact(n_steps).map(move |block| block[n_steps - 1])
}
