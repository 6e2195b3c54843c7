//! volmc - Monte Carlo European option pricer under mean-reverting
//! stochastic volatility.
//!
//! Market inputs come from flags or, when omitted, from interactive
//! prompts with a bounded retry budget. Model parameters (theta, kappa,
//! sigma, rho) come from an optional TOML file and otherwise use the
//! built-in defaults. The horizon (1 year) and step count (252) are
//! fixed-by-design defaults, overridable only by flag.
//!
//! ```text
//! volmc --spot 100 --strike 100 --rate 0.05 --paths 10000 --seed 42
//! Option Price: <value>
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use volmc_engine::config::{EngineConfig, ValidationMode, DEFAULT_HORIZON, DEFAULT_STEPS};
use volmc_engine::pricer::MonteCarloPricer;
use volmc_models::{MarketInputs, VolProcessParams};

mod error;
mod params_file;
mod prompt;

pub use error::{CliError, Result};

/// Stochastic-volatility Monte Carlo option pricer
#[derive(Parser)]
#[command(name = "volmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial stock price (S0); prompted for when omitted
    #[arg(short = 's', long)]
    spot: Option<f64>,

    /// Strike price (K); prompted for when omitted
    #[arg(short = 'k', long)]
    strike: Option<f64>,

    /// Risk-free interest rate (r); prompted for when omitted
    #[arg(short = 'r', long)]
    rate: Option<f64>,

    /// Number of Monte Carlo simulations; prompted for when omitted
    #[arg(short = 'n', long)]
    paths: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Time steps per path
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Simulation horizon in years
    #[arg(long, default_value_t = DEFAULT_HORIZON)]
    horizon: f64,

    /// Model parameter file (TOML, [model] table)
    #[arg(short = 'p', long)]
    params: Option<PathBuf>,

    /// Validate inputs strictly instead of propagating NaN/Inf
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let params = match &cli.params {
        Some(path) => params_file::load(path)?,
        None => VolProcessParams::default(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let spot = resolve(cli.spot, &mut input, &mut output, "Enter the initial stock price (S0): ")?;
    let strike = resolve(cli.strike, &mut input, &mut output, "Enter the strike price (K): ")?;
    let rate = resolve(cli.rate, &mut input, &mut output, "Enter the risk-free interest rate (r): ")?;
    let paths = resolve(
        cli.paths,
        &mut input,
        &mut output,
        "Enter the number of Monte Carlo simulations: ",
    )?;

    let validation = if cli.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Permissive
    };

    let mut builder = EngineConfig::builder()
        .n_paths(paths)
        .n_steps(cli.steps)
        .horizon(cli.horizon)
        .validation(validation);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    info!(
        "pricing with {} paths, {} steps, horizon {}",
        config.n_paths(),
        config.n_steps(),
        config.horizon()
    );

    let market = MarketInputs { spot, strike, rate };
    let mut pricer = MonteCarloPricer::new(config);
    let result = pricer.price(&market, &params)?;

    println!("Option Price: {}", result.price);
    Ok(())
}

/// Uses the flag value when given, otherwise prompts for one.
fn resolve<T, R, W>(flag: Option<T>, input: &mut R, output: &mut W, label: &str) -> Result<T>
where
    T: std::str::FromStr,
    R: io::BufRead,
    W: Write,
{
    match flag {
        Some(value) => Ok(value),
        None => prompt::prompt_value(input, output, label),
    }
}
