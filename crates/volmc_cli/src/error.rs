//! CLI error type and result alias.

use std::path::PathBuf;

use thiserror::Error;
use volmc_engine::{ConfigError, EngineError};
use volmc_models::ModelError;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors from the command-line shell.
#[derive(Debug, Error)]
pub enum CliError {
    /// The prompt retry budget was exhausted without a parsable value.
    #[error("No valid input after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made.
        attempts: usize,
    },

    /// Input ended before a value was read (non-interactive source).
    #[error("Unexpected end of input while prompting")]
    UnexpectedEof,

    /// Model parameter file could not be read.
    #[error("Cannot read parameter file {path:?}")]
    ParamsFileRead {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Model parameter file is not valid TOML.
    #[error("Malformed parameter file {path:?}")]
    ParamsFileParse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },

    /// Terminal I/O failure.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Rejected model parameter or market input.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Rejected engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pricing run failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
