//! Model parameter file loading.
//!
//! Parameters live in a small TOML file under a `[model]` table:
//!
//! ```toml
//! [model]
//! mean_level = 0.04
//! reversion_speed = 1.0
//! vol_of_vol = 0.1
//! correlation = -0.5
//! ```
//!
//! Omitted fields keep the built-in defaults; the loaded set is validated
//! before use.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use volmc_models::VolProcessParams;

use crate::error::{CliError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParamsFile {
    model: VolProcessParams,
}

/// Loads and validates model parameters from a TOML file.
pub fn load(path: &Path) -> Result<VolProcessParams> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ParamsFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ParamsFile = toml::from_str(&text).map_err(|source| CliError::ParamsFileParse {
        path: path.to_path_buf(),
        source,
    })?;

    file.model.validate()?;
    Ok(file.model)
}
