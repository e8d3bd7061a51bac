//! # Config Loading
//!
//! Resolves which pricing config to use and reads it.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `--config <path>` flag
//! 2. `ACME_BASKET_CONFIG` environment variable (wired through clap)
//! 3. Built-in Acme Widget Co catalogue
//!
//! See `config/acme.toml` for the file format.

use std::fs;
use std::path::Path;

use acme_core::PricingConfig;
use tracing::info;

use crate::error::{CliError, CliResult};

/// Environment variable holding the config path.
pub const CONFIG_ENV: &str = "ACME_BASKET_CONFIG";

/// Loads the pricing config from `path`, or the built-in one if `None`.
pub fn load(path: Option<&Path>) -> CliResult<PricingConfig> {
    let Some(path) = path else {
        info!("No config file given, using built-in Acme catalogue");
        return Ok(PricingConfig::acme());
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        products = config.products.len(),
        offers = config.offers.len(),
        "Loaded pricing config"
    );
    Ok(config)
}

/// Parses TOML text into a pricing config.
pub fn parse(text: &str) -> Result<PricingConfig, toml::de::Error> {
    toml::from_str(text)
}
