//! # CLI Error Type
//!
//! Everything that can stop a run, from config loading to writing output.
//!
//! ```text
//! CoreError (acme-core) ─┐
//! io / toml / json      ─┴──► CliError ──► main: log + "error: ..." + exit 1
//! ```

use std::path::PathBuf;

use acme_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or doesn't match the config shape.
    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Pricing failed (unknown product, invalid catalogue, ...).
    #[error(transparent)]
    Pricing(#[from] CoreError),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding a JSON summary failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
