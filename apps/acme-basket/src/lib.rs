//! # acme-basket: Command-Line Basket Pricing
//!
//! Thin harness around `acme-core`.
//!
//! ## Module Organization
//! ```text
//! acme_basket/
//! ├── lib.rs      ◄─── You are here (args, run, tracing setup)
//! ├── config.rs   ◄─── Config path resolution and TOML loading
//! ├── error.rs    ◄─── CliError
//! └── main.rs     ◄─── Binary entry point
//! ```
//!
//! ## Usage
//! ```text
//! acme-basket                       # price the example baskets
//! acme-basket R01 R01               # price one basket
//! acme-basket B01,G01 --json        # JSON summary
//! acme-basket --config shop.toml R01
//! ```

pub mod config;
pub mod error;

use std::io::Write;
use std::path::PathBuf;

use acme_core::{BasketTotals, PricingSetup};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use error::{CliError, CliResult};

/// Baskets priced when no codes are given.
pub const EXAMPLE_BASKETS: &[&[&str]] = &[
    &["B01", "G01"],
    &["R01", "R01"],
    &["R01", "G01"],
    &["B01", "B01", "R01", "R01", "R01"],
];

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "acme-basket", version, about = "Price Acme Widget Co baskets")]
pub struct Args {
    /// Pricing config file (TOML). Defaults to the built-in Acme catalogue.
    #[arg(short, long, env = config::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print one JSON summary per basket instead of text.
    #[arg(long)]
    pub json: bool,

    /// Product codes for a single basket, space or comma separated.
    /// Without codes the example baskets are priced.
    pub codes: Vec<String>,
}

impl Args {
    /// The baskets to price: the codes given, or the examples.
    pub fn baskets(&self) -> Vec<Vec<String>> {
        let codes = self.requested_codes();

        if codes.is_empty() {
            EXAMPLE_BASKETS
                .iter()
                .map(|basket| basket.iter().map(|c| c.to_string()).collect())
                .collect()
        } else {
            vec![codes]
        }
    }

    fn requested_codes(&self) -> Vec<String> {
        self.codes
            .iter()
            .flat_map(|arg| arg.split(','))
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn is_example_run(&self) -> bool {
        self.requested_codes().is_empty()
    }
}

/// Loads the config and prices every requested basket into `out`.
///
/// ## Errors
/// Stops at the first failure. An unknown product code aborts with
/// `CliError::Pricing`; nothing is printed for that basket.
pub fn run<W: Write>(args: &Args, out: &mut W) -> CliResult<()> {
    let setup = config::load(args.config.as_deref())?.build()?;
    info!(
        products = setup.catalogue().len(),
        offers = setup.offers().len(),
        "Pricing setup ready"
    );

    if args.is_example_run() && !args.json {
        writeln!(out, "Example baskets:")?;
        writeln!(out)?;
    }

    for codes in args.baskets() {
        let totals = price(&setup, &codes)?;
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&totals)?)?;
        } else {
            writeln!(out, "{}", format_line(&totals))?;
        }
    }

    Ok(())
}

fn price(setup: &PricingSetup, codes: &[String]) -> CliResult<BasketTotals> {
    let totals = setup.price(codes)?;
    debug!(items = ?totals.items, total = %totals.total(), "Priced basket");
    Ok(totals)
}

/// `Items: B01, G01 => Total: $37.85`
pub fn format_line(totals: &BasketTotals) -> String {
    format!(
        "Items: {} => Total: {}",
        totals.items.join(", "),
        totals.total()
    )
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-item and per-basket events
/// - `RUST_LOG=acme_core=trace` - Trace the pricing crate only
/// - Default: warnings, plus info from the acme crates
///
/// Logs go to stderr so stdout carries only basket output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,acme_core=info,acme_basket=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
