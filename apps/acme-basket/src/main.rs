//! # acme-basket Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Parse arguments
//! 3. Load config, price baskets, print results
//! 4. Exit 1 with a message on any error

use std::io;
use std::process::ExitCode;

use acme_basket::Args;
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    acme_basket::init_tracing();

    let args = Args::parse();
    let stdout = io::stdout();

    match acme_basket::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Basket pricing failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
