//! Juros CLI - Compare CDB and compromissada short-term returns.
//!
//! # Usage
//!
//! ```bash
//! # Compare both instruments over the default 22 business days
//! juros compare --principal 10000 --selic 15.0
//!
//! # Shorter horizon, machine-readable output
//! juros compare --start 2025-01-02 --days 5 --format json
//!
//! # Inspect the business days a projection would use
//! juros calendar --start 2025-02-27 --days 5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli.format;

    match cli.command {
        Commands::Compare(args) => commands::compare::execute(args, format, cli.quiet)?,
        Commands::Calendar(args) => commands::calendar::execute(args, format, cli.quiet)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with formatted output on stdout.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
