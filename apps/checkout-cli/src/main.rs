//! # Checkout CLI
//!
//! Prices baskets with the checkout engine.
//!
//! ## Usage
//! ```bash
//! # Run the three launch scenarios
//! cargo run -p checkout-cli
//!
//! # Price an arbitrary basket
//! cargo run -p checkout-cli -- scan atv atv atv vga
//!
//! # Custom catalog/promotions, JSON breakdown, verbose logs
//! RUST_LOG=debug cargo run -p checkout-cli -- --config checkout.toml --json scan mbp vga
//! ```

mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use checkout_core::{Catalog, Checkout};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::CheckoutConfig;
use crate::error::CliResult;

/// Demonstration baskets: (title, scanned SKUs).
const SCENARIOS: [(&str, &[&str]); 3] = [
    ("3 Apple TVs and 1 VGA adapter", &["atv", "atv", "atv", "vga"]),
    (
        "2 Apple TVs and 5 Super iPads",
        &["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"],
    ),
    ("MacBook Pro, VGA adapter, and Super iPad", &["mbp", "vga", "ipd"]),
];

#[derive(Debug, Parser)]
#[command(name = "checkout-cli")]
#[command(about = "Price a basket of scanned SKUs with promotional rules")]
struct Cli {
    /// TOML file overriding the catalog and promotions (env: CHECKOUT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full price breakdown as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the demonstration baskets (default)
    Demo,
    /// Scan the given SKUs in order and print the total
    Scan {
        #[arg(required = true)]
        skus: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Checkout failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = CheckoutConfig::load(cli.config)?;
    let catalog = config.catalog()?;
    info!(products = catalog.len(), "Catalog ready");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            for (index, (title, skus)) in SCENARIOS.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("Example {}: {}", index + 1, title);
                let checkout = price_basket(&config, catalog.clone(), skus.iter().copied())?;
                print_result(&checkout, cli.json)?;
            }
        }
        Command::Scan { skus } => {
            let checkout = price_basket(&config, catalog, skus.iter().map(String::as_str))?;
            print_result(&checkout, cli.json)?;
        }
    }

    Ok(())
}

/// Builds a checkout from the config and scans every SKU in order.
fn price_basket<'a>(
    config: &CheckoutConfig,
    catalog: Arc<Catalog>,
    skus: impl IntoIterator<Item = &'a str>,
) -> CliResult<Checkout> {
    let mut checkout = Checkout::with_rules(catalog, config.rules()?)?;
    for sku in skus {
        checkout.scan(sku)?;
    }
    Ok(checkout)
}

fn print_result(checkout: &Checkout, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&checkout.summary())?);
    } else {
        println!("Total: {}", checkout.total());
    }
    Ok(())
}
