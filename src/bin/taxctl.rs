//! Operator CLI for the tax calculation service.
//!
//! Runs the same calculation as the HTTP API without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Print the full rate table
//! cargo run --bin taxctl -- rates
//!
//! # Show the effective rate for one state
//! cargo run --bin taxctl -- rates --state ny
//!
//! # Calculate tax for a request stored as JSON (use `-` for stdin)
//! cargo run --bin taxctl -- calculate request.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use tax_calculation_api::domain::rate_provider::jurisdiction_label;
use tax_calculation_api::infrastructure::rates::DEFAULT_RATE;
use tax_calculation_api::prelude::*;
use tax_calculation_api::utils::rounding::rate_as_percentage;

/// CLI tool for the tax calculation service.
#[derive(Parser)]
#[command(name = "taxctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show supported states and their rates
    Rates {
        /// Only show the effective rate for this state code
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Calculate tax for a JSON request
    Calculate {
        /// Path to a JSON tax request, or `-` to read from stdin
        input: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rates { state } => {
            match state {
                Some(state) => show_rate(&state),
                None => list_rates(),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Calculate { input } => calculate(&input),
    }
}

/// Prints every state in the table.
fn list_rates() {
    println!("{}", "Supported states".bold());
    println!("{}", "─".repeat(20));

    for (state, rate) in StaticRateTable::entries() {
        let percentage = format!("{:>6}%", rate_as_percentage(*rate));
        if rate.is_zero() {
            println!("  {}  {}", state.cyan(), percentage.green());
        } else {
            println!("  {}  {}", state.cyan(), percentage);
        }
    }

    println!();
    println!(
        "Other states: {}% (default)",
        rate_as_percentage(DEFAULT_RATE)
    );
}

/// Prints the effective rate and jurisdiction label for one state.
fn show_rate(state: &str) {
    let table = StaticRateTable::new();
    let rate = table.rate_for(state);

    println!("{}: {}", "Jurisdiction".bold(), jurisdiction_label(state));
    println!("{}: {}%", "Rate".bold(), rate_as_percentage(rate));

    if table.lookup(state).is_none() {
        println!(
            "{}",
            format!("'{}' is not in the table, default rate applied", state).yellow()
        );
    }
}

/// Reads a request, calculates it and prints the response as JSON.
fn calculate(input: &Path) -> Result<ExitCode> {
    let raw = read_input(input)?;
    let request: TaxRequest =
        serde_json::from_str(&raw).context("Input is not a valid tax request")?;

    let service = TaxService::new(Arc::new(StaticRateTable::new()));

    match service.calculate(normalize_request(request)) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), err.message().red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read request from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))
}
