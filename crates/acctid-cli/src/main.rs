//! # acctid CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use acctid_cli::config::CliConfig;
use acctid_cli::derive::{run_derive, DeriveArgs};
use acctid_cli::principal::{run_principal, PrincipalArgs};
use acctid_cli::verify::{run_verify, VerifyArgs};

/// Ledger account identifier tool.
///
/// Derives the 32-byte account identifier for a principal and optional
/// sub-account, verifies identifier checksums, and converts principal text.
#[derive(Parser, Debug)]
#[command(name = "acctid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the account identifier for a principal.
    Derive(DeriveArgs),

    /// Verify the checksum of an account identifier.
    Verify(VerifyArgs),

    /// Convert between principal text and raw hex.
    Principal(PrincipalArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "acctid starting");

    let result = CliConfig::load_optional(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Derive(args) => run_derive(args, &config),
        Commands::Verify(args) => run_verify(args),
        Commands::Principal(args) => run_principal(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
