//! # Derive Subcommand
//!
//! `acctid derive` computes the account identifier for a principal given
//! as text or read from an identity record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use serde::Serialize;

use acctid_account::{AccountIdentifier, PrincipalSource};
use acctid_core::{AccountIdError, Principal, SubAccount};

use crate::config::{CliConfig, OutputFormat};
use crate::identity::IdentityRecord;

/// Arguments for the `acctid derive` subcommand.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["principal", "identity"])))]
pub struct DeriveArgs {
    /// Principal in text form (e.g. "2vxsx-fae").
    #[arg(long)]
    pub principal: Option<String>,

    /// JSON identity record holding the principal.
    #[arg(long)]
    pub identity: Option<PathBuf>,

    /// Sub-account as 64 hex chars. Defaults to the config value, then zero.
    #[arg(long)]
    pub subaccount: Option<String>,

    /// Print a JSON object instead of the bare identifier.
    #[arg(long)]
    pub json: bool,
}

/// Result of one derivation, as printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationReport {
    pub principal: Principal,
    pub subaccount: SubAccount,
    pub account_id: AccountIdentifier,
}

/// Execute the derive subcommand.
pub fn run_derive(args: &DeriveArgs, config: &CliConfig) -> Result<u8> {
    let report = derive_report(args, config)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };
    match format {
        OutputFormat::Text => println!("{}", report.account_id),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(crate::EXIT_OK)
}

/// Resolve the principal and sub-account, then derive.
pub fn derive_report(args: &DeriveArgs, config: &CliConfig) -> Result<DerivationReport> {
    let subaccount = match &args.subaccount {
        Some(hex) => SubAccount::from_hex(hex).context("--subaccount")?,
        None => config.default_subaccount()?.unwrap_or_default(),
    };

    let principal = match (&args.principal, &args.identity) {
        (Some(text), _) => resolve(text.as_str())?,
        (None, Some(path)) => resolve(&IdentityRecord::load(path)?)
            .with_context(|| format!("identity record: {}", path.display()))?,
        (None, None) => anyhow::bail!("either --principal or --identity is required"),
    };

    let account_id = AccountIdentifier::new(&principal, Some(&subaccount));
    tracing::info!(principal = %principal, account_id = %account_id, "derived");
    Ok(DerivationReport {
        principal,
        subaccount,
        account_id,
    })
}

fn resolve<S: PrincipalSource + ?Sized>(source: &S) -> Result<Principal> {
    let principal = source
        .principal()
        .map_err(AccountIdError::InvalidPrincipal)?;
    Ok(principal)
}
