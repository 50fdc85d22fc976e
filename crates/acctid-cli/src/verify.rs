//! # Verify Subcommand
//!
//! `acctid verify <hex>` checks that an account identifier is 32 bytes of
//! hex whose 4-byte prefix is the CRC-32 of the remaining digest.
//!
//! Exit code 0 when valid, 2 when not. Malformed input (bad hex, wrong
//! length) counts as invalid rather than as a tool failure.

use anyhow::Result;
use clap::Args;

use acctid_account::AccountIdentifier;
use acctid_core::AccountIdError;

/// Arguments for the `acctid verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Account identifier as 64 hex chars.
    pub account_id: String,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    match check(&args.account_id) {
        Ok(id) => {
            println!("OK: {id}");
            println!("  Checksum: {}", hex::encode(id.checksum()));
            println!("  Digest:   {}", hex::encode(id.digest()));
            Ok(crate::EXIT_OK)
        }
        Err(e) => {
            println!("INVALID: {e}");
            Ok(crate::EXIT_INVALID)
        }
    }
}

/// Parse and checksum-verify `input`.
pub fn check(input: &str) -> Result<AccountIdentifier, AccountIdError> {
    AccountIdentifier::from_hex(input)
}
