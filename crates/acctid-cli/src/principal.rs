//! # Principal Subcommand
//!
//! Converts between the grouped, checksummed principal text and raw hex.
//!
//! - `acctid principal decode <text>` prints the raw bytes as hex.
//! - `acctid principal encode <hex>` prints the text form.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use acctid_core::Principal;

/// Arguments for the `acctid principal` subcommand.
#[derive(Args, Debug)]
pub struct PrincipalArgs {
    #[command(subcommand)]
    pub command: PrincipalCommand,
}

/// Principal subcommands.
#[derive(Subcommand, Debug)]
pub enum PrincipalCommand {
    /// Text form to raw hex.
    Decode {
        /// Principal text (e.g. "ryjl3-tyaaa-aaaaa-aaaba-cai").
        text: String,
    },
    /// Raw hex to text form.
    Encode {
        /// Principal bytes as hex (at most 29 bytes).
        hex: String,
    },
}

/// Execute the principal subcommand.
pub fn run_principal(args: &PrincipalArgs) -> Result<u8> {
    println!("{}", convert(&args.command)?);
    Ok(crate::EXIT_OK)
}

/// The line `run_principal` prints.
pub fn convert(command: &PrincipalCommand) -> Result<String> {
    match command {
        PrincipalCommand::Decode { text } => {
            let principal = Principal::from_text(text)
                .with_context(|| format!("decoding principal text '{text}'"))?;
            Ok(principal.to_hex())
        }
        PrincipalCommand::Encode { hex } => {
            let principal =
                Principal::from_hex(hex).with_context(|| format!("encoding principal hex '{hex}'"))?;
            Ok(principal.to_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ledger_canister() {
        let out = convert(&PrincipalCommand::Decode {
            text: "ryjl3-tyaaa-aaaaa-aaaba-cai".to_string(),
        })
        .unwrap();
        assert_eq!(out, "00000000000000020101");
    }

    #[test]
    fn encode_anonymous() {
        let out = convert(&PrincipalCommand::Encode {
            hex: "04".to_string(),
        })
        .unwrap();
        assert_eq!(out, "2vxsx-fae");
    }

    #[test]
    fn encode_empty() {
        let out = convert(&PrincipalCommand::Encode { hex: String::new() }).unwrap();
        assert_eq!(out, "aaaaa-aa");
    }

    #[test]
    fn decode_rejects_bad_checksum() {
        let err = convert(&PrincipalCommand::Decode {
            text: "2vxsx-fai".to_string(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("2vxsx-fai"));
    }

    #[test]
    fn encode_rejects_oversized() {
        let err = convert(&PrincipalCommand::Encode {
            hex: "00".repeat(30),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("30 bytes"));
    }
}
