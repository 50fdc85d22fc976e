//! # acctid-cli — Account Identifier Tool
//!
//! Provides the `acctid` command-line interface over the derivation
//! library.
//!
//! ## Subcommands
//!
//! - `acctid derive`: Account identifier for a principal or identity record.
//! - `acctid verify`: Checksum verification of a hex identifier.
//! - `acctid principal`: Principal text ↔ raw hex conversion.
//!
//! ```bash
//! acctid derive --principal 2vxsx-fae
//! acctid derive --identity session.json --subaccount 00..01 --json
//! acctid verify 1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79
//! acctid principal decode ryjl3-tyaaa-aaaaa-aaaba-cai
//! ```

pub mod config;
pub mod derive;
pub mod identity;
pub mod principal;
pub mod verify;

/// Exit code for a successful command.
pub const EXIT_OK: u8 = 0;

/// Exit code for an identifier that fails verification.
pub const EXIT_INVALID: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_from_tool_failure() {
        // 1 is reserved for errors reported through `main`.
        assert_eq!(EXIT_OK, 0);
        assert_ne!(EXIT_INVALID, 1);
    }

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<config::CliConfig>();
        let _ = std::any::type_name::<derive::DeriveArgs>();
        let _ = std::any::type_name::<identity::IdentityRecord>();
        let _ = std::any::type_name::<principal::PrincipalArgs>();
        let _ = std::any::type_name::<verify::VerifyArgs>();
    }
}
