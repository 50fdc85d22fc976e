//! # acctid-account — Account Identifier Assembly
//!
//! Turns a principal and an optional sub-account into the ledger's
//! canonical 32-byte account identifier:
//!
//! ```text
//! digest     = SHA-224(0x0A || "account-id" || principal || sub_account)
//! account_id = CRC-32(digest) as big-endian u32 || digest
//! ```
//!
//! rendered as 64 lowercase hex characters.
//!
//! ## Entry Points
//!
//! - [`AccountIdentifier::new()`] when the [`Principal`](acctid_core::Principal)
//!   is already in hand. Infallible.
//! - [`AccountIdentifier::derive()`] / [`derive_account_id()`] when the
//!   principal comes from an upstream [`PrincipalSource`]. Fails with
//!   [`AccountIdError::InvalidPrincipal`](acctid_core::AccountIdError) if the
//!   source cannot produce one.
//! - [`AccountIdentifier::from_hex()`] to parse and checksum-verify an
//!   identifier received as text.
//!
//! ## Crate Policy
//!
//! - Derivation is synchronous and pure. Any asynchronous identity lookup
//!   must be resolved before calling in.
//! - Either a complete identifier is returned or an error. Never a partial
//!   or placeholder value.

pub mod account_id;
pub mod source;

pub use account_id::{derive_account_id, AccountIdentifier, ACCOUNT_ID_LEN};
pub use source::PrincipalSource;
