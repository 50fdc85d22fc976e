//! # acctid-core — Foundational Types for Account Identifiers
//!
//! Value types that feed the account identifier derivation, and the error
//! hierarchy shared by every crate in the workspace.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for every input.** [`Principal`] and [`SubAccount`] are
//!    distinct types with validated constructors, so a sub-account can never
//!    be passed where principal bytes are expected.
//!
//! 2. **One pre-image constructor.** [`PreImage::new()`] is the only way to
//!    build the hash input. It always prefixes [`DOMAIN_SEPARATOR`], which
//!    rules out hashing an unseparated buffer by accident.
//!
//! 3. **Principal text is checksummed.** [`Principal::from_text()`] rejects
//!    text whose embedded CRC-32 does not match, and text that is not in
//!    canonical grouping.
//!
//! ## Crate Policy
//!
//! - Depends only on `acctid-crypto` internally (for the CRC-32 in the
//!   principal text form).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

mod base32;
pub mod error;
pub mod preimage;
pub mod principal;
pub mod subaccount;

// Re-export primary types for ergonomic imports.
pub use error::{AccountIdError, AcctIdError, PrincipalError, SubAccountError};
pub use preimage::{PreImage, DOMAIN_SEPARATOR};
pub use principal::Principal;
pub use subaccount::{SubAccount, SUB_ACCOUNT_LEN};
