//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Hashing and checksumming are total functions and have no error kind.
//! - A principal that cannot be obtained surfaces as
//!   [`AccountIdError::InvalidPrincipal`], never as a silently defaulted
//!   identifier.
//! - Parse errors carry the offending input so the caller can show it.

use thiserror::Error;

/// Top-level error type for the workspace.
#[derive(Error, Debug)]
pub enum AcctIdError {
    /// Principal construction or parsing failed.
    #[error("principal error: {0}")]
    Principal(#[from] PrincipalError),

    /// Sub-account construction or parsing failed.
    #[error("sub-account error: {0}")]
    SubAccount(#[from] SubAccountError),

    /// Account identifier derivation or parsing failed.
    #[error("account identifier error: {0}")]
    AccountId(#[from] AccountIdError),
}

/// Error obtaining or parsing a principal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrincipalError {
    /// The identity source has no principal to give.
    #[error("principal is not available from the identity source")]
    Missing,

    /// The identity source holds a principal it cannot decode.
    #[error("identity source is corrupt: {0}")]
    Corrupt(String),

    /// Raw principal exceeds the ecosystem's 29-byte limit.
    #[error("principal is {len} bytes; at most 29 are allowed")]
    TooLong {
        /// Length of the rejected byte sequence.
        len: usize,
    },

    /// Principal text is not valid grouped base32.
    #[error("invalid principal text '{text}': {reason}")]
    InvalidText {
        /// The rejected input.
        text: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The CRC-32 embedded in the principal text does not match its bytes.
    #[error("principal text '{text}' fails its embedded checksum")]
    ChecksumMismatch {
        /// The rejected input.
        text: String,
    },

    /// Principal text decodes but is not in canonical grouping.
    #[error("principal text '{text}' is not canonical; expected '{canonical}'")]
    NotCanonical {
        /// The rejected input.
        text: String,
        /// The canonical rendering of the same bytes.
        canonical: String,
    },

    /// Raw principal hex could not be decoded.
    #[error("invalid principal hex: {0}")]
    InvalidHex(String),
}

/// Error constructing a sub-account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubAccountError {
    /// Input was not exactly 32 bytes.
    #[error("sub-account must be 32 bytes, got {0}")]
    InvalidLength(usize),

    /// Hex decoding failed.
    #[error("invalid sub-account hex: {0}")]
    InvalidHex(String),
}

/// Error deriving or parsing an account identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    /// The principal bytes could not be obtained from the upstream identity.
    #[error("invalid principal: {0}")]
    InvalidPrincipal(#[from] PrincipalError),

    /// Encoded identifier was not 32 bytes.
    #[error("account identifier must be 32 bytes (64 hex chars), got {0} bytes")]
    InvalidLength(usize),

    /// Hex decoding failed.
    #[error("invalid account identifier hex: {0}")]
    InvalidHex(String),

    /// The 4-byte prefix is not the CRC-32 of the 28-byte digest.
    #[error("account identifier checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Checksum recomputed over the digest (8 hex chars).
        expected: String,
        /// Checksum carried in the identifier (8 hex chars).
        found: String,
    },
}
