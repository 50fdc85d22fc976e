//! # Pre-Image — Domain-Separated Hash Input
//!
//! Defines `PreImage`, the only construction path for bytes fed into the
//! account identifier digest:
//!
//! ```text
//! PreImage = 0x0A || "account-id" || principal_bytes || sub_account
//! ```
//!
//! ## Security Invariant
//!
//! The inner buffer is private and `PreImage::new()` always writes
//! [`DOMAIN_SEPARATOR`] first. A digest computed over a `PreImage` can
//! therefore never collide with a digest computed over the same principal
//! for an unrelated purpose.
//!
//! Principal bytes are treated as opaque: no validation happens here.

use crate::subaccount::{SubAccount, SUB_ACCOUNT_LEN};

/// Length-prefixed domain tag: `0x0A` (ten) followed by `"account-id"`.
pub const DOMAIN_SEPARATOR: [u8; 11] = *b"\x0Aaccount-id";

/// The exact byte sequence hashed to produce an account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreImage(Vec<u8>);

impl PreImage {
    /// Build the pre-image for `principal_bytes` and an optional sub-account.
    /// A missing sub-account is the all-zero default.
    pub fn new(principal_bytes: &[u8], sub_account: Option<&SubAccount>) -> Self {
        let sub_account = sub_account.copied().unwrap_or_default();
        let expected_len = DOMAIN_SEPARATOR.len() + principal_bytes.len() + SUB_ACCOUNT_LEN;

        let mut buf = Vec::with_capacity(expected_len);
        buf.extend_from_slice(&DOMAIN_SEPARATOR);
        buf.extend_from_slice(principal_bytes);
        buf.extend_from_slice(sub_account.as_bytes());

        debug_assert_eq!(buf.len(), expected_len);
        Self(buf)
    }

    /// Access the bytes for hashing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the pre-image.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the separator and sub-account are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for PreImage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
