//! # Account Identifier
//!
//! The 32-byte address the ledger assigns to a (principal, sub-account)
//! pair: a 4-byte CRC-32 of the digest followed by the 28-byte SHA-224
//! digest of the domain-separated pre-image.
//!
//! ## Security Note
//!
//! The checksum prefix catches typos and transmission corruption. It is
//! not a security boundary: anyone who alters the digest can recompute a
//! matching checksum.

use std::fmt;
use std::str::FromStr;

use acctid_core::{AccountIdError, PreImage, Principal, SubAccount};
use acctid_crypto::{crc32_be_bytes, sha224, SHA224_OUTPUT_LEN};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::source::PrincipalSource;

/// Account identifier length in bytes.
pub const ACCOUNT_ID_LEN: usize = 32;

const CHECKSUM_LEN: usize = 4;

/// Canonical ledger account identifier: `checksum || digest`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountIdentifier([u8; ACCOUNT_ID_LEN]);

impl AccountIdentifier {
    /// Derive the identifier for `principal` and an optional sub-account
    /// (the all-zero default when `None`).
    pub fn new(principal: &Principal, sub_account: Option<&SubAccount>) -> Self {
        Self::from_principal_bytes(principal.as_slice(), sub_account)
    }

    /// Derive the identifier from raw principal bytes. The bytes are
    /// treated as opaque and are not length-checked.
    pub fn from_principal_bytes(principal_bytes: &[u8], sub_account: Option<&SubAccount>) -> Self {
        let preimage = PreImage::new(principal_bytes, sub_account);
        Self::from_digest(sha224(preimage.as_bytes()))
    }

    /// Derive the identifier for the principal held by `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AccountIdError::InvalidPrincipal`] if `source` cannot
    /// produce a principal.
    pub fn derive<S>(source: &S, sub_account: Option<&SubAccount>) -> Result<Self, AccountIdError>
    where
        S: PrincipalSource + ?Sized,
    {
        let principal = source.principal().map_err(|e| {
            tracing::debug!(error = %e, "principal source refused");
            AccountIdError::InvalidPrincipal(e)
        })?;
        let account = Self::new(&principal, sub_account);
        tracing::debug!(
            principal = %principal,
            default_sub_account = sub_account.map_or(true, SubAccount::is_default),
            account_id = %account,
            "derived account identifier"
        );
        Ok(account)
    }

    /// Assemble `crc32(digest) || digest`.
    pub fn from_digest(digest: [u8; SHA224_OUTPUT_LEN]) -> Self {
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        bytes[..CHECKSUM_LEN].copy_from_slice(&crc32_be_bytes(&digest));
        bytes[CHECKSUM_LEN..].copy_from_slice(&digest);
        Self(bytes)
    }

    /// Accept 32 raw bytes, verifying the checksum prefix.
    ///
    /// # Errors
    ///
    /// [`AccountIdError::InvalidLength`] unless `slice` is 32 bytes;
    /// [`AccountIdError::ChecksumMismatch`] if the prefix is wrong.
    pub fn from_slice(slice: &[u8]) -> Result<Self, AccountIdError> {
        let bytes: [u8; ACCOUNT_ID_LEN] = slice
            .try_into()
            .map_err(|_| AccountIdError::InvalidLength(slice.len()))?;
        let candidate = Self(bytes);
        let expected = candidate.expected_checksum();
        if candidate.checksum() != expected {
            tracing::warn!(
                expected = %hex::encode(expected),
                found = %hex::encode(candidate.checksum()),
                "account identifier checksum mismatch"
            );
            return Err(AccountIdError::ChecksumMismatch {
                expected: hex::encode(expected),
                found: hex::encode(candidate.checksum()),
            });
        }
        Ok(candidate)
    }

    /// Parse 64 hex characters, verifying the checksum prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, AccountIdError> {
        let raw = hex::decode(hex_str.trim())
            .map_err(|e| AccountIdError::InvalidHex(e.to_string()))?;
        Self::from_slice(&raw)
    }

    /// The full 32 bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// The 4-byte checksum prefix.
    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&self.0[..CHECKSUM_LEN]);
        out
    }

    /// The 28-byte SHA-224 digest.
    pub fn digest(&self) -> [u8; SHA224_OUTPUT_LEN] {
        let mut out = [0u8; SHA224_OUTPUT_LEN];
        out.copy_from_slice(&self.0[CHECKSUM_LEN..]);
        out
    }

    /// True if the prefix is the CRC-32 of the digest.
    pub fn verify_checksum(&self) -> bool {
        self.checksum() == self.expected_checksum()
    }

    /// Render as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn expected_checksum(&self) -> [u8; CHECKSUM_LEN] {
        crc32_be_bytes(&self.0[CHECKSUM_LEN..])
    }
}

/// Derive the hex account identifier for the principal held by `source`.
///
/// Output is always 64 lowercase hex characters.
///
/// # Errors
///
/// Returns [`AccountIdError::InvalidPrincipal`] if `source` cannot
/// produce a principal.
pub fn derive_account_id<S>(source: &S, sub_account: Option<&SubAccount>) -> Result<String, AccountIdError>
where
    S: PrincipalSource + ?Sized,
{
    AccountIdentifier::derive(source, sub_account).map(|id| id.to_hex())
}

impl TryFrom<&[u8]> for AccountIdentifier {
    type Error = AccountIdError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl FromStr for AccountIdentifier {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for AccountIdentifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountIdentifier({})", self.to_hex())
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
