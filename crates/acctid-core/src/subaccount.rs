//! # Sub-Account Selector
//!
//! A 32-byte value that lets one principal address many distinct ledger
//! accounts. The all-zero sub-account is the default account.
//!
//! Serializes as a 64-character lowercase hex string.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SubAccountError;
use crate::principal::Principal;

/// Sub-account length in bytes.
pub const SUB_ACCOUNT_LEN: usize = 32;

/// A 32-byte sub-account selector.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubAccount(pub [u8; SUB_ACCOUNT_LEN]);

impl SubAccount {
    /// The default (all-zero) sub-account.
    pub const DEFAULT: SubAccount = SubAccount([0u8; SUB_ACCOUNT_LEN]);

    /// Create a sub-account from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; SUB_ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    /// Create a sub-account from a slice that must be exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, SubAccountError> {
        let bytes: [u8; SUB_ACCOUNT_LEN] = slice
            .try_into()
            .map_err(|_| SubAccountError::InvalidLength(slice.len()))?;
        Ok(Self(bytes))
    }

    /// Parse a sub-account from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, SubAccountError> {
        let raw = hex::decode(hex_str.trim())
            .map_err(|e| SubAccountError::InvalidHex(e.to_string()))?;
        Self::from_slice(&raw)
    }

    /// Sub-account conventionally assigned to `principal`:
    /// `len(principal) || principal || zero padding`.
    pub fn from_principal(principal: &Principal) -> Self {
        let raw = principal.as_slice();
        let mut bytes = [0u8; SUB_ACCOUNT_LEN];
        bytes[0] = raw.len() as u8;
        bytes[1..=raw.len()].copy_from_slice(raw);
        Self(bytes)
    }

    /// Return the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; SUB_ACCOUNT_LEN] {
        &self.0
    }

    /// True for the all-zero sub-account.
    pub fn is_default(&self) -> bool {
        self.0 == [0u8; SUB_ACCOUNT_LEN]
    }

    /// Render as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SUB_ACCOUNT_LEN]> for SubAccount {
    fn from(bytes: [u8; SUB_ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SubAccount {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SubAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for SubAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubAccount({})", self.to_hex())
    }
}

impl Serialize for SubAccount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SubAccount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        assert_eq!(SubAccount::default(), SubAccount::DEFAULT);
        assert!(SubAccount::default().is_default());
        assert_eq!(SubAccount::default().to_hex(), "0".repeat(64));
    }

    #[test]
    fn from_hex_accepts_64_chars() {
        let hex = format!("{}01", "0".repeat(62));
        let sub = SubAccount::from_hex(&hex).unwrap();
        assert_eq!(sub.as_bytes()[31], 1);
        assert!(!sub.is_default());
        assert_eq!(sub.to_hex(), hex);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert_eq!(
            SubAccount::from_hex(&"00".repeat(31)).unwrap_err(),
            SubAccountError::InvalidLength(31)
        );
        assert_eq!(
            SubAccount::from_hex(&"00".repeat(33)).unwrap_err(),
            SubAccountError::InvalidLength(33)
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            SubAccount::from_hex(&"zz".repeat(32)).unwrap_err(),
            SubAccountError::InvalidHex(_)
        ));
    }

    #[test]
    fn from_principal_prefixes_length() {
        let p = Principal::from_slice(&[0xAA, 0xBB, 0xCC]).unwrap();
        let sub = SubAccount::from_principal(&p);
        assert_eq!(&sub.as_bytes()[..4], &[3, 0xAA, 0xBB, 0xCC]);
        assert!(sub.as_bytes()[4..].iter().all(|b| *b == 0));
    }

    #[test]
    fn from_principal_fits_longest_principal() {
        let p = Principal::from_slice(&[0xFF; 29]).unwrap();
        let sub = SubAccount::from_principal(&p);
        assert_eq!(sub.as_bytes()[0], 29);
        assert_eq!(&sub.as_bytes()[1..30], &[0xFF; 29]);
    }

    #[test]
    fn serde_hex_round_trip() {
        let sub = SubAccount::from_bytes([7u8; 32]);
        let json = serde_json::to_string(&sub).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(32)));
        let back: SubAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sub);
        assert!(serde_json::from_str::<SubAccount>(r#""0102""#).is_err());
    }
}
