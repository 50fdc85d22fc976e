//! # Principal — Opaque Actor Identifier
//!
//! A principal is the ledger ecosystem's identifier for an authenticated
//! actor: a byte string of at most 29 bytes. This crate treats the bytes as
//! opaque. Equality is byte equality.
//!
//! ## Text Form
//!
//! ```text
//! text = group5( base32_lower( crc32_be(bytes) || bytes ) )
//! ```
//!
//! where `group5` inserts `-` after every fifth character. Examples:
//!
//! | bytes | text |
//! |---|---|
//! | (empty) | `aaaaa-aa` |
//! | `04` | `2vxsx-fae` (the anonymous principal) |
//! | `00000000000000020101` | `ryjl3-tyaaa-aaaaa-aaaba-cai` |
//!
//! Parsing accepts upper- or lowercase input but rejects text whose
//! checksum does not match or whose dashes are not in canonical position.

use std::fmt;
use std::str::FromStr;

use acctid_crypto::crc32_be_bytes;
use serde::{Deserialize, Serialize};

use crate::base32;
use crate::error::PrincipalError;

const CHECKSUM_LEN: usize = 4;
const MAX_LEN: usize = 29;
const GROUP_LEN: usize = 5;

/// Opaque identifier of an authenticated actor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal {
    len: u8,
    bytes: [u8; MAX_LEN],
}

impl Principal {
    /// Longest principal the ecosystem issues.
    pub const MAX_LENGTH_IN_BYTES: usize = MAX_LEN;

    const ANONYMOUS_TAG: u8 = 0x04;

    /// The anonymous principal (`2vxsx-fae`), a single `0x04` byte.
    pub const fn anonymous() -> Self {
        let mut bytes = [0u8; Self::MAX_LENGTH_IN_BYTES];
        bytes[0] = Self::ANONYMOUS_TAG;
        Self { len: 1, bytes }
    }

    /// The management canister principal (`aaaaa-aa`), the empty byte string.
    pub const fn management_canister() -> Self {
        Self {
            len: 0,
            bytes: [0u8; Self::MAX_LENGTH_IN_BYTES],
        }
    }

    /// Build a principal from its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PrincipalError::TooLong`] if `slice` exceeds
    /// [`Self::MAX_LENGTH_IN_BYTES`].
    pub fn from_slice(slice: &[u8]) -> Result<Self, PrincipalError> {
        if slice.len() > Self::MAX_LENGTH_IN_BYTES {
            return Err(PrincipalError::TooLong { len: slice.len() });
        }
        let mut bytes = [0u8; Self::MAX_LENGTH_IN_BYTES];
        bytes[..slice.len()].copy_from_slice(slice);
        Ok(Self {
            len: slice.len() as u8,
            bytes,
        })
    }

    /// Build a principal from hex-encoded raw bytes.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrincipalError> {
        let raw = hex::decode(hex_str.trim())
            .map_err(|e| PrincipalError::InvalidHex(e.to_string()))?;
        Self::from_slice(&raw)
    }

    /// Parse the grouped, checksummed text form.
    ///
    /// # Errors
    ///
    /// - [`PrincipalError::InvalidText`] for symbols outside the base32
    ///   alphabet or text too short to hold a checksum.
    /// - [`PrincipalError::TooLong`] if the decoded principal exceeds 29 bytes.
    /// - [`PrincipalError::ChecksumMismatch`] if the embedded CRC-32 is wrong.
    /// - [`PrincipalError::NotCanonical`] if the grouping differs from
    ///   [`Self::to_text()`].
    pub fn from_text(text: &str) -> Result<Self, PrincipalError> {
        let lowered = text.trim().to_ascii_lowercase();
        let compact: String = lowered.chars().filter(|c| *c != '-').collect();

        let decoded = base32::decode(&compact).ok_or_else(|| PrincipalError::InvalidText {
            text: text.to_string(),
            reason: "contains a character outside the base32 alphabet".to_string(),
        })?;
        if decoded.len() < CHECKSUM_LEN {
            return Err(PrincipalError::InvalidText {
                text: text.to_string(),
                reason: "too short to contain a checksum".to_string(),
            });
        }

        let (checksum, raw) = decoded.split_at(CHECKSUM_LEN);
        let principal = Self::from_slice(raw)?;
        if checksum != crc32_be_bytes(raw).as_slice() {
            return Err(PrincipalError::ChecksumMismatch {
                text: text.to_string(),
            });
        }

        let canonical = principal.to_text();
        if canonical != lowered {
            return Err(PrincipalError::NotCanonical {
                text: text.to_string(),
                canonical,
            });
        }
        Ok(principal)
    }

    /// Render the grouped, checksummed text form.
    pub fn to_text(&self) -> String {
        let raw = self.as_slice();
        let mut framed = Vec::with_capacity(CHECKSUM_LEN + raw.len());
        framed.extend_from_slice(&crc32_be_bytes(raw));
        framed.extend_from_slice(raw);

        let encoded = base32::encode(&framed);
        let mut grouped = String::with_capacity(encoded.len() + encoded.len() / GROUP_LEN);
        for (i, c) in encoded.chars().enumerate() {
            if i > 0 && i % GROUP_LEN == 0 {
                grouped.push('-');
            }
            grouped.push(c);
        }
        grouped
    }

    /// Raw bytes as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_slice())
    }

    /// The raw principal bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Number of raw bytes.
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// True for the management canister principal.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True for the anonymous principal.
    pub fn is_anonymous(&self) -> bool {
        self.as_slice() == [Self::ANONYMOUS_TAG]
    }
}

impl AsRef<[u8]> for Principal {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl TryFrom<&[u8]> for Principal {
    type Error = PrincipalError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.to_text())
    }
}

impl Serialize for Principal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER_CANISTER: [u8; 10] = [0, 0, 0, 0, 0, 0, 0, 2, 1, 1];

    #[test]
    fn anonymous_text() {
        let p = Principal::anonymous();
        assert_eq!(p.to_text(), "2vxsx-fae");
        assert_eq!(p.as_slice(), &[0x04]);
        assert!(p.is_anonymous());
    }

    #[test]
    fn management_canister_text() {
        let p = Principal::management_canister();
        assert_eq!(p.to_text(), "aaaaa-aa");
        assert!(p.is_empty());
        assert!(!p.is_anonymous());
    }

    #[test]
    fn ledger_canister_text() {
        let p = Principal::from_slice(&LEDGER_CANISTER).unwrap();
        assert_eq!(p.to_text(), "ryjl3-tyaaa-aaaaa-aaaba-cai");
    }

    #[test]
    fn parse_known_texts() {
        assert_eq!(
            Principal::from_text("2vxsx-fae").unwrap(),
            Principal::anonymous()
        );
        assert_eq!(
            Principal::from_text("aaaaa-aa").unwrap(),
            Principal::management_canister()
        );
        assert_eq!(
            Principal::from_text("ryjl3-tyaaa-aaaaa-aaaba-cai")
                .unwrap()
                .as_slice(),
            &LEDGER_CANISTER
        );
    }

    #[test]
    fn parse_accepts_uppercase_and_whitespace() {
        assert_eq!(
            Principal::from_text("  2VXSX-FAE\n").unwrap(),
            Principal::anonymous()
        );
    }

    #[test]
    fn parse_rejects_bad_checksum() {
        // Same shape as the anonymous principal with one symbol changed.
        let err = Principal::from_text("2vxsx-fai").unwrap_err();
        assert!(
            matches!(
                err,
                PrincipalError::ChecksumMismatch { .. } | PrincipalError::NotCanonical { .. }
            ),
            "got {err:?}"
        );
        let err = Principal::from_text("3vxsx-fae").unwrap_err();
        assert!(matches!(err, PrincipalError::ChecksumMismatch { .. }), "got {err:?}");
    }

    #[test]
    fn parse_rejects_missing_dashes() {
        let err = Principal::from_text("2vxsxfae").unwrap_err();
        match err {
            PrincipalError::NotCanonical { canonical, .. } => assert_eq!(canonical, "2vxsx-fae"),
            other => panic!("expected NotCanonical, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_misplaced_dashes() {
        assert!(matches!(
            Principal::from_text("2vxs-xfae").unwrap_err(),
            PrincipalError::NotCanonical { .. }
        ));
    }

    #[test]
    fn parse_rejects_foreign_symbols() {
        assert!(matches!(
            Principal::from_text("2vxsx-fa1").unwrap_err(),
            PrincipalError::InvalidText { .. }
        ));
    }

    #[test]
    fn parse_rejects_short_text() {
        assert!(matches!(
            Principal::from_text("aaa").unwrap_err(),
            PrincipalError::InvalidText { .. }
        ));
        assert!(matches!(
            Principal::from_text("").unwrap_err(),
            PrincipalError::InvalidText { .. }
        ));
    }

    #[test]
    fn from_slice_rejects_30_bytes() {
        let err = Principal::from_slice(&[7u8; 30]).unwrap_err();
        assert_eq!(err, PrincipalError::TooLong { len: 30 });
    }

    #[test]
    fn from_slice_accepts_29_bytes() {
        let p = Principal::from_slice(&[7u8; 29]).unwrap();
        assert_eq!(p.len(), 29);
        assert_eq!(Principal::from_text(&p.to_text()).unwrap(), p);
    }

    #[test]
    fn hex_round_trip() {
        let p = Principal::from_hex("00000000000000020101").unwrap();
        assert_eq!(p.as_slice(), &LEDGER_CANISTER);
        assert_eq!(p.to_hex(), "00000000000000020101");
        assert!(matches!(
            Principal::from_hex("zz").unwrap_err(),
            PrincipalError::InvalidHex(_)
        ));
    }

    #[test]
    fn equality_is_byte_equality() {
        let a = Principal::from_slice(&[1, 2, 3]).unwrap();
        let b = Principal::try_from(&[1u8, 2, 3][..]).unwrap();
        let c = Principal::from_slice(&[1, 2, 3, 0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_and_from_str() {
        let p: Principal = "ryjl3-tyaaa-aaaaa-aaaba-cai".parse().unwrap();
        assert_eq!(p.to_string(), "ryjl3-tyaaa-aaaaa-aaaba-cai");
        assert_eq!(format!("{p:?}"), "Principal(ryjl3-tyaaa-aaaaa-aaaba-cai)");
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&Principal::anonymous()).unwrap();
        assert_eq!(json, r#""2vxsx-fae""#);
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert!(back.is_anonymous());
        assert!(serde_json::from_str::<Principal>(r#""2vxsxfae""#).is_err());
    }
}
