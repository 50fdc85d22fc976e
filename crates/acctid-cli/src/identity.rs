//! # Identity Records
//!
//! A JSON file standing in for a resolved login session. The record is a
//! [`PrincipalSource`]: an absent principal or one that does not decode
//! surfaces as `InvalidPrincipal` during derivation instead of being
//! replaced by a default.
//!
//! ```json
//! { "principal": "2vxsx-fae" }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use acctid_account::PrincipalSource;
use acctid_core::{Principal, PrincipalError};

/// The identity a session resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Principal in text form, or `null` before login completes.
    #[serde(default)]
    pub principal: Option<String>,
}

impl IdentityRecord {
    /// Read an identity record from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading identity record: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing identity record JSON: {}", path.display()))
    }
}

impl PrincipalSource for IdentityRecord {
    fn principal(&self) -> Result<Principal, PrincipalError> {
        let text = self.principal.as_deref().ok_or(PrincipalError::Missing)?;
        Principal::from_text(text).map_err(|e| PrincipalError::Corrupt(e.to_string()))
    }
}
