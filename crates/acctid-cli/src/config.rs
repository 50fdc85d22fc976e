//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default,
//! and command-line flags override whatever the file sets.
//!
//! ```yaml
//! default_subaccount: "0000000000000000000000000000000000000000000000000000000000000001"
//! output: json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use acctid_core::SubAccount;

/// Settings loaded from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Sub-account (64 hex chars) used when `--subaccount` is not given.
    pub default_subaccount: Option<String>,
    /// Output format used when `--json` is not given.
    pub output: OutputFormat,
}

/// How `derive` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare hex identifier.
    #[default]
    Text,
    /// A JSON object with principal, sub-account and identifier.
    Json,
}

impl CliConfig {
    /// Read and parse a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config YAML: {}", path.display()))?;
        // Fail at load time rather than on first use.
        config.default_subaccount()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise return the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured default sub-account, parsed.
    pub fn default_subaccount(&self) -> Result<Option<SubAccount>> {
        self.default_subaccount
            .as_deref()
            .map(|hex| SubAccount::from_hex(hex).context("config: default_subaccount"))
            .transpose()
    }
}
