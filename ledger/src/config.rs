//! Ledger configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use cairn_types::{Address, Amount};

use crate::genesis::GENESIS_RECEIVER;
use crate::LedgerError;

/// Configuration for a [`Ledger`](crate::Ledger).
///
/// Can be loaded from a TOML file via [`LedgerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Receiver of the synthetic genesis transaction.
    #[serde(default = "default_genesis_receiver")]
    pub genesis_receiver: Address,

    /// Reward paid to miners that do not name their own amount.
    #[serde(default)]
    pub mining_reward: Amount,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_genesis_receiver() -> Address {
    Address::from(GENESIS_RECEIVER)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl LedgerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LedgerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LedgerError> {
        toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    ///
    /// TOML integers are signed 64-bit, so a `mining_reward` above
    /// `i64::MAX` cannot be written and yields [`LedgerError::Config`].
    pub fn to_toml_string(&self) -> Result<String, LedgerError> {
        toml::to_string_pretty(self).map_err(|e| LedgerError::Config(e.to_string()))
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            genesis_receiver: default_genesis_receiver(),
            mining_reward: Amount::ZERO,
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
