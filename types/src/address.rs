//! Participant address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque participant identifier (sender, receiver or miner).
///
/// Stored structurally: no prefix, checksum or length rules are enforced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// The sender of system-issued transactions (genesis and mining rewards).
    pub const SYSTEM: &'static str = "0";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The `"0"` address used as sender for genesis and reward transactions.
    pub fn system() -> Self {
        Self(Self::SYSTEM.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_system(&self) -> bool {
        self.0 == Self::SYSTEM
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&String> for Address {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}
