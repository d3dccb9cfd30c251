//! Proof value binding consecutive blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nonce produced by the proof search for a transaction.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Proof(pub u64);

impl From<u64> for Proof {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
