//! Miner identity passed to [`Ledger::mine`](crate::Ledger::mine).

use cairn_types::{Address, Amount};

/// Who receives the reward transaction of a mined block, and how much.
///
/// A `None` reward falls back to [`LedgerConfig::mining_reward`](crate::LedgerConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Miner {
    pub address: Address,
    pub reward: Option<Amount>,
}

impl Miner {
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            reward: None,
        }
    }

    pub fn with_reward(address: impl Into<Address>, reward: Amount) -> Self {
        Self {
            address: address.into(),
            reward: Some(reward),
        }
    }
}

impl From<&str> for Miner {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Miner {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Address> for Miner {
    fn from(address: Address) -> Self {
        Self::new(address)
    }
}
