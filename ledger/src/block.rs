//! Block structure.

use cairn_types::{Digest, Proof, Timestamp, Transaction};
use serde::{Deserialize, Serialize};

/// One sealed unit of the chain.
///
/// Only the *first* transaction takes part in linking: `hash` is its digest,
/// and the successor block's `previous_hash` and `proof` are both derived
/// from it. Later transactions in the batch are carried but not covered by
/// any digest, which is a known limitation of this proof scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain, starting at 1 for genesis.
    pub index: u64,
    /// When the block was sealed.
    pub timestamp: Timestamp,
    /// The pending pool at sealing time, in arrival order.
    pub transactions: Vec<Transaction>,
    /// Proof derived from the previous block's first transaction.
    pub proof: Proof,
    /// Digest of this block's first transaction.
    pub hash: Digest,
    /// Digest of the previous block's first transaction (`"0"` for genesis).
    pub previous_hash: Digest,
}

impl Block {
    pub const GENESIS_INDEX: u64 = 1;

    pub fn first_transaction(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    pub fn is_genesis(&self) -> bool {
        self.index == Self::GENESIS_INDEX
    }
}
