//! Genesis block bootstrap values.
//!
//! The genesis block seals exactly one synthetic transaction from the system
//! address to a fixed placeholder receiver, and carries `previous_hash: "0"`.

use cairn_types::{Address, Amount, Transaction};

/// Placeholder receiver of the genesis transaction.
pub const GENESIS_RECEIVER: &str = "192.168.1.1:9999";

/// Build the synthetic transaction sealed into the genesis block.
pub fn genesis_transaction(receiver: &Address) -> Transaction {
    Transaction::system(receiver.clone(), Amount::ZERO)
}
