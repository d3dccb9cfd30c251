//! The transaction record sealed into blocks.

use crate::{Address, Amount};
use serde::{Deserialize, Serialize};

/// A transfer of `amount` from `sender` to `receiver`.
///
/// Immutable once created. Identity is structural: two transactions with
/// the same fields are the same transaction, and nothing is validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    sender: Address,
    receiver: Address,
    amount: Amount,
}

impl Transaction {
    pub fn new(sender: impl Into<Address>, receiver: impl Into<Address>, amount: Amount) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    /// A system-issued transaction (sender `"0"`), used for genesis and rewards.
    pub fn system(receiver: impl Into<Address>, amount: Amount) -> Self {
        Self::new(Address::system(), receiver, amount)
    }

    pub fn sender(&self) -> &Address {
        &self.sender
    }

    pub fn receiver(&self) -> &Address {
        &self.receiver
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }
}
