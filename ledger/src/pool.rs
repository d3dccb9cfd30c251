//! Pending transaction pool.

use cairn_types::Transaction;

/// Transactions submitted but not yet sealed into a block, in arrival order.
///
/// No de-duplication and no validation: every pushed transaction is kept.
#[derive(Clone, Debug, Default)]
pub struct TransactionPool {
    transactions: Vec<Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The transaction a sealed block would be hashed from.
    pub fn first(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Drain every pending transaction, leaving the pool empty.
    pub fn take(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.transactions)
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}
