//! A thread-safe handle to a single ledger.
//!
//! Every operation takes the same mutex, so draining the pool into a block
//! is atomic with respect to concurrent submissions, and verification always
//! observes a chain no block creation is interleaved with.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cairn_types::{Address, Amount, Clock, SystemClock, Transaction};

use crate::block::Block;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::miner::Miner;
use crate::validator::{Blake2bValidator, Validator};
use crate::verify::ChainStatus;

/// Cloneable, `Send + Sync` handle around one [`Ledger`].
pub struct SharedLedger<V = Blake2bValidator, C = SystemClock> {
    inner: Arc<Mutex<Ledger<V, C>>>,
}

impl<V, C> Clone for SharedLedger<V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Validator, C: Clock> SharedLedger<V, C> {
    pub fn new(ledger: Ledger<V, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // No ledger operation panics between draining the pool and pushing the
    // block, so a poisoned lock still guards a consistent ledger.
    fn lock(&self) -> MutexGuard<'_, Ledger<V, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn init(&self) -> Result<(), LedgerError> {
        self.lock().init()
    }

    pub fn new_transaction(
        &self,
        sender: impl Into<Address>,
        receiver: impl Into<Address>,
        amount: Amount,
    ) -> Transaction {
        self.lock().new_transaction(sender, receiver, amount)
    }

    pub fn mine(&self, miner: impl Into<Miner>) -> Result<Block, LedgerError> {
        self.lock().mine(miner)
    }

    /// Snapshot of the chain at the time of the call.
    pub fn chain(&self) -> Vec<Block> {
        self.lock().chain().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn verify(&self) -> ChainStatus {
        self.lock().verify()
    }

    pub fn check_chain(&self) -> Vec<Block> {
        self.lock().check_chain()
    }

    /// Run `f` with exclusive access to the ledger.
    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger<V, C>) -> R) -> R {
        f(&mut self.lock())
    }
}
