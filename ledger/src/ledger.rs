//! The ledger: one chain plus one pending pool.

use cairn_types::{Address, Amount, Clock, Digest, Proof, SystemClock, Transaction};

use crate::block::Block;
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::genesis::genesis_transaction;
use crate::miner::Miner;
use crate::pool::TransactionPool;
use crate::validator::{Blake2bValidator, Validator};
use crate::verify::{verify_chain, ChainStatus};

/// Owns the chain and the pending pool, and seals one into the other.
///
/// There is no process-wide instance: construct one explicitly and pass it
/// to whoever needs it, or wrap it in a [`SharedLedger`](crate::SharedLedger)
/// when several threads must see the same chain.
pub struct Ledger<V = Blake2bValidator, C = SystemClock> {
    chain: Vec<Block>,
    pending: TransactionPool,
    validator: V,
    clock: C,
    config: LedgerConfig,
}

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub blocks: usize,
    pub pending: usize,
    /// Transactions sealed into blocks, genesis included.
    pub transactions: usize,
}

impl Ledger {
    /// A ledger with default configuration, already holding its genesis block.
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Result<Self, LedgerError> {
        Self::with_parts(config, Blake2bValidator::new(), SystemClock)
    }
}

impl<V: Validator, C: Clock> Ledger<V, C> {
    /// Assemble a ledger from explicit collaborators and run [`init`](Self::init).
    pub fn with_parts(config: LedgerConfig, validator: V, clock: C) -> Result<Self, LedgerError> {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: TransactionPool::new(),
            validator,
            clock,
            config,
        };
        ledger.init()?;
        Ok(ledger)
    }

    /// Reset chain and pool, then seal the genesis block.
    ///
    /// Afterwards the chain holds exactly one block.
    pub fn init(&mut self) -> Result<(), LedgerError> {
        self.chain.clear();
        self.pending.clear();

        let tx = genesis_transaction(&self.config.genesis_receiver);
        let proof = self.generate_proof(&tx)?;
        self.pending.push(tx);
        let genesis = self.new_block(proof, Digest::ZERO)?;
        tracing::debug!(hash = %genesis.hash, proof = %genesis.proof, "genesis block sealed");
        Ok(())
    }

    /// Append a transaction to the pending pool and return it.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<Address>,
        receiver: impl Into<Address>,
        amount: Amount,
    ) -> Transaction {
        let tx = Transaction::new(sender, receiver, amount);
        self.pending.push(tx.clone());
        tx
    }

    /// Seal the pending pool into a new block and append it to the chain.
    ///
    /// `previous_hash` is ignored when the chain is empty: the first block
    /// always links to `"0"`. Fails with [`LedgerError::PoolEmpty`] without
    /// touching the chain if there is nothing to seal.
    pub fn new_block(&mut self, proof: Proof, previous_hash: Digest) -> Result<Block, LedgerError> {
        let first = self.pending.first().ok_or(LedgerError::PoolEmpty)?;
        let hash = self.validator.calculate_hash(first);
        let previous_hash = if self.chain.is_empty() {
            Digest::ZERO
        } else {
            previous_hash
        };

        let block = Block {
            index: self.chain.len() as u64 + 1,
            timestamp: self.clock.now(),
            transactions: self.pending.take(),
            proof,
            hash,
            previous_hash,
        };
        tracing::debug!(
            index = block.index,
            hash = %block.hash,
            transactions = block.transactions.len(),
            "block sealed"
        );
        self.chain.push(block.clone());
        Ok(block)
    }

    /// Reward `miner` and seal the pending pool into a new block.
    ///
    /// The block's proof and previous hash are both derived from the first
    /// transaction of the current last block, which is exactly what
    /// [`check_chain`](Self::check_chain) re-derives.
    pub fn mine(&mut self, miner: impl Into<Miner>) -> Result<Block, LedgerError> {
        let miner = miner.into();
        let last = self.last_block().ok_or(LedgerError::Uninitialised)?;
        let anchor = last
            .first_transaction()
            .ok_or(LedgerError::EmptyBlock { index: last.index })?;

        let proof = self.generate_proof(anchor)?;
        let previous_hash = self.validator.calculate_hash(anchor);

        let reward = miner.reward.unwrap_or(self.config.mining_reward);
        self.pending
            .push(Transaction::system(miner.address.clone(), reward));

        let block = self.new_block(proof, previous_hash)?;
        tracing::info!(
            miner = %miner.address,
            index = block.index,
            proof = %block.proof,
            "block mined"
        );
        Ok(block)
    }

    /// Read-only view of the chain.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Mutable access to existing blocks, for simulating tampering.
    ///
    /// The chain length cannot change through this view.
    pub fn chain_mut(&mut self) -> &mut [Block] {
        &mut self.chain
    }

    pub fn last_block(&self) -> Option<&Block> {
        self.chain.last()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn pending(&self) -> &TransactionPool {
        &self.pending
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            blocks: self.chain.len(),
            pending: self.pending.len(),
            transactions: self.chain.iter().map(|b| b.transactions.len()).sum(),
        }
    }

    /// Verify the whole chain and report the first violation, if any.
    pub fn verify(&self) -> ChainStatus {
        verify_chain(&self.chain, &self.validator)
    }

    /// The full chain if it verifies, otherwise an empty vector.
    ///
    /// An empty result does not say whether the chain was empty or invalid;
    /// use [`verify`](Self::verify) to tell the two apart.
    pub fn check_chain(&self) -> Vec<Block> {
        match self.verify() {
            ChainStatus::Valid { .. } => self.chain.clone(),
            ChainStatus::Empty | ChainStatus::Invalid(_) => Vec::new(),
        }
    }

    fn generate_proof(&self, tx: &Transaction) -> Result<Proof, LedgerError> {
        self.validator
            .generate_proof(tx)
            .map_err(|e| LedgerError::Validator(e.to_string()))
    }
}
