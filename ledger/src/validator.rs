//! The hashing and proof capability the ledger is built on.
//!
//! Provides the [`Validator`] trait so the chain logic can be exercised with
//! any deterministic digest/proof scheme, and [`Blake2bValidator`] as the
//! default implementation.

use std::error::Error;

use cairn_crypto::hash_transaction;
use cairn_types::{Digest, Proof, Transaction};
use cairn_work::{ProofGenerator, WorkError, PROOF_DIFFICULTY};

/// Digest and proof derivation over a single transaction.
///
/// Both operations must be pure: the same transaction always yields the same
/// digest and the same proof, because verification re-derives them and
/// compares against what was stored when the block was sealed.
pub trait Validator: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    /// Digest used to stamp a block's own `hash` and to link its successor.
    fn calculate_hash(&self, tx: &Transaction) -> Digest;

    /// Proof minted for a new block and re-derived during verification.
    fn generate_proof(&self, tx: &Transaction) -> Result<Proof, Self::Error>;

    /// Whether `proof` is exactly the proof this validator derives for `tx`.
    fn verify_proof(&self, tx: &Transaction, proof: Proof) -> bool {
        matches!(self.generate_proof(tx), Ok(expected) if expected == proof)
    }
}

/// Blake2b-256 digests with a fixed-difficulty, lowest-nonce proof search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake2bValidator {
    generator: ProofGenerator,
}

impl Blake2bValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for Blake2bValidator {
    type Error = WorkError;

    fn calculate_hash(&self, tx: &Transaction) -> Digest {
        hash_transaction(tx)
    }

    fn generate_proof(&self, tx: &Transaction) -> Result<Proof, Self::Error> {
        self.generator
            .generate(&hash_transaction(tx), PROOF_DIFFICULTY)
    }
}
