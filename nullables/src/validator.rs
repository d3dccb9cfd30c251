//! Nullable validator — cheap, deterministic digests and proofs.

use cairn_crypto::hash_transaction;
use cairn_ledger::Validator;
use cairn_types::{Digest, Proof, Transaction};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("proof generation disabled")]
pub struct NullValidatorError;

/// A validator whose proof is read straight off the transaction digest.
///
/// Proof generation can be switched off to exercise failure paths, and the
/// number of proof requests is recorded. Clones share that state.
#[derive(Clone, Debug, Default)]
pub struct NullValidator {
    fail_proofs: Arc<AtomicBool>,
    proof_calls: Arc<AtomicUsize>,
}

impl NullValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `generate_proof` call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.fail_proofs.store(failing, Ordering::SeqCst);
    }

    /// How many times a proof was requested.
    pub fn proof_calls(&self) -> usize {
        self.proof_calls.load(Ordering::SeqCst)
    }

    /// The proof this validator assigns to `tx`.
    pub fn expected_proof(tx: &Transaction) -> Proof {
        let digest = hash_transaction(tx);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        Proof(u64::from_le_bytes(head))
    }
}

impl Validator for NullValidator {
    type Error = NullValidatorError;

    fn calculate_hash(&self, tx: &Transaction) -> Digest {
        hash_transaction(tx)
    }

    fn generate_proof(&self, tx: &Transaction) -> Result<Proof, Self::Error> {
        self.proof_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_proofs.load(Ordering::SeqCst) {
            return Err(NullValidatorError);
        }
        Ok(Self::expected_proof(tx))
    }
}
