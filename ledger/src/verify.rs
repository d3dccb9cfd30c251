//! Full-chain integrity verification.
//!
//! A linear scan that stops at the first violation:
//! 1. an empty chain is reported as [`ChainStatus::Empty`];
//! 2. genesis must have index 1 and the `"0"` previous hash;
//! 3. every later block must carry the digest and the proof the validator
//!    re-derives from its predecessor's first transaction.

use cairn_types::Digest;
use thiserror::Error;

use crate::block::Block;
use crate::validator::Validator;

/// Outcome of a chain verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainStatus {
    /// No blocks at all.
    Empty,
    /// Every check passed.
    Valid { length: usize },
    /// The first check that failed.
    Invalid(ChainViolation),
}

impl ChainStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn violation(&self) -> Option<&ChainViolation> {
        match self {
            Self::Invalid(v) => Some(v),
            _ => None,
        }
    }
}

/// Why a chain was rejected. Every variant names the offending block index.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChainViolation {
    #[error("invalid genesis block: index {index}, previous hash {previous_hash}")]
    InvalidGenesis { index: u64, previous_hash: Digest },

    #[error("block {index} has an invalid previous hash")]
    PreviousHashMismatch { index: u64 },

    #[error("proof of work for block {index} is invalid")]
    ProofMismatch { index: u64 },

    #[error("proof for block {index} could not be regenerated")]
    ProofUnavailable { index: u64 },
}

impl ChainViolation {
    pub fn index(&self) -> u64 {
        match self {
            Self::InvalidGenesis { index, .. }
            | Self::PreviousHashMismatch { index }
            | Self::ProofMismatch { index }
            | Self::ProofUnavailable { index } => *index,
        }
    }
}

/// Verify `chain` end to end against `validator`.
pub fn verify_chain<V: Validator>(chain: &[Block], validator: &V) -> ChainStatus {
    let Some(genesis) = chain.first() else {
        tracing::warn!("the chain is empty");
        return ChainStatus::Empty;
    };

    if !genesis.is_genesis() || !genesis.previous_hash.is_zero() {
        let violation = ChainViolation::InvalidGenesis {
            index: genesis.index,
            previous_hash: genesis.previous_hash,
        };
        tracing::warn!(index = genesis.index, "invalid genesis block");
        return ChainStatus::Invalid(violation);
    }

    for pair in chain.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if let Err(violation) = check_link(previous, current, validator) {
            tracing::warn!(index = current.index, %violation, "chain rejected");
            return ChainStatus::Invalid(violation);
        }
    }

    tracing::info!(length = chain.len(), "the chain is valid");
    ChainStatus::Valid {
        length: chain.len(),
    }
}

fn check_link<V: Validator>(
    previous: &Block,
    current: &Block,
    validator: &V,
) -> Result<(), ChainViolation> {
    let index = current.index;
    let Some(anchor) = previous.first_transaction() else {
        return Err(ChainViolation::PreviousHashMismatch { index });
    };

    if current.previous_hash != validator.calculate_hash(anchor) {
        return Err(ChainViolation::PreviousHashMismatch { index });
    }

    match validator.generate_proof(anchor) {
        Ok(expected) if expected == current.proof => Ok(()),
        Ok(_) => Err(ChainViolation::ProofMismatch { index }),
        Err(e) => {
            tracing::debug!(index, error = %e, "proof regeneration failed");
            Err(ChainViolation::ProofUnavailable { index })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Blake2bValidator;
    use cairn_types::{Amount, Proof, Timestamp, Transaction};

    fn tx(n: u64) -> Transaction {
        Transaction::new(format!("sender{n}"), format!("receiver{n}"), Amount::new(n))
    }

    fn block(index: u64, first: Transaction, proof: Proof, previous_hash: Digest) -> Block {
        let v = Blake2bValidator::new();
        Block {
            index,
            timestamp: Timestamp::EPOCH,
            hash: v.calculate_hash(&first),
            transactions: vec![first],
            proof,
            previous_hash,
        }
    }

    /// Hand-built chain linked the same way the ledger links it.
    fn linked_chain(len: u64) -> Vec<Block> {
        let v = Blake2bValidator::new();
        let mut chain = vec![block(1, tx(1), Proof(0), Digest::ZERO)];
        for i in 2..=len {
            let anchor = chain.last().unwrap().transactions[0].clone();
            let proof = v.generate_proof(&anchor).unwrap();
            chain.push(block(i, tx(i), proof, v.calculate_hash(&anchor)));
        }
        chain
    }

    #[test]
    fn empty_chain_is_reported_as_empty() {
        assert_eq!(verify_chain(&[], &Blake2bValidator::new()), ChainStatus::Empty);
    }

    #[test]
    fn linked_chain_is_valid() {
        let status = verify_chain(&linked_chain(4), &Blake2bValidator::new());
        assert_eq!(status, ChainStatus::Valid { length: 4 });
        assert!(status.is_valid());
        assert!(status.violation().is_none());
    }

    #[test]
    fn genesis_with_wrong_index_is_rejected() {
        let mut chain = linked_chain(1);
        chain[0].index = 2;
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert!(matches!(
            status,
            ChainStatus::Invalid(ChainViolation::InvalidGenesis { index: 2, .. })
        ));
    }

    #[test]
    fn genesis_with_link_is_rejected() {
        let mut chain = linked_chain(2);
        chain[0].previous_hash = Digest::new([1; 32]);
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert_eq!(status.violation().map(ChainViolation::index), Some(1));
    }

    #[test]
    fn broken_link_reports_current_index() {
        let mut chain = linked_chain(3);
        chain[2].previous_hash = Digest::new([9; 32]);
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert_eq!(
            status,
            ChainStatus::Invalid(ChainViolation::PreviousHashMismatch { index: 3 })
        );
    }

    #[test]
    fn wrong_proof_reports_current_index() {
        let mut chain = linked_chain(3);
        chain[1].proof = Proof(chain[1].proof.0.wrapping_add(1));
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert_eq!(
            status,
            ChainStatus::Invalid(ChainViolation::ProofMismatch { index: 2 })
        );
    }

    #[test]
    fn link_is_checked_before_proof() {
        let mut chain = linked_chain(2);
        chain[1].proof = Proof(chain[1].proof.0.wrapping_add(1));
        chain[1].previous_hash = Digest::new([3; 32]);
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert!(matches!(
            status.violation(),
            Some(ChainViolation::PreviousHashMismatch { index: 2 })
        ));
    }

    #[test]
    fn predecessor_without_transactions_breaks_the_link() {
        let mut chain = linked_chain(2);
        chain[0].transactions.clear();
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert_eq!(
            status.violation(),
            Some(&ChainViolation::PreviousHashMismatch { index: 2 })
        );
    }

    #[test]
    fn first_failure_wins() {
        let mut chain = linked_chain(4);
        chain[1].previous_hash = Digest::new([5; 32]);
        chain[3].previous_hash = Digest::new([6; 32]);
        let status = verify_chain(&chain, &Blake2bValidator::new());
        assert_eq!(status.violation().map(ChainViolation::index), Some(2));
    }

    #[test]
    fn violation_messages_name_the_block() {
        let v = ChainViolation::ProofMismatch { index: 7 };
        assert_eq!(v.to_string(), "proof of work for block 7 is invalid");
        let v = ChainViolation::PreviousHashMismatch { index: 3 };
        assert_eq!(v.to_string(), "block 3 has an invalid previous hash");
    }
}
