//! Proof generation (multi-threaded CPU, deterministic result).

use rayon::prelude::*;

use crate::validator::work_value;
use crate::WorkError;
use cairn_types::{Digest, Proof};

/// Searches for the lowest nonce that meets a difficulty threshold.
///
/// Each batch of nonces is scanned in parallel via rayon, but `find_first`
/// keeps the result independent of thread scheduling.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProofGenerator;

/// Nonces per parallel batch.
const BATCH_SIZE: u64 = 4096;

impl ProofGenerator {
    /// Generate the lowest nonce for `digest` whose work value is `>= difficulty`.
    pub fn generate(&self, digest: &Digest, difficulty: u64) -> Result<Proof, WorkError> {
        if difficulty == 0 {
            return Ok(Proof(0));
        }

        let mut start = 0u64;
        loop {
            let end = start.saturating_add(BATCH_SIZE);
            let found = (start..end)
                .into_par_iter()
                .find_first(|&nonce| work_value(digest, nonce) >= difficulty);
            if let Some(nonce) = found {
                return Ok(Proof(nonce));
            }
            if end == u64::MAX {
                // The range above is half-open, so u64::MAX itself is still unchecked.
                return if work_value(digest, u64::MAX) >= difficulty {
                    Ok(Proof(u64::MAX))
                } else {
                    Err(WorkError::Exhausted { difficulty })
                };
            }
            start = end;
        }
    }
}
