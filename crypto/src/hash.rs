//! Blake2b hashing for transactions.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as _};
use cairn_types::{Digest, Transaction};

use crate::encoding::encode_transaction;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Digest of a transaction's canonical encoding.
pub fn hash_transaction(tx: &Transaction) -> Digest {
    Digest::new(blake2b_256(&encode_transaction(tx)))
}
