//! Proof validation.

use cairn_crypto::blake2b_256;
use cairn_types::Digest;

/// The work value of `nonce` against `digest`: first 8 bytes (LE) of `Blake2b(digest || nonce_le)`.
pub fn work_value(digest: &Digest, nonce: u64) -> u64 {
    let mut input = [0u8; 40];
    input[0..32].copy_from_slice(digest.as_bytes());
    input[32..40].copy_from_slice(&nonce.to_le_bytes());
    let hash = blake2b_256(&input);
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash[0..8]);
    u64::from_le_bytes(head)
}

/// Validate that a nonce meets `difficulty` for the given digest.
pub fn validate_proof(digest: &Digest, nonce: u64, difficulty: u64) -> bool {
    work_value(digest, nonce) >= difficulty
}
