//! The fixed proof threshold.

/// A proof is valid when the first 8 bytes (LE) of
/// `Blake2b(digest || nonce)` are at least this value.
///
/// Roughly one nonce in 256 qualifies.
pub const PROOF_DIFFICULTY: u64 = 0xff00_0000_0000_0000;
