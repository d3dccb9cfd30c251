//! Hashing primitives for the Cairn ledger.
//!
//! - **Blake2b-256** for all digests
//! - A canonical, length-prefixed byte encoding for transactions so that
//!   digests are stable across platforms and field boundaries are unambiguous

pub mod encoding;
pub mod hash;

pub use encoding::{encode_transaction, TX_DOMAIN};
pub use hash::{blake2b_256, hash_transaction};
