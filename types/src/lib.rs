//! Fundamental types for the Cairn ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! addresses, amounts, digests, proofs, timestamps and the transaction record itself.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod proof;
pub mod time;
pub mod transaction;

pub use address::Address;
pub use amount::Amount;
pub use error::TypesError;
pub use hash::Digest;
pub use proof::Proof;
pub use time::{Clock, SystemClock, Timestamp};
pub use transaction::Transaction;
