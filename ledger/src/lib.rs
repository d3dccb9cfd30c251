//! Append-only, hash-linked ledger.
//!
//! Transactions are collected in a pending pool and sealed into blocks.
//! Each block is bound to its predecessor through a digest and a proof, both
//! derived from the predecessor's first transaction, and the whole chain can
//! be re-verified at any time.

pub mod block;
pub mod config;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod miner;
pub mod pool;
pub mod shared;
pub mod validator;
pub mod verify;

pub use block::Block;
pub use config::LedgerConfig;
pub use error::LedgerError;
pub use genesis::{genesis_transaction, GENESIS_RECEIVER};
pub use ledger::{Ledger, LedgerSummary};
pub use miner::Miner;
pub use pool::TransactionPool;
pub use shared::SharedLedger;
pub use validator::{Blake2bValidator, Validator};
pub use verify::{verify_chain, ChainStatus, ChainViolation};
