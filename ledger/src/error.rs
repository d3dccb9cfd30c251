use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("cannot seal a block: the pending pool is empty")]
    PoolEmpty,

    #[error("ledger has no genesis block")]
    Uninitialised,

    #[error("block {index} carries no transactions to derive a link from")]
    EmptyBlock { index: u64 },

    #[error("validator error: {0}")]
    Validator(String),

    #[error("config error: {0}")]
    Config(String),
}
