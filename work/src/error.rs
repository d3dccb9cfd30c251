use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkError {
    #[error("no nonce meets difficulty {difficulty}")]
    Exhausted { difficulty: u64 },
}
