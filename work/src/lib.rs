//! Proof search binding consecutive blocks.
//!
//! Not a mining puzzle with adjustable difficulty: every proof is searched at
//! the same fixed threshold, and the search always yields the *lowest*
//! qualifying nonce so that any party can regenerate the exact same value.

pub mod error;
pub mod generator;
pub mod thresholds;
pub mod validator;

pub use error::WorkError;
pub use generator::ProofGenerator;
pub use thresholds::PROOF_DIFFICULTY;
pub use validator::{validate_proof, work_value};
