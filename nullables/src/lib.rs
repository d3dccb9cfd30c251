//! Nullable infrastructure for deterministic testing.
//!
//! The ledger's external collaborators (clock, validator) are abstracted
//! behind traits. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never search for proofs
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod validator;

pub use clock::NullClock;
pub use validator::{NullValidator, NullValidatorError};
