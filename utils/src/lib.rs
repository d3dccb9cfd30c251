//! Shared utilities for the Cairn ledger.

pub mod logging;

pub use logging::{init_logging, LogFormat};
