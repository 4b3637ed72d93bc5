//! Divitrack Core - holding registry and income history reconstruction.
//!
//! This crate contains the core business logic for the dividend income
//! tracker: an owned registry of equity holdings with an append-only
//! per-holding payout-rate log, and the calculator that reconstructs the
//! portfolio-wide income trend from those logs. Persistence and ticker
//! name lookup are defined as traits, with a JSON file store and a static
//! symbol table provided as implementations.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod snapshot;
pub mod storage;
pub mod symbols;
pub mod utils;

// Re-export common types from the holdings and snapshot modules
pub use holdings::*;
pub use snapshot::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
