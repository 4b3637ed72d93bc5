//! Snapshot module - income history reconstruction.

pub mod snapshot_calculator;
mod snapshot_model;

pub use snapshot_calculator::*;
pub use snapshot_model::*;
