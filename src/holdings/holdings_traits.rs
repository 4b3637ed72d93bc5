//! Holding store trait.
//!
//! This trait defines the contract for persisting the holding set without
//! any backend-specific types, allowing for different storage
//! implementations (JSON file, in-memory, ...).

use super::holdings_model::Holding;
use crate::errors::Result;

/// Trait defining the contract for the persistence collaborator.
///
/// The registry calls `save` after every mutation and `load` once at
/// startup. Implementations persist the full holding set as a whole;
/// there is no per-record API.
pub trait HoldingStoreTrait: Send + Sync {
    /// Loads the stored holding set.
    ///
    /// `Ok(None)` means nothing has been stored yet, which is a valid
    /// initial state (empty holding set).
    fn load(&self) -> Result<Option<Vec<Holding>>>;

    /// Replaces the stored holding set.
    fn save(&self, holdings: &[Holding]) -> Result<()>;
}
