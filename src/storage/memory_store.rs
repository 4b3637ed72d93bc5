//! In-memory implementation of the holding store.
//!
//! Used by tests and by embedders that do not want filesystem persistence.

use std::sync::RwLock;

use crate::errors::Result;
use crate::holdings::{Holding, HoldingStoreTrait};

/// Holding store backed by process memory. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryHoldingStore {
    holdings: RwLock<Option<Vec<Holding>>>,
}

impl MemoryHoldingStore {
    /// Creates a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a holding set.
    pub fn with_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: RwLock::new(Some(holdings)),
        }
    }
}

impl HoldingStoreTrait for MemoryHoldingStore {
    fn load(&self) -> Result<Option<Vec<Holding>>> {
        Ok(self.holdings.read().unwrap().clone())
    }

    fn save(&self, holdings: &[Holding]) -> Result<()> {
        *self.holdings.write().unwrap() = Some(holdings.to_vec());
        Ok(())
    }
}
