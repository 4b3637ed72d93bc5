//! JSON file implementation of the holding store.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, StorageError};
use crate::holdings::{Holding, HoldingStoreTrait};

/// Persists the holding set as one pretty-printed JSON file: an array of
/// holding records with their embedded rate-change histories.
///
/// Saves write to a sibling temp file and rename it over the target, so a
/// crash mid-save never truncates previously stored data.
pub struct JsonHoldingStore {
    path: PathBuf,
}

impl JsonHoldingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HoldingStoreTrait for JsonHoldingStore {
    fn load(&self) -> Result<Option<Vec<Holding>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        let holdings = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;
        Ok(Some(holdings))
    }

    fn save(&self, holdings: &[Holding]) -> Result<()> {
        let raw = serde_json::to_string_pretty(holdings)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        debug!(
            "Saved {} holding(s) to {}",
            holdings.len(),
            self.path.display()
        );
        Ok(())
    }
}
