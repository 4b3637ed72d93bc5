//! Holding store implementations - JSON file and in-memory.

mod json_store;
mod memory_store;

pub use json_store::JsonHoldingStore;
pub use memory_store::MemoryHoldingStore;
