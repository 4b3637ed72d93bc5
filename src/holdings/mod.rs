//! Holdings module - domain models, registry service, and traits.

mod holdings_model;
mod holdings_service;
mod holdings_traits;

// Re-export the public interface
pub use holdings_model::{Holding, HoldingDraft, HoldingInput, RateChangeEvent};
pub use holdings_service::HoldingService;
pub use holdings_traits::HoldingStoreTrait;


#[cfg(test)]
mod holdings_service_tests;
