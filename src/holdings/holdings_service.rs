use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::holdings_model::{Holding, HoldingDraft, HoldingInput, RateChangeEvent};
use super::holdings_traits::HoldingStoreTrait;
use crate::errors::Result;
use crate::snapshot::{build_income_history, IncomeSnapshot};
use crate::symbols::SymbolLookupTrait;
use crate::utils::time_utils;

/// Service owning the holding collection and its rate-change log.
///
/// The collection is exclusively owned; callers go through the operations
/// here and never reach into it directly. Every mutation is persisted via
/// the store before returning.
pub struct HoldingService {
    holdings: Vec<Holding>,
    store: Arc<dyn HoldingStoreTrait>,
    symbol_lookup: Arc<dyn SymbolLookupTrait>,
}

impl HoldingService {
    /// Creates a service over an empty holding set.
    pub fn new(store: Arc<dyn HoldingStoreTrait>, symbol_lookup: Arc<dyn SymbolLookupTrait>) -> Self {
        Self {
            holdings: Vec::new(),
            store,
            symbol_lookup,
        }
    }

    /// Creates a service from previously stored holdings.
    ///
    /// Absent stored data is a valid initial state and yields an empty set.
    pub fn load(
        store: Arc<dyn HoldingStoreTrait>,
        symbol_lookup: Arc<dyn SymbolLookupTrait>,
    ) -> Result<Self> {
        let holdings = store.load()?.unwrap_or_default();
        debug!("Loaded {} holding(s) from store", holdings.len());
        Ok(Self {
            holdings,
            store,
            symbol_lookup,
        })
    }

    /// Inserts or updates a holding from form input, keyed by ticker.
    ///
    /// A draft that fails validation is a caller error and no-ops,
    /// returning `Ok(None)`; validation belongs at the boundary. On
    /// update, a rate-change event is appended iff the submitted rate
    /// differs from the stored current rate, so identical resubmissions
    /// never grow the history.
    pub fn upsert(&mut self, draft: HoldingDraft) -> Result<Option<Holding>> {
        let input = match draft.parse() {
            Ok(input) => input,
            Err(e) => {
                warn!("Rejected holding submission: {}", e);
                return Ok(None);
            }
        };

        let now = time_utils::now_millis();
        let display_name = self.resolve_display_name(&input);

        let position = self
            .holdings
            .iter()
            .position(|holding| holding.ticker == input.ticker);

        let holding = match position {
            Some(index) => {
                let existing = &mut self.holdings[index];
                existing.quantity = input.quantity;
                existing.display_name = display_name;
                if input.rate != existing.current_rate {
                    existing.history.push(RateChangeEvent {
                        timestamp: now,
                        rate: input.rate,
                    });
                    existing.current_rate = input.rate;
                }
                // updated_at is monotonically non-decreasing even if the
                // wall clock steps backwards.
                existing.updated_at = existing.updated_at.max(now);
                existing.clone()
            }
            None => {
                let holding = Holding {
                    id: Uuid::new_v4().to_string(),
                    ticker: input.ticker.clone(),
                    display_name,
                    quantity: input.quantity,
                    current_rate: input.rate,
                    created_at: now,
                    updated_at: now,
                    history: vec![RateChangeEvent {
                        timestamp: now,
                        rate: input.rate,
                    }],
                };
                self.holdings.push(holding.clone());
                holding
            }
        };

        debug!(
            "Upserted holding {} ({}), {} history event(s)",
            holding.ticker,
            holding.id,
            holding.history.len()
        );
        self.store.save(&self.holdings)?;
        Ok(Some(holding))
    }

    /// Deletes the holding with the given id.
    ///
    /// An unknown id means the intent is already satisfied; nothing is
    /// persisted in that case.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.holdings.len();
        self.holdings.retain(|holding| holding.id != id);
        if self.holdings.len() == before {
            debug!("Remove of unknown holding id {} ignored", id);
            return Ok(());
        }
        self.store.save(&self.holdings)?;
        Ok(())
    }

    /// Sum of expected income across all live holdings at current rates.
    pub fn total_income(&self) -> Decimal {
        self.holdings
            .iter()
            .fold(Decimal::zero(), |total, holding| {
                total + holding.expected_income()
            })
    }

    /// Read view of the holding collection for listing and display.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Recomputes the full income history series from current state.
    ///
    /// Pull-based: callers invoke this after each mutation cycle; there is
    /// no incremental update.
    pub fn income_history(&self) -> Vec<IncomeSnapshot> {
        build_income_history(&self.holdings, time_utils::now_millis())
    }

    fn resolve_display_name(&self, input: &HoldingInput) -> String {
        input
            .display_name
            .clone()
            .or_else(|| self.symbol_lookup.display_name(&input.ticker))
            .unwrap_or_else(|| input.ticker.clone())
    }
}
