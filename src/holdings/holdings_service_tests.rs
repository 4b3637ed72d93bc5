//! Tests for the holding registry service.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::holdings::{HoldingDraft, HoldingService, HoldingStoreTrait};
    use crate::storage::MemoryHoldingStore;
    use crate::symbols::{NullSymbolLookup, StaticSymbolLookup};

    fn draft(ticker: &str, quantity: &str, rate: &str) -> HoldingDraft {
        HoldingDraft {
            ticker: ticker.to_string(),
            display_name: None,
            quantity: quantity.to_string(),
            rate: rate.to_string(),
        }
    }

    fn service() -> (HoldingService, Arc<MemoryHoldingStore>) {
        let store = Arc::new(MemoryHoldingStore::new());
        let service = HoldingService::new(store.clone(), Arc::new(NullSymbolLookup));
        (service, store)
    }

    // ==================== Upsert Tests ====================

    #[test]
    fn test_insert_seeds_one_history_event() {
        let (mut service, _) = service();

        let holding = service.upsert(draft("ko", "10", "1.84")).unwrap().unwrap();

        assert_eq!(holding.ticker, "KO");
        assert_eq!(holding.quantity, dec!(10));
        assert_eq!(holding.current_rate, dec!(1.84));
        assert_eq!(holding.history.len(), 1);
        assert_eq!(holding.history[0].rate, dec!(1.84));
        assert_eq!(holding.history[0].timestamp, holding.created_at);
    }

    #[test]
    fn test_resubmitting_ticker_updates_in_place() {
        let (mut service, _) = service();

        let first = service.upsert(draft("KO", "10", "1.84")).unwrap().unwrap();
        let second = service.upsert(draft("ko", "25", "1.84")).unwrap().unwrap();

        assert_eq!(service.holdings().len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.quantity, dec!(25));
        assert_eq!(second.created_at, first.created_at);
    }

    #[test]
    fn test_identical_rate_resubmission_does_not_grow_history() {
        let (mut service, _) = service();

        service.upsert(draft("KO", "10", "1.84")).unwrap();
        service.upsert(draft("KO", "10", "1.84")).unwrap();
        let holding = service.upsert(draft("KO", "30", "1.84")).unwrap().unwrap();

        assert_eq!(holding.history.len(), 1);
    }

    #[test]
    fn test_rate_change_appends_exactly_one_event() {
        let (mut service, _) = service();

        service.upsert(draft("KO", "10", "1.84")).unwrap();
        let holding = service.upsert(draft("KO", "10", "1.94")).unwrap().unwrap();

        assert_eq!(holding.current_rate, dec!(1.94));
        assert_eq!(holding.history.len(), 2);
        assert_eq!(holding.history[1].rate, dec!(1.94));
        // Past events are never rewritten
        assert_eq!(holding.history[0].rate, dec!(1.84));
    }

    #[test]
    fn test_invalid_draft_is_a_silent_no_op() {
        let (mut service, store) = service();

        assert!(service.upsert(draft("", "10", "1")).unwrap().is_none());
        assert!(service.upsert(draft("KO", "ten", "1")).unwrap().is_none());
        assert!(service.upsert(draft("KO", "10", "high")).unwrap().is_none());

        assert!(service.holdings().is_empty());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_updated_at_is_non_decreasing() {
        let (mut service, _) = service();

        let first = service.upsert(draft("KO", "10", "1.84")).unwrap().unwrap();
        let second = service.upsert(draft("KO", "10", "1.94")).unwrap().unwrap();

        assert!(second.updated_at >= first.updated_at);
    }

    // ==================== Display Name Tests ====================

    #[test]
    fn test_display_name_defaults_to_ticker() {
        let (mut service, _) = service();
        let holding = service.upsert(draft("ZZZZ", "1", "1")).unwrap().unwrap();
        assert_eq!(holding.display_name, "ZZZZ");
    }

    #[test]
    fn test_display_name_from_symbol_table() {
        let store = Arc::new(MemoryHoldingStore::new());
        let mut service = HoldingService::new(store, Arc::new(StaticSymbolLookup));

        let holding = service.upsert(draft("ko", "1", "1")).unwrap().unwrap();
        assert_eq!(holding.display_name, "The Coca-Cola Company");
    }

    #[test]
    fn test_supplied_display_name_wins_over_lookup() {
        let store = Arc::new(MemoryHoldingStore::new());
        let mut service = HoldingService::new(store, Arc::new(StaticSymbolLookup));

        let mut input = draft("KO", "1", "1");
        input.display_name = Some("My Coke Position".to_string());
        let holding = service.upsert(input).unwrap().unwrap();
        assert_eq!(holding.display_name, "My Coke Position");
    }

    // ==================== Remove Tests ====================

    #[test]
    fn test_remove_deletes_by_id() {
        let (mut service, _) = service();

        let ko = service.upsert(draft("KO", "10", "1.84")).unwrap().unwrap();
        service.upsert(draft("PEP", "5", "5.42")).unwrap();

        service.remove(&ko.id).unwrap();

        assert_eq!(service.holdings().len(), 1);
        assert_eq!(service.holdings()[0].ticker, "PEP");
        assert_eq!(service.total_income(), dec!(27.10));
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let (mut service, _) = service();
        service.upsert(draft("KO", "10", "1.84")).unwrap();

        service.remove("no-such-id").unwrap();

        assert_eq!(service.holdings().len(), 1);
    }

    #[test]
    fn test_remove_drops_contribution_from_history() {
        let (mut service, _) = service();

        let ko = service.upsert(draft("KO", "10", "1.84")).unwrap().unwrap();
        service.upsert(draft("PEP", "5", "5.42")).unwrap();
        service.remove(&ko.id).unwrap();

        let series = service.income_history();
        // Only PEP's event timestamps remain, and totals exclude KO entirely.
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total, dec!(27));
    }

    // ==================== Total Income Tests ====================

    #[test]
    fn test_total_income_empty_set_is_zero() {
        let (service, _) = service();
        assert_eq!(service.total_income(), Decimal::ZERO);
        assert!(service.income_history().is_empty());
    }

    #[test]
    fn test_total_income_sums_quantity_times_rate() {
        let (mut service, _) = service();
        service.upsert(draft("KO", "10", "1.84")).unwrap();
        service.upsert(draft("PEP", "5", "5.42")).unwrap();

        assert_eq!(service.total_income(), dec!(45.50));
        // Idempotent: recomputing without mutation yields the same result
        assert_eq!(service.total_income(), dec!(45.50));
    }

    #[test]
    fn test_total_income_reflects_latest_rate_only() {
        let (mut service, _) = service();
        service.upsert(draft("KO", "10", "1.84")).unwrap();
        service.upsert(draft("KO", "10", "2.00")).unwrap();

        assert_eq!(service.total_income(), dec!(20.00));
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_every_mutation_is_persisted() {
        let (mut service, store) = service();

        service.upsert(draft("KO", "10", "1.84")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().len(), 1);

        let pep = service.upsert(draft("PEP", "5", "5.42")).unwrap().unwrap();
        assert_eq!(store.load().unwrap().unwrap().len(), 2);

        service.remove(&pep.id).unwrap();
        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].ticker, "KO");
    }

    #[test]
    fn test_load_restores_stored_holdings() {
        let (mut service, store) = service();
        service.upsert(draft("KO", "10", "1.84")).unwrap();
        service.upsert(draft("KO", "10", "1.94")).unwrap();

        let reloaded = HoldingService::load(store, Arc::new(NullSymbolLookup)).unwrap();

        assert_eq!(reloaded.holdings().len(), 1);
        assert_eq!(reloaded.holdings()[0].history.len(), 2);
        assert_eq!(reloaded.total_income(), dec!(19.40));
    }

    #[test]
    fn test_load_with_empty_store_yields_empty_set() {
        let store = Arc::new(MemoryHoldingStore::new());
        let service = HoldingService::load(store, Arc::new(NullSymbolLookup)).unwrap();
        assert!(service.holdings().is_empty());
        assert_eq!(service.total_income(), Decimal::ZERO);
    }
}
