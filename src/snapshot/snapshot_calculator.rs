//! Reconstructs the portfolio-wide income trend from per-holding
//! rate-change logs.
//!
//! The calculator merges every holding's append-only history into one
//! chronologically ordered series of totals, one snapshot per distinct
//! event timestamp observed anywhere in the portfolio. It only reads the
//! caller-supplied state and never mutates it.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeSet;

use super::snapshot_model::IncomeSnapshot;
use crate::constants::SNAPSHOT_TOTAL_PRECISION;
use crate::holdings::Holding;
use crate::utils::time_utils;

/// Builds the income history series for the given holdings.
///
/// Each distinct rate-change timestamp across all histories produces one
/// snapshot, in ascending order. A portfolio with holdings but no recorded
/// history yields a single synthetic point at `now`; an empty portfolio
/// yields an empty series.
pub fn build_income_history(holdings: &[Holding], now: DateTime<Utc>) -> Vec<IncomeSnapshot> {
    if holdings.is_empty() {
        return Vec::new();
    }

    let mut dates: BTreeSet<DateTime<Utc>> = holdings
        .iter()
        .flat_map(|holding| holding.history.iter().map(|event| event.timestamp))
        .collect();
    if dates.is_empty() {
        dates.insert(now);
    }

    let series: Vec<IncomeSnapshot> = dates
        .into_iter()
        .map(|at| {
            let total: Decimal = holdings
                .iter()
                .map(|holding| holding.quantity * effective_rate(holding, at))
                .sum();
            IncomeSnapshot {
                timestamp: at,
                total: total.round_dp_with_strategy(
                    SNAPSHOT_TOTAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
                label: time_utils::display_date(at),
            }
        })
        .collect();

    debug!(
        "Rebuilt income history: {} snapshot(s) from {} holding(s)",
        series.len(),
        holdings.len()
    );
    series
}

/// Rate in force for `holding` at instant `at`.
///
/// Returns the rate of the latest history event with timestamp <= `at`.
/// Events sharing a timestamp resolve to the one appended last. When the
/// holding's entire history postdates `at` (it was added later than the
/// other series'), the current rate is used as a best-effort
/// approximation; early points can slightly overstate such holdings.
pub fn effective_rate(holding: &Holding, at: DateTime<Utc>) -> Decimal {
    holding
        .history
        .iter()
        .filter(|event| event.timestamp <= at)
        .max_by_key(|event| event.timestamp)
        .map(|event| event.rate)
        .unwrap_or(holding.current_rate)
}
