//! Income snapshot domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils;

/// One point in the reconstructed income time series: the portfolio-wide
/// expected income total as of `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSnapshot {
    #[serde(with = "time_utils::iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Total expected income, rounded to the nearest whole unit.
    pub total: Decimal,
    /// Human-readable date derived from `timestamp`, for chart labels.
    pub label: String,
}
