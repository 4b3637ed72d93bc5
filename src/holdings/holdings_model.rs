//! Holding domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils;
use crate::{errors::ValidationError, Error, Result};

/// A recorded payout-rate change: the per-unit rate in effect from
/// `timestamp` onward, until superseded by a later event.
///
/// Events are append-only. Past events are never edited in place; the
/// income history reconstruction depends on the log being a true change
/// log rather than a mutable cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateChangeEvent {
    #[serde(with = "time_utils::iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub rate: Decimal,
}

/// Domain model representing one tracked equity position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Uppercase ticker symbol; the natural key for upserts.
    pub ticker: String,
    pub display_name: String,
    /// Number of units held (non-negative).
    pub quantity: Decimal,
    /// Current per-unit payout amount (non-negative).
    pub current_rate: Decimal,
    #[serde(with = "time_utils::iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "time_utils::iso_millis")]
    pub updated_at: DateTime<Utc>,
    /// Append-only rate-change log in insertion order. Non-empty for any
    /// holding that has ever been created or edited.
    pub history: Vec<RateChangeEvent>,
}

impl Holding {
    /// Expected periodic income from this holding at its current rate.
    pub fn expected_income(&self) -> Decimal {
        self.quantity * self.current_rate
    }
}

/// Raw form-shaped input for creating or updating a holding.
///
/// Numeric fields arrive as strings from the form boundary; `parse`
/// normalizes and validates them into a typed [`HoldingInput`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingDraft {
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub quantity: String,
    pub rate: String,
}

/// Validated, typed input for the registry's upsert operation.
#[derive(Debug, Clone)]
pub struct HoldingInput {
    pub ticker: String,
    pub display_name: Option<String>,
    pub quantity: Decimal,
    pub rate: Decimal,
}

impl HoldingDraft {
    /// Normalizes and parses the raw form fields.
    ///
    /// The ticker is trimmed and uppercased; quantity and rate must parse
    /// as non-negative decimals. A blank display name is treated as not
    /// supplied.
    pub fn parse(&self) -> Result<HoldingInput> {
        let ticker = self.ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ticker".to_string(),
            )));
        }

        let quantity = self.quantity.trim().parse::<Decimal>()?;
        let rate = self.rate.trim().parse::<Decimal>()?;
        if quantity < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Quantity cannot be negative".to_string(),
            )));
        }
        if rate < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Rate cannot be negative".to_string(),
            )));
        }

        let display_name = self
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from);

        Ok(HoldingInput {
            ticker,
            display_name,
            quantity,
            rate,
        })
    }
}
