use chrono::{DateTime, Timelike, Utc};

use crate::constants::{DISPLAY_DATE_FORMAT, TIMESTAMP_FORMAT};

/// Current UTC instant truncated to millisecond precision.
///
/// This is the single source of truth for event and audit timestamps.
/// Truncation keeps in-memory instants identical to their serialized form,
/// so timestamps that compare equal still compare equal after a round trip
/// through the store.
pub fn now_millis() -> DateTime<Utc> {
    truncate_to_millis(Utc::now())
}

/// Drops sub-millisecond precision from an instant.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = instant.nanosecond() / 1_000_000 * 1_000_000;
    instant.with_nanosecond(nanos).unwrap_or(instant)
}

/// Formats an instant in the fixed ISO-8601 UTC millisecond format.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Formats an instant as a human-readable date label, e.g. "Mar 4, 2024".
pub fn display_date(instant: DateTime<Utc>) -> String {
    instant.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Serde adapter for `DateTime<Utc>` fields using the fixed ISO-8601
/// millisecond format. Deserialization accepts any RFC 3339 offset.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_timestamp, truncate_to_millis};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(*instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| truncate_to_millis(parsed.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}
