/// Fixed ISO-8601 UTC timestamp format with millisecond precision.
/// All stored timestamps use this format, so lexicographic order on the
/// serialized strings matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Human-readable date format for chart axis labels
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Decimal precision for snapshot totals (whole units for display)
pub const SNAPSHOT_TOTAL_PRECISION: u32 = 0;
