use chrono::{DateTime, Utc};

/// Format of the calendar day used as an aggregation key
pub const CALENDAR_DAY_FORMAT: &str = "%Y-%m-%d";

/// Converts event timestamps into the calendar days they are counted under
pub struct TimestampParser;

impl TimestampParser {
    /// Interpret seconds since the Unix epoch as a UTC instant.
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn to_utc(seconds: i64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(seconds, 0)
    }

    /// UTC calendar day of a Unix timestamp, as `YYYY-MM-DD`
    pub fn calendar_day(seconds: i64) -> Option<String> {
        Self::to_utc(seconds).map(|dt| dt.format(CALENDAR_DAY_FORMAT).to_string())
    }
}
