//! Event Aggregation Engine
//!
//! Turns a JSON array of [`Event`]s into per-user, per-day summaries. The
//! transform is pure: every call builds a fresh [`CountTable`] and drops it
//! once the summaries are produced.
//!
//! ## Pipeline
//!
//! 1. **Decode**: the whole input is parsed up front; one malformed record
//!    fails the run and nothing is aggregated
//! 2. **Count**: each event increments `table[user][day][event_type]`, where
//!    `day` is the UTC calendar day of its timestamp
//! 3. **Flatten**: one [`DailySummary`] per (user, day) present in the table
//! 4. **Encode**: JSON array, pretty-printed with 2-space indentation unless
//!    compact output was requested
//!
//! ## Usage Example
//!
//! ```rust
//! use event_summary::aggregator::aggregate;
//!
//! let input = br#"[{"userId":1,"eventType":"click","timestamp":1700000000}]"#;
//! let output = aggregate(input).unwrap();
//! let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
//! assert_eq!(value[0]["click"], 1);
//! ```

use crate::error::{SummaryError, SummaryResult, UNNAMED_INPUT};
use crate::models::*;
use crate::timestamp_parser::TimestampParser;
use tracing::debug;

/// Aggregates raw event bytes with the default pretty-printed output
pub fn aggregate(raw: &[u8]) -> SummaryResult<Vec<u8>> {
    EventAggregator::new().aggregate(raw).map(|(bytes, _)| bytes)
}

pub struct EventAggregator {
    pretty: bool,
}

impl Default for EventAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventAggregator {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Run the full decode -> count -> flatten -> encode pipeline
    pub fn aggregate(&self, raw: &[u8]) -> SummaryResult<(Vec<u8>, AggregationStats)> {
        let events = decode_events(raw)?;
        let table = build_count_table(&events)?;
        let summaries = flatten(table);

        let stats = AggregationStats {
            events: events.len(),
            summaries: summaries.len(),
        };
        debug!(
            events = stats.events,
            summaries = stats.summaries,
            "Aggregated events"
        );

        let bytes = encode_summaries(&summaries, self.pretty)?;
        Ok((bytes, stats))
    }
}

/// Decode the input as a JSON array of events, all or nothing
pub fn decode_events(raw: &[u8]) -> SummaryResult<Vec<Event>> {
    serde_json::from_slice(raw).map_err(SummaryError::decode)
}

/// Count events by user, UTC calendar day and event type.
/// Event types named after a fixed summary field are rejected.
pub fn build_count_table(events: &[Event]) -> SummaryResult<CountTable> {
    let mut table = CountTable::new();

    for (index, event) in events.iter().enumerate() {
        if is_reserved_field(&event.event_type) {
            return Err(SummaryError::ReservedEventType {
                location: UNNAMED_INPUT.to_string(),
                index,
                event_type: event.event_type.clone(),
            });
        }

        let day = TimestampParser::calendar_day(event.timestamp).ok_or_else(|| {
            SummaryError::TimestampOutOfRange {
                location: UNNAMED_INPUT.to_string(),
                index,
                timestamp: event.timestamp,
            }
        })?;

        *table
            .entry(event.user_id)
            .or_default()
            .entry(day)
            .or_default()
            .entry(event.event_type.clone())
            .or_insert(0) += 1;
    }

    Ok(table)
}

/// One summary per (user, day) bucket, ordered by user then day
pub fn flatten(table: CountTable) -> Vec<DailySummary> {
    table
        .into_iter()
        .flat_map(|(user_id, days)| {
            days.into_iter().map(move |(date, counts)| DailySummary {
                user_id,
                date,
                counts,
            })
        })
        .collect()
}

pub fn encode_summaries(summaries: &[DailySummary], pretty: bool) -> SummaryResult<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(summaries)
    } else {
        serde_json::to_vec(summaries)
    };
    encoded.map_err(SummaryError::encode)
}
