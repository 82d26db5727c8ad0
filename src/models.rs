//! Core Data Models
//!
//! This module defines the data structures that flow through the summary
//! pipeline, from raw input records to the flattened output records.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`Event`] - Individual records decoded from the input JSON array
//! 2. **Aggregation**: [`CountTable`] - Counts keyed by user, calendar day and event type
//! 3. **Output**: [`DailySummary`] - One record per (user, day) pair, flattened on encode
//!
//! ## Output Shape
//!
//! A [`DailySummary`] serializes as an open-ended JSON object: the fixed
//! `userId` and `date` fields followed by one field per event type seen for
//! that user on that day.
//!
//! ```text
//! { "userId": 1, "date": "2023-11-14", "click": 2, "view": 1 }
//! ```

use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Output field holding the user identifier
pub const USER_ID_FIELD: &str = "userId";

/// Output field holding the calendar day
pub const DATE_FIELD: &str = "date";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub timestamp: i64,
}

/// Whether an event type would shadow a fixed summary field
pub fn is_reserved_field(event_type: &str) -> bool {
    event_type == USER_ID_FIELD || event_type == DATE_FIELD
}

/// Event type -> count for a single (user, day) bucket
pub type EventCounts = BTreeMap<String, u64>;

/// user -> calendar day -> event type -> count
pub type CountTable = BTreeMap<i64, BTreeMap<String, EventCounts>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub user_id: i64,
    pub date: String,
    pub counts: EventCounts,
}

/// Totals describing one aggregation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub events: usize,
    pub summaries: usize,
}

impl DailySummary {
    pub fn new(user_id: i64, date: String) -> Self {
        Self {
            user_id,
            date,
            counts: EventCounts::new(),
        }
    }
}

impl Serialize for DailySummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len() + 2))?;
        map.serialize_entry(USER_ID_FIELD, &self.user_id)?;
        map.serialize_entry(DATE_FIELD, &self.date)?;
        for (event_type, count) in &self.counts {
            if is_reserved_field(event_type) {
                return Err(S::Error::custom(format!(
                    "event type `{}` collides with a reserved summary field",
                    event_type
                )));
            }
            map.serialize_entry(event_type, count)?;
        }
        map.end()
    }
}
