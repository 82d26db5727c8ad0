#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use serde_json::Value;

/// The four-event sample whose summaries are known by hand
pub const SAMPLE_EVENTS: &str = r#"[
  {"userId":1,"eventType":"click","timestamp":1700000000},
  {"userId":1,"eventType":"click","timestamp":1700000050},
  {"userId":1,"eventType":"view","timestamp":1700003700},
  {"userId":2,"eventType":"click","timestamp":1700000000}
]"#;

pub fn write_events(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Build a JSON array from (user, type, timestamp) triples
pub fn events_json(events: &[(i64, &str, i64)]) -> String {
    let records: Vec<String> = events
        .iter()
        .map(|(user, kind, ts)| {
            format!(r#"{{"userId":{},"eventType":"{}","timestamp":{}}}"#, user, kind, ts)
        })
        .collect();
    format!("[{}]", records.join(","))
}

/// Summary records as a set of canonical JSON strings, so comparisons
/// don't depend on record order
pub fn summary_set(bytes: &[u8]) -> HashSet<String> {
    let value: Value = serde_json::from_slice(bytes).expect("output is valid JSON");
    value
        .as_array()
        .expect("output is a JSON array")
        .iter()
        .map(|record| record.to_string())
        .collect()
}

/// Sum of every event-type count across all summary records
pub fn total_count(bytes: &[u8]) -> u64 {
    let value: Value = serde_json::from_slice(bytes).expect("output is valid JSON");
    value
        .as_array()
        .expect("output is a JSON array")
        .iter()
        .flat_map(|record| record.as_object().expect("record is an object").iter())
        .filter(|(key, _)| key.as_str() != "userId" && key.as_str() != "date")
        .map(|(_, count)| count.as_u64().expect("count is an integer"))
        .sum()
}
