//! Stored timestamp normalization.
//!
//! The document store has written timestamps in three shapes over time: a
//! seconds+nanoseconds map (the store's native timestamp wrapper), raw epoch
//! milliseconds, and ISO-ish strings. All of them normalize to a naive local
//! `NaiveDateTime`; unparseable input yields `None`, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::dto::parse::parse_local_date;

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredTimestamp {
    /// The store's timestamp wrapper as serialized in snapshots.
    Epoch {
        seconds: i64,
        #[serde(default)]
        nanoseconds: u32,
    },
    /// `Date.getTime()`-style epoch milliseconds.
    Millis(i64),
    /// ISO or locally formatted date(-time) string.
    Text(String),
}

impl StoredTimestamp {
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            StoredTimestamp::Epoch {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds).map(|dt| dt.naive_utc()),
            StoredTimestamp::Millis(ms) => {
                DateTime::from_timestamp_millis(*ms).map(|dt| dt.naive_utc())
            }
            StoredTimestamp::Text(s) => parse_text(s),
        }
    }
}

fn parse_text(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    // Legacy documents occasionally hold the appointment-style local date.
    parse_local_date(trimmed).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Normalizes a raw JSON field into a timestamp, accepting any of the
/// [`StoredTimestamp`] shapes.
pub fn timestamp_from_value(value: &Value) -> Option<NaiveDateTime> {
    serde_json::from_value::<StoredTimestamp>(value.clone())
        .ok()
        .and_then(|ts| ts.to_datetime())
}
