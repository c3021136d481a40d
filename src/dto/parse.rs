//! Tolerant scalar parsers for store-document fields.
//!
//! Documents written over several product generations mix numbers, localized
//! number strings, `DD-MM-YYYY` date strings and free-text Danish duration
//! labels. Every parser here degrades to `None`/`0.0` on malformed input;
//! nothing in this module returns an error or panics.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;

use crate::domain::types::NonEmptyString;

/// Canonical appointment date representation in the store.
pub const LOCAL_DATE_FORMAT: &str = "%d-%m-%Y";
/// Canonical appointment time representation in the store.
pub const LOCAL_TIME_FORMAT: &str = "%H:%M";

/// The id gate shared by every document normalizer: the trimmed id, or
/// `None` when the field is absent or blank. A document that fails this
/// gate is dropped; every other field degrades individually.
pub fn document_id(raw: Option<String>) -> Option<String> {
    raw.and_then(|s| NonEmptyString::new(s).ok())
        .map(NonEmptyString::into_inner)
}

/// Parses a `"DD-MM-YYYY"` local calendar date.
pub fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), LOCAL_DATE_FORMAT).ok()
}

/// Parses a `"HH:mm"` local time-of-day.
pub fn parse_local_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), LOCAL_TIME_FORMAT).ok()
}

/// Combines the stored date and time strings into one local instant.
/// Missing or invalid parts yield `None`; downstream bucketing excludes
/// `None`-dated records instead of crashing.
pub fn combine_local(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = parse_local_date(date?)?;
    let time = parse_local_time(time?)?;
    Some(date.and_time(time))
}

/// Parses an amount string using either `,` or `.` as the decimal separator.
///
/// When both occur, `.` is treated as a thousands separator and stripped:
/// `"1.234,56"` → 1234.56. Malformed input yields 0.0.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let has_comma = trimmed.contains(',');
    let has_dot = trimmed.contains('.');
    let canonical = if has_comma && has_dot {
        trimmed.replace('.', "").replace(',', ".")
    } else if has_comma {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    canonical.parse::<f64>().unwrap_or(0.0)
}

/// Extracts an amount from a JSON field that may hold a number or a
/// localized number string.
pub fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_amount(s),
        _ => 0.0,
    }
}

/// Like [`amount_from_value`] but preserves field absence.
pub fn optional_amount(value: Option<&Value>) -> Option<f64> {
    value.map(amount_from_value)
}

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*tim").unwrap());
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*min").unwrap());

/// Parses a free-text Danish duration label into minutes.
///
/// `"1 time 30 minutter"` → 90, `"45 min"` → 45. A bare number is taken as
/// minutes. Labels with no recognizable component yield `None`.
pub fn parse_duration_label(raw: &str) -> Option<u32> {
    let label = raw.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }

    let hours = HOURS_RE
        .captures(&label)
        .and_then(|c| c[1].parse::<u32>().ok());
    let minutes = MINUTES_RE
        .captures(&label)
        .and_then(|c| c[1].parse::<u32>().ok());

    if hours.is_none() && minutes.is_none() {
        // Pure numeric fallback when no unit words are present.
        return label.parse::<u32>().ok();
    }
    Some(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_ids_are_trimmed_and_blank_ids_rejected() {
        assert_eq!(document_id(Some("  a-1  ".into())), Some("a-1".into()));
        assert_eq!(document_id(Some("   ".into())), None);
        assert_eq!(document_id(None), None);
    }

    #[test]
    fn amount_separator_handling() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount("100,50"), 100.5);
        assert_eq!(parse_amount("1.100,50"), 1100.5);
        assert_eq!(parse_amount("1100.50"), 1100.5);
        assert_eq!(parse_amount("not a number"), 0.0);
    }

    #[test]
    fn duration_labels() {
        assert_eq!(parse_duration_label("1 time 30 minutter"), Some(90));
        assert_eq!(parse_duration_label("2 timer"), Some(120));
        assert_eq!(parse_duration_label("45 min"), Some(45));
        assert_eq!(parse_duration_label("60"), Some(60));
        assert_eq!(parse_duration_label("en halv dag"), None);
    }

    #[test]
    fn local_date_time_combination() {
        let combined = combine_local(Some("01-06-2024"), Some("09:30")).unwrap();
        assert_eq!(
            combined,
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
        assert!(combine_local(Some("2024-06-01"), Some("09:30")).is_none());
        assert!(combine_local(Some("01-06-2024"), None).is_none());
    }
}
