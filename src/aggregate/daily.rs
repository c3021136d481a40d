//! Per-day bucketing.
//!
//! The grouping key is the local calendar date. Records whose date failed
//! normalization carry `None` and are excluded from the bucketed metric
//! instead of failing the series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::status::StatusGroup;
use crate::period::DateRange;

/// Produces one summed value per calendar day of the range, inclusive,
/// defaulting to 0 for days with no matching records.
pub fn daily_series<I>(range: &DateRange, records: I) -> Vec<f64>
where
    I: IntoIterator<Item = (Option<NaiveDate>, f64)>,
{
    let start = range.start.date();
    let len = range.num_days().max(0) as usize;
    let mut series = vec![0.0; len];
    for (date, value) in records {
        let Some(date) = date else { continue };
        if !range.contains_date(date) {
            continue;
        }
        let index = (date - start).num_days() as usize;
        if let Some(slot) = series.get_mut(index) {
            *slot += value;
        }
    }
    series
}

/// Confirmed-like vs cancelled-like counts per day, driving the two-series
/// status bar chart.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct StatusSeries {
    pub confirmed: Vec<u32>,
    pub cancelled: Vec<u32>,
}

impl StatusSeries {
    pub fn len(&self) -> usize {
        self.confirmed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }

    pub fn confirmed_total(&self) -> u32 {
        self.confirmed.iter().sum()
    }

    pub fn cancelled_total(&self) -> u32 {
        self.cancelled.iter().sum()
    }
}

/// Buckets status groups per day over the range.
pub fn status_counts_by_day<I>(range: &DateRange, records: I) -> StatusSeries
where
    I: IntoIterator<Item = (Option<NaiveDate>, StatusGroup)>,
{
    let start = range.start.date();
    let len = range.num_days().max(0) as usize;
    let mut series = StatusSeries {
        confirmed: vec![0; len],
        cancelled: vec![0; len],
    };
    for (date, group) in records {
        let Some(date) = date else { continue };
        if !range.contains_date(date) {
            continue;
        }
        let index = (date - start).num_days() as usize;
        let buckets = match group {
            StatusGroup::Confirmed => &mut series.confirmed,
            StatusGroup::Cancelled => &mut series.cancelled,
        };
        if let Some(slot) = buckets.get_mut(index) {
            *slot += 1;
        }
    }
    series
}

/// Rate helper with the denominator floored at 1 so empty periods yield a
/// 0 rate instead of NaN.
pub fn safe_rate(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(1.0)
}
