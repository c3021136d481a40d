//! Recurrence series generation.
//!
//! Expands a template appointment into a series of sibling bookings on the
//! selected weekdays over a number of weeks. Siblings share the template's
//! time-of-day and payload but carry distinct dates and fresh ids.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use uuid::Uuid;

use crate::domain::appointment::Appointment;

/// Computes the date of the next occurrence of `weekday` on or after the
/// anchor, shifted by `week` whole weeks. The anchor's own weekday in week
/// 0 yields the anchor date itself.
fn occurrence(anchor: NaiveDate, weekday: Weekday, week: u32) -> NaiveDate {
    let wd = i64::from(weekday.num_days_from_sunday());
    let anchor_wd = i64::from(anchor.weekday().num_days_from_sunday());
    let offset = (wd - anchor_wd).rem_euclid(7) + i64::from(week) * 7;
    anchor + Duration::days(offset)
}

/// Expands the template into one appointment per selected weekday per week.
///
/// An empty weekday selection defaults to Monday; the week count is clamped
/// to at least 1. Templates without a parsed date produce an empty series
/// (the service layer reports that case as an error).
pub fn expand(template: &Appointment, weekdays: &[Weekday], weeks: u32) -> Vec<Appointment> {
    let Some(anchor) = template.date else {
        return Vec::new();
    };
    let weeks = weeks.max(1);
    let selected: &[Weekday] = if weekdays.is_empty() {
        &[Weekday::Mon]
    } else {
        weekdays
    };

    let mut series = Vec::with_capacity(selected.len() * weeks as usize);
    for &weekday in selected {
        for week in 0..weeks {
            let mut sibling = template.clone();
            sibling.id = Uuid::new_v4().to_string();
            sibling.date = Some(occurrence(anchor, weekday, week));
            series.push(sibling);
        }
    }
    series
}
