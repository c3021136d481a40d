//! Booking-form helpers: recurrence series expansion.

use chrono::Weekday;

use crate::domain::appointment::Appointment;
use crate::recurrence;
use crate::services::{ServiceError, ServiceResult};

/// Expands a template appointment into its recurrence series.
///
/// The template's date anchors the series; a template whose date failed
/// normalization cannot be expanded and is reported as an error rather
/// than silently producing nothing.
pub fn expand_recurrence(
    template: &Appointment,
    weekdays: &[Weekday],
    weeks: u32,
) -> ServiceResult<Vec<Appointment>> {
    if template.date.is_none() {
        return Err(ServiceError::MissingAnchorDate);
    }
    Ok(recurrence::expand(template, weekdays, weeks))
}
