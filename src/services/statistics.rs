//! Statistics-view aggregations: per-day series, period summaries and the
//! top-5 comparison rankings.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::aggregate::{
    RankedEntry, StatusSeries, daily_series, safe_rate, status_counts_by_day, top_n,
};
use crate::domain::appointment::Appointment;
use crate::domain::sale::Sale;
use crate::domain::status::StatusGroup;
use crate::period::{DateRange, PeriodPreset};
use crate::repository::{AppointmentListQuery, AppointmentReader, SaleListQuery, SaleReader};
use crate::services::{SALE_STATUS_COMPLETED, ServiceResult};

/// Scalar metrics for the selected period.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PeriodSummary {
    /// Sum of completed sale totals in the period.
    pub revenue_total: f64,
    /// Number of appointments dated in the period, any status.
    pub appointment_count: usize,
    /// Summed booking value (service price, VAT-inclusive preferred) of all
    /// appointments dated in the period.
    pub appointment_value: f64,
    /// Cancelled-like share of the period's appointments, 0..=1.
    pub cancellation_rate: f64,
}

/// Computes the scalar summary for a resolved period.
pub fn period_summary<R>(repo: &R, account_id: &str, range: DateRange) -> ServiceResult<PeriodSummary>
where
    R: AppointmentReader + SaleReader + ?Sized,
{
    let appointments = repo.list_appointments(
        AppointmentListQuery::new(account_id).range(range),
    )?;
    let sales = repo.list_sales(
        SaleListQuery::new(account_id)
            .status(SALE_STATUS_COMPLETED)
            .range(range),
    )?;

    let cancelled = appointments
        .iter()
        .filter(|a| a.status.group() == StatusGroup::Cancelled)
        .count();

    Ok(PeriodSummary {
        revenue_total: sales.iter().map(|s| s.totals.total).sum(),
        appointment_count: appointments.len(),
        appointment_value: appointments.iter().map(|a| a.value()).sum(),
        cancellation_rate: safe_rate(cancelled as f64, appointments.len() as f64),
    })
}

/// Per-day completed-sale revenue over the period.
pub fn revenue_series<R>(repo: &R, account_id: &str, range: DateRange) -> ServiceResult<Vec<f64>>
where
    R: SaleReader + ?Sized,
{
    let sales = repo.list_sales(
        SaleListQuery::new(account_id)
            .status(SALE_STATUS_COMPLETED)
            .range(range),
    )?;
    Ok(daily_series(
        &range,
        sales
            .iter()
            .map(|s| (s.completed_at.map(|at| at.date()), s.totals.total)),
    ))
}

/// Per-day booking value over the period.
pub fn appointment_value_series<R>(
    repo: &R,
    account_id: &str,
    range: DateRange,
) -> ServiceResult<Vec<f64>>
where
    R: AppointmentReader + ?Sized,
{
    let appointments =
        repo.list_appointments(AppointmentListQuery::new(account_id).range(range))?;
    Ok(daily_series(
        &range,
        appointments.iter().map(|a| (a.date, a.value())),
    ))
}

/// Per-day confirmed-like vs cancelled-like appointment counts.
pub fn status_series<R>(repo: &R, account_id: &str, range: DateRange) -> ServiceResult<StatusSeries>
where
    R: AppointmentReader + ?Sized,
{
    let appointments =
        repo.list_appointments(AppointmentListQuery::new(account_id).range(range))?;
    Ok(status_counts_by_day(
        &range,
        appointments.iter().map(|a| (a.date, a.status.group())),
    ))
}

/// Cancelled-like share of the period's appointments. Zero appointments
/// yield a 0 rate, never NaN.
pub fn cancellation_rate<R>(repo: &R, account_id: &str, range: DateRange) -> ServiceResult<f64>
where
    R: AppointmentReader + ?Sized,
{
    let series = status_series(repo, account_id, range)?;
    Ok(safe_rate(
        f64::from(series.cancelled_total()),
        f64::from(series.confirmed_total() + series.cancelled_total()),
    ))
}

/// The two comparison windows used by the ranking widgets: current
/// month-to-date against the previous full month.
fn comparison_windows(now: NaiveDateTime) -> (DateRange, DateRange) {
    (
        PeriodPreset::MonthToDate.resolve(now, None),
        PeriodPreset::LastMonth.resolve(now, None),
    )
}

/// Top 5 services by booking count, month-to-date, with the previous full
/// month's count alongside. Cancelled-like bookings do not count.
pub fn top_services<R>(
    repo: &R,
    account_id: &str,
    now: NaiveDateTime,
) -> ServiceResult<Vec<RankedEntry>>
where
    R: AppointmentReader + ?Sized,
{
    let (current, previous) = comparison_windows(now);
    let current_appointments = repo.list_appointments(
        AppointmentListQuery::new(account_id)
            .range(current)
            .status_group(StatusGroup::Confirmed),
    )?;
    let previous_appointments = repo.list_appointments(
        AppointmentListQuery::new(account_id)
            .range(previous)
            .status_group(StatusGroup::Confirmed),
    )?;

    let keyed = |appointments: Vec<Appointment>| {
        appointments
            .into_iter()
            .filter_map(|a| a.service.map(|s| (s.name, 1.0)))
    };
    Ok(top_n(keyed(current_appointments), keyed(previous_appointments)))
}

/// Top 5 staff members by completed-sale revenue, month-to-date, with the
/// previous full month's revenue alongside.
pub fn top_staff<R>(
    repo: &R,
    account_id: &str,
    now: NaiveDateTime,
) -> ServiceResult<Vec<RankedEntry>>
where
    R: SaleReader + ?Sized,
{
    let (current, previous) = comparison_windows(now);
    let window = |range| {
        SaleListQuery::new(account_id)
            .status(SALE_STATUS_COMPLETED)
            .range(range)
    };
    let current_sales = repo.list_sales(window(current))?;
    let previous_sales = repo.list_sales(window(previous))?;

    let keyed = |sales: Vec<Sale>| {
        sales
            .into_iter()
            .filter_map(|s| s.employee.map(|e| (e.name, s.totals.total)))
    };
    Ok(top_n(keyed(current_sales), keyed(previous_sales)))
}
