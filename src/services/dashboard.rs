//! Dashboard overview metrics: today's activity plus the upcoming pipeline.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::appointment::Appointment;
use crate::domain::status::{AppointmentStatus, StatusGroup};
use crate::period::{DateRange, PeriodPreset};
use crate::repository::{
    AppointmentListQuery, AppointmentReader, ClientReader, SaleListQuery, SaleReader,
};
use crate::services::{SALE_STATUS_COMPLETED, ServiceResult};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DashboardOverview {
    /// Completed-sale revenue for today.
    pub today_revenue: f64,
    /// Booking value of today's appointments.
    pub today_appointment_value: f64,
    /// Clients whose record was created today.
    pub new_clients_today: usize,
    pub upcoming_booked: usize,
    pub upcoming_confirmed: usize,
    pub upcoming_cancelled: usize,
}

/// Whether the appointment still lies ahead of `now`. Appointments with a
/// date but no parsed start time count from their day onward.
fn is_upcoming(appointment: &Appointment, now: NaiveDateTime) -> bool {
    match appointment.start() {
        Some(start) => start >= now,
        None => appointment.date.is_some_and(|d| d >= now.date()),
    }
}

/// Computes the dashboard header metrics for the current moment.
pub fn overview<R>(repo: &R, account_id: &str, now: NaiveDateTime) -> ServiceResult<DashboardOverview>
where
    R: AppointmentReader + SaleReader + ClientReader + ?Sized,
{
    let today: DateRange = PeriodPreset::Today.resolve(now, None);

    let today_sales = repo.list_sales(
        SaleListQuery::new(account_id)
            .status(SALE_STATUS_COMPLETED)
            .range(today),
    )?;
    let today_appointments =
        repo.list_appointments(AppointmentListQuery::new(account_id).range(today))?;

    // Upcoming counts scan the full snapshot; the subscription only ever
    // delivers one account's worth of records.
    let all_appointments = repo.list_appointments(AppointmentListQuery::new(account_id))?;
    let mut upcoming_booked = 0;
    let mut upcoming_confirmed = 0;
    let mut upcoming_cancelled = 0;
    for appointment in all_appointments.iter().filter(|a| is_upcoming(a, now)) {
        match appointment.status {
            AppointmentStatus::Booked => upcoming_booked += 1,
            AppointmentStatus::Confirmed => upcoming_confirmed += 1,
            _ if appointment.status.group() == StatusGroup::Cancelled => upcoming_cancelled += 1,
            _ => {}
        }
    }

    let new_clients_today = repo
        .list_clients(account_id)?
        .iter()
        .filter(|c| c.created_at.is_some_and(|at| today.contains(at)))
        .count();

    Ok(DashboardOverview {
        today_revenue: today_sales.iter().map(|s| s.totals.total).sum(),
        today_appointment_value: today_appointments.iter().map(|a| a.value()).sum(),
        new_clients_today,
        upcoming_booked,
        upcoming_confirmed,
        upcoming_cancelled,
    })
}
