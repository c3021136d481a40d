//! Appointment aggregate.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::status::AppointmentStatus;

/// Denormalized client data carried on the appointment document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientRef {
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Denormalized service data carried on the appointment document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceRef {
    pub id: Option<String>,
    pub name: String,
    pub duration_minutes: Option<u32>,
    pub price: Option<f64>,
    /// VAT-inclusive price, preferred over `price` for value aggregation.
    pub price_incl_vat: Option<f64>,
}

/// Denormalized staff member data carried on the appointment document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct StaffRef {
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}

/// A scheduled booking, normalized from its store document.
///
/// Dates and times are kept as local calendar values; `start`/`end` are the
/// combined instants when both parts parsed, `None` otherwise. Aggregation
/// excludes `None`-dated appointments from per-day buckets instead of
/// failing. End >= start is conceptual and not enforced here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: AppointmentStatus,
    pub client: Option<ClientRef>,
    pub service: Option<ServiceRef>,
    pub staff: Option<StaffRef>,
    /// 0..N participants; the first entry is treated as the primary client
    /// for backward compatibility with single-participant documents.
    pub participants: Vec<ClientRef>,
    pub created_at: Option<NaiveDateTime>,
}

impl Appointment {
    /// Combined start instant, when both date and start time parsed.
    pub fn start(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.start_time?))
    }

    /// Combined end instant, when both date and end time parsed.
    pub fn end(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.end_time?))
    }

    /// Primary participant: the explicit client reference, falling back to
    /// the first participant entry.
    pub fn primary_client(&self) -> Option<&ClientRef> {
        self.client.as_ref().or_else(|| self.participants.first())
    }

    /// The booking's monetary value, preferring the VAT-inclusive service
    /// price over the ex-VAT one. Appointments without a priced service
    /// contribute zero.
    pub fn value(&self) -> f64 {
        self.service
            .as_ref()
            .and_then(|s| s.price_incl_vat.or(s.price))
            .unwrap_or(0.0)
    }
}
