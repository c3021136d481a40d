//! Completed point-of-sale transactions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::appointment::{ClientRef, StaffRef};

/// Where a line item came from when the basket was assembled.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineSource {
    Appointment,
    Service,
    Product,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SaleLine {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub source: LineSource,
}

impl SaleLine {
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Totals as frozen at checkout. Accounting is append-only: these are never
/// recomputed from the live catalog, so later service-price edits do not
/// change historical sales.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SaleTotals {
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
}

/// A completed transaction. Created once at checkout, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: String,
    pub lines: Vec<SaleLine>,
    pub totals: SaleTotals,
    pub payment_method: Option<String>,
    pub employee: Option<StaffRef>,
    pub customer: Option<ClientRef>,
    /// Originating appointment, when the sale closed out a booking.
    pub appointment_id: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
}

impl Sale {
    /// Sum of line amounts. Equals `totals.total` at creation time; kept
    /// separate so tests can assert the invariant without recomputing totals
    /// in production paths.
    pub fn line_total(&self) -> f64 {
        self.lines.iter().map(SaleLine::amount).sum()
    }
}
