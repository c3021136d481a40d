//! Raw sale documents and their normalization.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::sale::{LineSource, Sale, SaleLine, SaleTotals};
use crate::dto::appointment::{ClientRefDoc, StaffRefDoc};
use crate::dto::parse::{amount_from_value, document_id};
use crate::dto::timestamp::StoredTimestamp;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleLineDoc {
    pub name: Option<String>,
    pub price: Option<Value>,
    pub quantity: Option<Value>,
    /// Basket source tag: "appointment", "service" or "product".
    pub source: Option<String>,
}

impl SaleLineDoc {
    pub fn normalize(self) -> SaleLine {
        let quantity = self
            .quantity
            .as_ref()
            .map(amount_from_value)
            .filter(|q| *q >= 1.0)
            .unwrap_or(1.0) as u32;
        SaleLine {
            name: self.name.unwrap_or_default(),
            unit_price: self.price.as_ref().map(amount_from_value).unwrap_or(0.0),
            quantity,
            source: line_source(self.source.as_deref()),
        }
    }
}

fn line_source(tag: Option<&str>) -> LineSource {
    match tag.map(str::to_lowercase).as_deref() {
        Some("appointment") => LineSource::Appointment,
        Some("product") => LineSource::Product,
        // Untagged legacy lines came from the service picker.
        _ => LineSource::Service,
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleTotalsDoc {
    pub subtotal: Option<Value>,
    pub vat: Option<Value>,
    pub total: Option<Value>,
}

impl SaleTotalsDoc {
    pub fn normalize(self) -> SaleTotals {
        SaleTotals {
            subtotal: self.subtotal.as_ref().map(amount_from_value).unwrap_or(0.0),
            vat: self.vat.as_ref().map(amount_from_value).unwrap_or(0.0),
            total: self.total.as_ref().map(amount_from_value).unwrap_or(0.0),
        }
    }
}

/// A completed transaction document. Totals are taken verbatim: accounting
/// is frozen at checkout and never recomputed here.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleDoc {
    pub id: Option<String>,
    pub items: Vec<SaleLineDoc>,
    pub totals: Option<SaleTotalsDoc>,
    pub payment_method: Option<String>,
    pub employee: Option<StaffRefDoc>,
    pub customer: Option<ClientRefDoc>,
    pub appointment_id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<StoredTimestamp>,
    pub completed_at: Option<StoredTimestamp>,
}

impl SaleDoc {
    /// Normalizes the document; `None` when the document carries no id.
    pub fn normalize(self) -> Option<Sale> {
        let id = document_id(self.id)?;
        Some(Sale {
            id,
            lines: self.items.into_iter().map(SaleLineDoc::normalize).collect(),
            totals: self.totals.map(SaleTotalsDoc::normalize).unwrap_or_default(),
            payment_method: self.payment_method.filter(|s| !s.trim().is_empty()),
            employee: self.employee.map(StaffRefDoc::normalize),
            customer: self.customer.map(ClientRefDoc::normalize),
            appointment_id: self.appointment_id.filter(|s| !s.trim().is_empty()),
            created_at: self.created_at.and_then(|ts| ts.to_datetime()),
            completed_at: self.completed_at.and_then(|ts| ts.to_datetime()),
        })
    }

    /// The stored status label; every sale in scope is "completed".
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("completed")
    }
}
