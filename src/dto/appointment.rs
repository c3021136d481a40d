//! Raw appointment documents as delivered by the store, plus their
//! normalization into the domain aggregate.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::appointment::{Appointment, ClientRef, ServiceRef, StaffRef};
use crate::domain::status::AppointmentStatus;
use crate::dto::parse::{
    document_id, optional_amount, parse_duration_label, parse_local_date, parse_local_time,
};
use crate::dto::timestamp::StoredTimestamp;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRefDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientRefDoc {
    pub fn normalize(self) -> ClientRef {
        ClientRef {
            id: self.id,
            name: self.name.unwrap_or_default(),
            email: self.email.filter(|s| !s.trim().is_empty()),
            phone: self.phone.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceRefDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Free-text duration label ("1 time 30 minutter") or bare minutes.
    pub duration: Option<String>,
    /// Number or localized number string.
    pub price: Option<Value>,
    pub price_incl_vat: Option<Value>,
}

impl ServiceRefDoc {
    pub fn normalize(self) -> ServiceRef {
        ServiceRef {
            id: self.id,
            name: self.name.unwrap_or_default(),
            duration_minutes: self.duration.as_deref().and_then(parse_duration_label),
            price: optional_amount(self.price.as_ref()),
            price_incl_vat: optional_amount(self.price_incl_vat.as_ref()),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffRefDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl StaffRefDoc {
    pub fn normalize(self) -> StaffRef {
        StaffRef {
            id: self.id,
            name: self.name.unwrap_or_default(),
            color: self.color,
        }
    }
}

/// An appointment document as stored: local date string, separate time
/// strings, free-text status, denormalized references.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentDoc {
    pub id: Option<String>,
    /// `"DD-MM-YYYY"`.
    pub date: Option<String>,
    /// `"HH:mm"`.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<String>,
    pub client: Option<ClientRefDoc>,
    pub service: Option<ServiceRefDoc>,
    pub staff: Option<StaffRefDoc>,
    pub participants: Vec<ClientRefDoc>,
    pub created_at: Option<StoredTimestamp>,
}

impl AppointmentDoc {
    /// Normalizes the document. Returns `None` only when the document has no
    /// id at all; everything else degrades field by field.
    pub fn normalize(self) -> Option<Appointment> {
        let id = document_id(self.id)?;
        Some(Appointment {
            id,
            date: self.date.as_deref().and_then(parse_local_date),
            start_time: self.start_time.as_deref().and_then(parse_local_time),
            end_time: self.end_time.as_deref().and_then(parse_local_time),
            status: AppointmentStatus::classify(self.status.as_deref().unwrap_or_default()),
            client: self.client.map(ClientRefDoc::normalize),
            service: self.service.map(ServiceRefDoc::normalize),
            staff: self.staff.map(StaffRefDoc::normalize),
            participants: self
                .participants
                .into_iter()
                .map(ClientRefDoc::normalize)
                .collect(),
            created_at: self.created_at.and_then(|ts| ts.to_datetime()),
        })
    }
}
