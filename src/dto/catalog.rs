//! Raw catalog documents: services and programs ("forløb").

use serde::Deserialize;
use serde_json::Value;

use crate::domain::catalog::{Program, ServiceItem};
use crate::dto::parse::{amount_from_value, document_id, optional_amount, parse_duration_label};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItemDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    pub duration: Option<String>,
    pub price: Option<Value>,
    pub price_incl_vat: Option<Value>,
    pub color: Option<String>,
}

impl ServiceItemDoc {
    pub fn normalize(self) -> Option<ServiceItem> {
        let id = document_id(self.id)?;
        let duration_minutes = self.duration.as_deref().and_then(parse_duration_label);
        Some(ServiceItem {
            id,
            name: self.name.unwrap_or_default(),
            duration_label: self.duration,
            duration_minutes,
            price: optional_amount(self.price.as_ref()),
            price_incl_vat: optional_amount(self.price_incl_vat.as_ref()),
            color: self.color,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    pub sessions: Option<Value>,
    pub weeks: Option<Value>,
    pub price: Option<Value>,
    pub color: Option<String>,
}

impl ProgramDoc {
    pub fn normalize(self) -> Option<Program> {
        let id = document_id(self.id)?;
        Some(Program {
            id,
            name: self.name.unwrap_or_default(),
            sessions: self.sessions.as_ref().map(amount_from_value).unwrap_or(1.0) as u32,
            weeks: self.weeks.as_ref().map(amount_from_value).unwrap_or(1.0) as u32,
            price: optional_amount(self.price.as_ref()),
            color: self.color,
        })
    }
}
