//! Raw client (CRM) documents.

use serde::Deserialize;

use crate::domain::client::Client;
use crate::domain::types::{ClientEmail, PhoneNumber};
use crate::dto::parse::document_id;
use crate::dto::timestamp::StoredTimestamp;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<StoredTimestamp>,
}

impl ClientDoc {
    /// Normalizes the document; invalid contact data becomes `None` rather
    /// than rejecting the record.
    pub fn normalize(self) -> Option<Client> {
        let id = document_id(self.id)?;
        Some(Client {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.and_then(|e| ClientEmail::new(e).ok()),
            phone: self.phone.and_then(|p| PhoneNumber::new(p).ok()),
            created_at: self.created_at.and_then(|ts| ts.to_datetime()),
        })
    }
}
