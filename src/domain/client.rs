//! Client (CRM) records. Used for display, filtering and the new-client
//! dashboard metric; never aggregated monetarily.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, PhoneNumber};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Validated contact email; invalid stored values normalize to `None`.
    pub email: Option<ClientEmail>,
    /// E.164 phone; invalid stored values normalize to `None`.
    pub phone: Option<PhoneNumber>,
    pub created_at: Option<NaiveDateTime>,
}
