//! The pull interface over delivered store snapshots.
//!
//! Real-time push behavior belongs to the external data-access layer; this
//! crate only ever reads already-delivered collections through these
//! traits, keyed by account id.

use chrono::NaiveDateTime;

use crate::domain::appointment::Appointment;
use crate::domain::catalog::{Program, ServiceItem};
use crate::domain::client::Client;
use crate::domain::sale::Sale;
use crate::domain::status::StatusGroup;
use crate::period::DateRange;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod snapshot;

#[derive(Debug, Clone)]
pub struct AppointmentListQuery {
    pub account_id: String,
    pub range: Option<DateRange>,
    pub status_group: Option<StatusGroup>,
}

impl AppointmentListQuery {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            range: None,
            status_group: None,
        }
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn status_group(mut self, group: StatusGroup) -> Self {
        self.status_group = Some(group);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SaleListQuery {
    pub account_id: String,
    /// Status label filter, compared case-insensitively ("completed").
    pub status: Option<String>,
    pub range: Option<DateRange>,
}

impl SaleListQuery {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            status: None,
            range: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }
}

pub trait AppointmentReader {
    /// Lists appointments ordered by start ascending; records with no
    /// parseable start sort last.
    fn list_appointments(&self, query: AppointmentListQuery) -> RepositoryResult<Vec<Appointment>>;
    /// Earliest known appointment instant, used as the "since start" floor.
    fn earliest_appointment(&self, account_id: &str) -> RepositoryResult<Option<NaiveDateTime>>;
}

pub trait SaleReader {
    /// Lists sales ordered by completion time descending; records with no
    /// completion time sort last.
    fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<Vec<Sale>>;
}

pub trait CatalogReader {
    fn list_services(&self, account_id: &str) -> RepositoryResult<Vec<ServiceItem>>;
    fn list_programs(&self, account_id: &str) -> RepositoryResult<Vec<Program>>;
}

pub trait ClientReader {
    fn list_clients(&self, account_id: &str) -> RepositoryResult<Vec<Client>>;
}
