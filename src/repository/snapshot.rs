//! Snapshot-backed repository.
//!
//! Adapts a delivered set of raw JSON documents (one subscription snapshot
//! per collection) to the reader traits. Documents are normalized through
//! `dto` on load; documents with an unrecognizable shape or without a
//! usable id are dropped with a warning rather than failing the whole
//! snapshot, matching the dashboard's tolerance for partial data.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::appointment::Appointment;
use crate::domain::catalog::{Program, ServiceItem};
use crate::domain::client::Client;
use crate::domain::sale::Sale;
use crate::dto::appointment::AppointmentDoc;
use crate::dto::catalog::{ProgramDoc, ServiceItemDoc};
use crate::dto::client::ClientDoc;
use crate::dto::sale::SaleDoc;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentListQuery, AppointmentReader, CatalogReader, ClientReader, SaleListQuery,
    SaleReader,
};

struct StoredSale {
    sale: Sale,
    status: String,
}

/// Decodes one raw document, dropping it with a warning when its shape does
/// not match. One legacy record must never discard the rest of a snapshot.
fn decode<T: DeserializeOwned>(collection: &str, document: Value) -> Option<T> {
    match serde_json::from_value(document) {
        Ok(doc) => Some(doc),
        Err(err) => {
            log::warn!("dropping malformed {collection} document: {err}");
            None
        }
    }
}

/// In-memory repository over one account's delivered snapshots.
#[derive(Default)]
pub struct SnapshotRepository {
    account_id: String,
    appointments: Vec<Appointment>,
    sales: Vec<StoredSale>,
    services: Vec<ServiceItem>,
    programs: Vec<Program>,
    clients: Vec<Client>,
}

impl SnapshotRepository {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Replaces the appointment snapshot. Returns the number of documents
    /// kept after normalization; the collection is re-sorted by start
    /// ascending with undated records last, since the subscription ordering
    /// is not stable for invalid starts.
    pub fn load_appointments(&mut self, documents: Vec<Value>) -> RepositoryResult<usize> {
        let mut appointments = Vec::with_capacity(documents.len());
        for document in documents {
            let Some(doc) = decode::<AppointmentDoc>("appointment", document) else {
                continue;
            };
            match doc.normalize() {
                Some(appointment) => appointments.push(appointment),
                None => log::warn!("dropping appointment document without id"),
            }
        }
        appointments.sort_by_key(|a| (a.start().is_none(), a.start()));
        self.appointments = appointments;
        Ok(self.appointments.len())
    }

    /// Replaces the sales snapshot, sorted by completion time descending
    /// with incomplete records last.
    pub fn load_sales(&mut self, documents: Vec<Value>) -> RepositoryResult<usize> {
        let mut sales = Vec::with_capacity(documents.len());
        for document in documents {
            let Some(doc) = decode::<SaleDoc>("sale", document) else {
                continue;
            };
            let status = doc.status_label().to_lowercase();
            match doc.normalize() {
                Some(sale) => sales.push(StoredSale { sale, status }),
                None => log::warn!("dropping sale document without id"),
            }
        }
        sales.sort_by_key(|s| {
            (
                s.sale.completed_at.is_none(),
                std::cmp::Reverse(s.sale.completed_at),
            )
        });
        self.sales = sales;
        Ok(self.sales.len())
    }

    pub fn load_services(&mut self, documents: Vec<Value>) -> RepositoryResult<usize> {
        let mut services = Vec::with_capacity(documents.len());
        for document in documents {
            let Some(doc) = decode::<ServiceItemDoc>("service", document) else {
                continue;
            };
            match doc.normalize() {
                Some(service) => services.push(service),
                None => log::warn!("dropping service document without id"),
            }
        }
        self.services = services;
        Ok(self.services.len())
    }

    pub fn load_programs(&mut self, documents: Vec<Value>) -> RepositoryResult<usize> {
        let mut programs = Vec::with_capacity(documents.len());
        for document in documents {
            let Some(doc) = decode::<ProgramDoc>("program", document) else {
                continue;
            };
            match doc.normalize() {
                Some(program) => programs.push(program),
                None => log::warn!("dropping program document without id"),
            }
        }
        self.programs = programs;
        Ok(self.programs.len())
    }

    pub fn load_clients(&mut self, documents: Vec<Value>) -> RepositoryResult<usize> {
        let mut clients = Vec::with_capacity(documents.len());
        for document in documents {
            let Some(doc) = decode::<ClientDoc>("client", document) else {
                continue;
            };
            match doc.normalize() {
                Some(client) => clients.push(client),
                None => log::warn!("dropping client document without id"),
            }
        }
        self.clients = clients;
        Ok(self.clients.len())
    }

    fn is_account(&self, account_id: &str) -> bool {
        self.account_id == account_id
    }
}

impl AppointmentReader for SnapshotRepository {
    fn list_appointments(&self, query: AppointmentListQuery) -> RepositoryResult<Vec<Appointment>> {
        if !self.is_account(&query.account_id) {
            return Ok(Vec::new());
        }
        Ok(self
            .appointments
            .iter()
            .filter(|a| match &query.range {
                // Range filters bucket on the local calendar date; undated
                // appointments are excluded once a range applies.
                Some(range) => a.date.is_some_and(|d| range.contains_date(d)),
                None => true,
            })
            .filter(|a| match query.status_group {
                Some(group) => a.status.group() == group,
                None => true,
            })
            .cloned()
            .collect())
    }

    fn earliest_appointment(&self, account_id: &str) -> RepositoryResult<Option<NaiveDateTime>> {
        if !self.is_account(account_id) {
            return Ok(None);
        }
        Ok(self.appointments.iter().filter_map(|a| a.start()).min())
    }
}

impl SaleReader for SnapshotRepository {
    fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<Vec<Sale>> {
        if !self.is_account(&query.account_id) {
            return Ok(Vec::new());
        }
        Ok(self
            .sales
            .iter()
            .filter(|s| match &query.status {
                Some(status) => s.status.eq_ignore_ascii_case(status),
                None => true,
            })
            .filter(|s| match &query.range {
                Some(range) => s.sale.completed_at.is_some_and(|at| range.contains(at)),
                None => true,
            })
            .map(|s| s.sale.clone())
            .collect())
    }
}

impl CatalogReader for SnapshotRepository {
    fn list_services(&self, account_id: &str) -> RepositoryResult<Vec<ServiceItem>> {
        if !self.is_account(account_id) {
            return Ok(Vec::new());
        }
        Ok(self.services.clone())
    }

    fn list_programs(&self, account_id: &str) -> RepositoryResult<Vec<Program>> {
        if !self.is_account(account_id) {
            return Ok(Vec::new());
        }
        Ok(self.programs.clone())
    }
}

impl ClientReader for SnapshotRepository {
    fn list_clients(&self, account_id: &str) -> RepositoryResult<Vec<Client>> {
        if !self.is_account(account_id) {
            return Ok(Vec::new());
        }
        Ok(self.clients.clone())
    }
}
