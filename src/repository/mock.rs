//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDateTime;
use mockall::mock;

use crate::domain::appointment::Appointment;
use crate::domain::catalog::{Program, ServiceItem};
use crate::domain::client::Client;
use crate::domain::sale::Sale;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentListQuery, AppointmentReader, CatalogReader, ClientReader, SaleListQuery,
    SaleReader,
};

mock! {
    pub Repository {}

    impl AppointmentReader for Repository {
        fn list_appointments(
            &self,
            query: AppointmentListQuery,
        ) -> RepositoryResult<Vec<Appointment>>;
        fn earliest_appointment(
            &self,
            account_id: &str,
        ) -> RepositoryResult<Option<NaiveDateTime>>;
    }

    impl SaleReader for Repository {
        fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<Vec<Sale>>;
    }

    impl CatalogReader for Repository {
        fn list_services(&self, account_id: &str) -> RepositoryResult<Vec<ServiceItem>>;
        fn list_programs(&self, account_id: &str) -> RepositoryResult<Vec<Program>>;
    }

    impl ClientReader for Repository {
        fn list_clients(&self, account_id: &str) -> RepositoryResult<Vec<Client>>;
    }
}
