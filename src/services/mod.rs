//! Pure service functions over the repository reader traits. Each function
//! recomputes from the delivered snapshots; nothing here caches or blocks.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod booking;
pub mod dashboard;
pub mod statistics;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Recurrence template has no usable date")]
    MissingAnchorDate,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Status label the point-of-sale flow writes on finalized transactions.
/// All revenue reporting is scoped to it.
pub const SALE_STATUS_COMPLETED: &str = "completed";
