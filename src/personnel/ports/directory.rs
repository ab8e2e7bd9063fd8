//! Directory port for personnel persistence and lookup.

use crate::personnel::domain::{Personnel, PersonnelId, Specialization};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for personnel directory operations.
pub type PersonnelDirectoryResult<T> = Result<T, PersonnelDirectoryError>;

/// Personnel persistence contract.
///
/// Workload counters are adjusted exclusively through [`update`] calls
/// issued by the workload balancer; implementations must apply each update
/// atomically with respect to concurrent updates of the same record.
///
/// [`update`]: PersonnelDirectory::update
#[async_trait]
pub trait PersonnelDirectory: Send + Sync {
    /// Stores a new personnel record.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelDirectoryError::DuplicatePersonnel`] when the
    /// identifier already exists.
    async fn store(&self, personnel: &Personnel) -> PersonnelDirectoryResult<()>;

    /// Persists changes to an existing personnel record.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelDirectoryError::NotFound`] when the record does
    /// not exist.
    async fn update(&self, personnel: &Personnel) -> PersonnelDirectoryResult<()>;

    /// Finds a personnel record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: PersonnelId) -> PersonnelDirectoryResult<Option<Personnel>>;

    /// Returns all personnel carrying the given specialization tag,
    /// ordered by ascending workload then by identifier.
    async fn list_by_specialization(
        &self,
        specialization: Specialization,
    ) -> PersonnelDirectoryResult<Vec<Personnel>>;
}

/// Errors returned by personnel directory implementations.
#[derive(Debug, Clone, Error)]
pub enum PersonnelDirectoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate personnel identifier: {0}")]
    DuplicatePersonnel(PersonnelId),

    /// The personnel record was not found.
    #[error("personnel not found: {0}")]
    NotFound(PersonnelId),

    /// The backing store did not answer within the caller-supplied deadline.
    /// Safe for the caller to retry with backoff.
    #[error("personnel directory timed out: {0}")]
    Timeout(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersonnelDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
