//! Registry port for assignment persistence, lookup, and querying.

use crate::assignment::domain::{Assignment, AssignmentId};
use crate::assignment::ports::query::{AssignmentFilter, SortSpec};
use crate::personnel::domain::PersonnelId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment registry operations.
pub type AssignmentRegistryResult<T> = Result<T, AssignmentRegistryError>;

/// Assignment persistence contract.
///
/// The registry never applies business rules; it guarantees atomic
/// read-modify-write per assignment. Concurrent writers racing on the same
/// assignment are serialised through optimistic versioning: [`update`]
/// accepts an aggregate only when its version is exactly one ahead of the
/// stored version.
///
/// [`update`]: AssignmentRegistry::update
#[async_trait]
pub trait AssignmentRegistry: Send + Sync {
    /// Stores a new assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRegistryError::DuplicateAssignment`] when the
    /// identifier already exists.
    async fn store(&self, assignment: &Assignment) -> AssignmentRegistryResult<()>;

    /// Persists changes to an existing assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRegistryError::NotFound`] when the assignment
    /// does not exist, or [`AssignmentRegistryError::StaleVersion`] when the
    /// incoming version is not exactly one ahead of the stored version.
    async fn update(&self, assignment: &Assignment) -> AssignmentRegistryResult<()>;

    /// Finds an assignment by identifier.
    ///
    /// Returns `None` when the assignment does not exist.
    async fn find_by_id(&self, id: AssignmentId) -> AssignmentRegistryResult<Option<Assignment>>;

    /// Lists assignments matching `filter`, ordered by `sort` when given.
    ///
    /// Sorting is stable; records with equal keys retain input order and
    /// ties are broken by ascending identifier. Without a sort the listing
    /// is ordered by ascending identifier.
    async fn list(
        &self,
        filter: &AssignmentFilter,
        sort: Option<SortSpec>,
    ) -> AssignmentRegistryResult<Vec<Assignment>>;

    /// Returns all assignments currently referencing the given personnel.
    async fn list_by_personnel(
        &self,
        personnel_id: PersonnelId,
    ) -> AssignmentRegistryResult<Vec<Assignment>>;
}

/// Errors returned by assignment registry implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentRegistryError {
    /// An assignment with the same identifier already exists.
    #[error("duplicate assignment identifier: {0}")]
    DuplicateAssignment(AssignmentId),

    /// The assignment was not found.
    #[error("assignment not found: {0}")]
    NotFound(AssignmentId),

    /// A concurrent writer updated the assignment first.
    #[error(
        "stale write for assignment {assignment_id}: expected version {expected}, found {found}"
    )]
    StaleVersion {
        /// The contended assignment.
        assignment_id: AssignmentId,
        /// The version the store would have accepted.
        expected: u64,
        /// The version the writer presented.
        found: u64,
    },

    /// The backing store did not answer within the caller-supplied deadline.
    /// Safe for the caller to retry with backoff.
    #[error("assignment registry timed out: {0}")]
    Timeout(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentRegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
