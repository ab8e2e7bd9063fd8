//! Audit sink port for the transition trail.

use crate::assignment::domain::AssignmentId;
use crate::workflow::domain::AuditEntry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit sink operations.
pub type AuditSinkResult<T> = Result<T, AuditSinkError>;

/// Append-only sink for applied-transition records.
///
/// Entries are never updated or deleted; implementations must preserve
/// append order within one assignment.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Appends one applied-transition record.
    async fn append(&self, entry: AuditEntry) -> AuditSinkResult<()>;

    /// Returns the trail for one assignment in append order.
    async fn entries_for(&self, assignment_id: AssignmentId) -> AuditSinkResult<Vec<AuditEntry>>;

    /// Returns the full trail in append order, for compliance export.
    async fn export_all(&self) -> AuditSinkResult<Vec<AuditEntry>>;
}

/// Errors returned by audit sink implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditSinkError {
    /// The backing store did not answer within the caller-supplied deadline.
    /// Safe for the caller to retry with backoff.
    #[error("audit sink timed out: {0}")]
    Timeout(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditSinkError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
