//! In-memory audit log for tests and single-process deployments.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::assignment::domain::AssignmentId;
use crate::workflow::domain::AuditEntry;
use crate::workflow::ports::{AuditSink, AuditSinkError, AuditSinkResult};

/// Thread-safe in-memory audit log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Creates an empty in-memory audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditLog {
    async fn append(&self, entry: AuditEntry) -> AuditSinkResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| AuditSinkError::persistence(std::io::Error::other(err.to_string())))?;
        entries.push(entry);
        Ok(())
    }

    async fn entries_for(&self, assignment_id: AssignmentId) -> AuditSinkResult<Vec<AuditEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| AuditSinkError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(entries
            .iter()
            .filter(|entry| entry.assignment_id == assignment_id)
            .cloned()
            .collect())
    }

    async fn export_all(&self) -> AuditSinkResult<Vec<AuditEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| AuditSinkError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(entries.clone())
    }
}
