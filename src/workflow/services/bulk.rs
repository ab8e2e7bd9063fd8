//! Bulk application of one command across many assignments.

use super::engine::TransitionEngine;
use crate::assignment::domain::AssignmentId;
use crate::assignment::ports::AssignmentRegistry;
use crate::personnel::ports::PersonnelDirectory;
use crate::workflow::domain::{Principal, WorkflowCommand, WorkflowError};
use crate::workflow::ports::AuditSink;
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;

/// Per-assignment results of one bulk command.
///
/// Bulk application is not atomic: each assignment succeeds or fails on its
/// own and a failure never rolls back earlier successes.
#[derive(Debug, Clone)]
pub struct BulkOutcome {
    /// Assignments the command was applied to, in request order.
    pub succeeded: Vec<AssignmentId>,
    /// Assignments the command failed on, with the per-assignment error.
    pub failed: Vec<(AssignmentId, WorkflowError)>,
}

impl BulkOutcome {
    /// Returns whether every assignment accepted the command.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies one command to a batch of assignments.
pub struct BulkCoordinator<R, P, A, C>
where
    R: AssignmentRegistry,
    P: PersonnelDirectory,
    A: AuditSink,
    C: Clock + Send + Sync,
{
    engine: Arc<TransitionEngine<R, P, A, C>>,
}

impl<R, P, A, C> BulkCoordinator<R, P, A, C>
where
    R: AssignmentRegistry,
    P: PersonnelDirectory,
    A: AuditSink,
    C: Clock + Send + Sync,
{
    /// Creates a coordinator over the given engine.
    #[must_use]
    pub const fn new(engine: Arc<TransitionEngine<R, P, A, C>>) -> Self {
        Self { engine }
    }

    /// Applies `command` to each listed assignment in order.
    ///
    /// Duplicate identifiers are processed once, on first occurrence. Each
    /// assignment is authorized and transitioned independently; a failure
    /// records the per-assignment error and the batch continues.
    pub async fn apply(
        &self,
        principal: &Principal,
        assignment_ids: &[AssignmentId],
        command: &WorkflowCommand,
    ) -> BulkOutcome {
        let mut seen: HashSet<AssignmentId> = HashSet::new();
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for &assignment_id in assignment_ids {
            if !seen.insert(assignment_id) {
                continue;
            }
            match self
                .engine
                .execute(principal, assignment_id, command.clone())
                .await
            {
                Ok(_) => succeeded.push(assignment_id),
                Err(err) => failed.push((assignment_id, err)),
            }
        }
        tracing::info!(
            requested = assignment_ids.len(),
            applied = succeeded.len(),
            failed = failed.len(),
            kind = command.kind().as_str(),
            "bulk command finished"
        );
        BulkOutcome { succeeded, failed }
    }
}
