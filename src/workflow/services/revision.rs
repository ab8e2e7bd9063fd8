//! Return-for-revision loop: returning work and resuming it.

use super::engine::{ExecuteOutcome, TransitionEngine};
use crate::assignment::domain::{
    AssignmentId, CompletionPercentage, FeedbackEntry, FormContent, FormSection,
};
use crate::assignment::ports::AssignmentRegistry;
use crate::personnel::ports::PersonnelDirectory;
use crate::workflow::domain::{Principal, WorkflowCommand, WorkflowError};
use crate::workflow::ports::AuditSink;
use mockable::Clock;
use std::sync::Arc;

/// Everything the monitoring personnel needs to pick returned work back up.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumePacket {
    /// The resumed assignment.
    pub assignment_id: AssignmentId,
    /// Sections open for editing. When the reviewers flagged no sections the
    /// whole form is editable.
    pub editable_sections: Vec<FormSection>,
    /// Full feedback history, oldest first.
    pub feedback: Vec<FeedbackEntry>,
    /// Completion carried over from before the return.
    pub completion: CompletionPercentage,
    /// Form content carried over from before the return, if any.
    pub prior_content: Option<FormContent>,
}

/// Drives the return-for-revision loop on top of the transition engine.
pub struct RevisionService<R, P, A, C>
where
    R: AssignmentRegistry,
    P: PersonnelDirectory,
    A: AuditSink,
    C: Clock + Send + Sync,
{
    engine: Arc<TransitionEngine<R, P, A, C>>,
}

impl<R, P, A, C> RevisionService<R, P, A, C>
where
    R: AssignmentRegistry,
    P: PersonnelDirectory,
    A: AuditSink,
    C: Clock + Send + Sync,
{
    /// Creates a revision service over the given engine.
    #[must_use]
    pub const fn new(engine: Arc<TransitionEngine<R, P, A, C>>) -> Self {
        Self { engine }
    }

    /// Returns reviewed work to the monitoring personnel.
    ///
    /// Appends the reviewer's note and unions the flagged sections into the
    /// edit flags. A second reviewer may return work that is already
    /// returned; feedback accumulates.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkflowError`] from the underlying transition,
    /// including [`WorkflowError::Validation`] when the feedback is blank.
    pub async fn return_for_revision(
        &self,
        principal: &Principal,
        assignment_id: AssignmentId,
        feedback: impl Into<String> + Send,
        sections: Vec<FormSection>,
    ) -> Result<ExecuteOutcome, WorkflowError> {
        self.engine
            .execute(
                principal,
                assignment_id,
                WorkflowCommand::ReturnForRevision {
                    feedback: feedback.into(),
                    sections,
                },
            )
            .await
    }

    /// Resumes returned work and assembles the revision context.
    ///
    /// The transition re-counts the assignment against the holder's
    /// workload; completion, content, and edit flags all carry over.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkflowError`] from the underlying transition.
    pub async fn resume(
        &self,
        principal: &Principal,
        assignment_id: AssignmentId,
    ) -> Result<ResumePacket, WorkflowError> {
        let outcome = self
            .engine
            .execute(principal, assignment_id, WorkflowCommand::Resume)
            .await?;
        let assignment = outcome.assignment;
        let editable_sections = if assignment.sections_to_edit().is_empty() {
            FormSection::ALL.to_vec()
        } else {
            assignment.sections_to_edit().to_vec()
        };
        Ok(ResumePacket {
            assignment_id: assignment.id(),
            editable_sections,
            feedback: assignment.feedback().to_vec(),
            completion: assignment.completion(),
            prior_content: assignment.form_content().cloned(),
        })
    }
}
