//! Transition engine applying workflow commands to assignments.

use super::WorkloadBalancer;
use crate::assignment::domain::{
    ApplicableLaw, Assignment, AssignmentId, AssignmentState, EstablishmentId, EstablishmentRef,
    PersonnelAssignment, Priority,
};
use crate::assignment::ports::AssignmentRegistry;
use crate::personnel::domain::{CapacityWarning, PersonnelId};
use crate::personnel::ports::PersonnelDirectory;
use crate::workflow::domain::{
    AuditEntry, Principal, TransitionKind, WorkflowCommand, WorkflowError, capability,
};
use crate::workflow::ports::AuditSink;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating an inspection assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssignmentRequest {
    establishment_id: String,
    establishment_name: String,
    establishment_address: String,
    applicable_law: ApplicableLaw,
    category: String,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
}

impl CreateAssignmentRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        establishment_id: impl Into<String>,
        establishment_name: impl Into<String>,
        applicable_law: ApplicableLaw,
    ) -> Self {
        Self {
            establishment_id: establishment_id.into(),
            establishment_name: establishment_name.into(),
            establishment_address: String::new(),
            applicable_law,
            category: String::new(),
            priority: Priority::Medium,
            due_date: None,
        }
    }

    /// Sets the establishment address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.establishment_address = address.into();
        self
    }

    /// Sets the business category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the priority. Defaults to [`Priority::Medium`].
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the inspection due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Result of one applied command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteOutcome {
    /// The assignment after the transition.
    pub assignment: Assignment,
    /// Capacity warning raised when the transition added workload past the
    /// receiving person's limit.
    pub warning: Option<CapacityWarning>,
}

/// Applies workflow commands against the assignment lifecycle.
///
/// Execution order is fixed: capability check, load, domain mutation,
/// persist, workload accounting, audit. The capability check precedes the
/// load, so an incapable role is refused even for assignments that do not
/// exist. Workload accounting keys off the lifecycle itself: whenever a
/// transition moves an assignment into or out of the workload-counting
/// states, the held person's counter follows.
pub struct TransitionEngine<R, P, A, C>
where
    R: AssignmentRegistry,
    P: PersonnelDirectory,
    A: AuditSink,
    C: Clock + Send + Sync,
{
    registry: Arc<R>,
    balancer: WorkloadBalancer<P>,
    audit: Arc<A>,
    clock: Arc<C>,
}

impl<R, P, A, C> TransitionEngine<R, P, A, C>
where
    R: AssignmentRegistry,
    P: PersonnelDirectory,
    A: AuditSink,
    C: Clock + Send + Sync,
{
    /// Creates an engine over the given ports.
    #[must_use]
    pub const fn new(
        registry: Arc<R>,
        balancer: WorkloadBalancer<P>,
        audit: Arc<A>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            registry,
            balancer,
            audit,
            clock,
        }
    }

    /// Returns the balancer for recommendation queries.
    #[must_use]
    pub const fn balancer(&self) -> &WorkloadBalancer<P> {
        &self.balancer
    }

    /// Creates and stores a new assignment in the created state.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Authorization`] unless the principal holds a
    /// creation-capable role, [`WorkflowError::Validation`] when the
    /// establishment fields are invalid, or a persistence mapping when the
    /// registry rejects the store.
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment, WorkflowError> {
        if !capability::role_may_invoke(principal.role(), TransitionKind::Create) {
            return Err(WorkflowError::Authorization {
                role: principal.role(),
                kind: TransitionKind::Create,
            });
        }
        let establishment = EstablishmentRef::new(
            EstablishmentId::new(request.establishment_id)?,
            request.establishment_name,
            request.establishment_address,
        )?;
        let assignment = Assignment::new(
            establishment,
            request.applicable_law,
            request.category,
            request.priority,
            request.due_date,
            self.clock.as_ref(),
        );
        self.registry.store(&assignment).await?;
        tracing::info!(
            assignment_id = %assignment.id(),
            establishment = assignment.establishment().name(),
            law = assignment.applicable_law().as_str(),
            actor = principal.actor(),
            "assignment created"
        );
        Ok(assignment)
    }

    /// Applies one command to one assignment.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Authorization`] when the principal's role may
    /// never invoke the command's kind, [`WorkflowError::NotFound`] when the
    /// assignment does not exist, [`WorkflowError::InvalidTransition`] when
    /// the lifecycle refuses the edge, and the payload-specific variants
    /// documented on [`WorkflowError`] otherwise.
    ///
    /// Workload settlement and the audit append run after the registry write.
    /// A [`WorkflowError::Transient`] from either therefore means the
    /// transition itself may already be persisted; callers retrying on a
    /// transient error should expect [`WorkflowError::InvalidTransition`]
    /// when the write had in fact landed.
    pub async fn execute(
        &self,
        principal: &Principal,
        id: AssignmentId,
        command: WorkflowCommand,
    ) -> Result<ExecuteOutcome, WorkflowError> {
        let kind = command.kind();
        if !capability::role_may_invoke(principal.role(), kind) {
            return Err(WorkflowError::Authorization {
                role: principal.role(),
                kind,
            });
        }

        let mut assignment = self
            .registry
            .find_by_id(id)
            .await?
            .ok_or(WorkflowError::NotFound(id))?;
        let before = assignment.state();
        let holder_before = assignment.assigned_personnel().map(PersonnelAssignment::id);

        self.apply(principal, &mut assignment, command).await?;
        self.registry.update(&assignment).await?;

        let after = assignment.state();
        let warning = self
            .settle_workload(before, holder_before, &assignment)
            .await?;

        self.audit
            .append(AuditEntry {
                assignment_id: id,
                actor: principal.actor().to_owned(),
                role: principal.role(),
                kind,
                from: before,
                to: after,
                recorded_at: self.clock.utc(),
            })
            .await?;
        tracing::info!(
            assignment_id = %id,
            from = before.as_str(),
            to = after.as_str(),
            kind = kind.as_str(),
            role = principal.role().as_str(),
            actor = principal.actor(),
            "workflow transition applied"
        );

        Ok(ExecuteOutcome { assignment, warning })
    }

    /// Runs the command's domain mutation against the loaded aggregate.
    async fn apply(
        &self,
        principal: &Principal,
        assignment: &mut Assignment,
        command: WorkflowCommand,
    ) -> Result<(), WorkflowError> {
        let clock = self.clock.as_ref();
        match command {
            WorkflowCommand::ForwardToUnit => assignment.forward_to_unit(clock)?,
            WorkflowCommand::AssignPersonnel { personnel_id } => {
                let person = self
                    .balancer
                    .eligible_for(assignment.applicable_law(), personnel_id)
                    .await?;
                let assignee = PersonnelAssignment::new(person.id(), person.name().clone());
                assignment.assign_personnel(assignee, clock)?;
            }
            WorkflowCommand::SaveProgress {
                completion,
                content,
            } => assignment.record_progress(completion, content, clock)?,
            WorkflowCommand::Resume => assignment.resume_work(clock)?,
            WorkflowCommand::Submit => assignment.submit(clock)?,
            WorkflowCommand::UnitReview => assignment.mark_unit_reviewed(clock)?,
            WorkflowCommand::SectionReview => assignment.mark_section_reviewed(clock)?,
            WorkflowCommand::Approve => assignment.approve(clock)?,
            WorkflowCommand::ReturnForRevision { feedback, sections } => {
                let reviewer =
                    principal
                        .role()
                        .reviewer_role()
                        .ok_or(WorkflowError::Authorization {
                            role: principal.role(),
                            kind: TransitionKind::ReturnForRevision,
                        })?;
                assignment.return_for_revision(reviewer, feedback, &sections, clock)?;
            }
            WorkflowCommand::Cancel => assignment.cancel(clock)?,
            WorkflowCommand::RescheduleDueDate { due_date } => {
                assignment.reschedule_due_date(due_date, clock)?;
            }
        }
        Ok(())
    }

    /// Adjusts the held person's workload after a persisted transition.
    async fn settle_workload(
        &self,
        before: AssignmentState,
        holder_before: Option<PersonnelId>,
        assignment: &Assignment,
    ) -> Result<Option<CapacityWarning>, WorkflowError> {
        let after = assignment.state();
        if before.counts_against_workload()
            && !after.counts_against_workload()
            && let Some(holder) = holder_before
        {
            self.balancer.release_assignment(holder).await?;
        } else if !before.counts_against_workload()
            && after.counts_against_workload()
            && let Some(holder) = assignment.assigned_personnel().map(PersonnelAssignment::id)
        {
            return self.balancer.record_assignment(holder).await;
        }
        Ok(None)
    }
}
