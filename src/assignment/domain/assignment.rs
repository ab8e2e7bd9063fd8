//! Assignment aggregate root and the canonical lifecycle state machine.

use super::{
    ApplicableLaw, AssignmentDomainError, AssignmentId, EstablishmentRef, FeedbackEntry,
    FormContent, FormSection, ParseAssignmentStateError, ParsePriorityError, ReviewerRole,
};
use crate::personnel::domain::{PersonnelId, PersonnelName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Canonical lifecycle state of an inspection assignment.
///
/// Variant order follows the forward path of the pipeline; `Ord` is used for
/// deterministic sorting only, not for transition legality.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentState {
    /// Created by an admin or division-chief action; not yet routed.
    Created,
    /// Forwarded by the section chief to the responsible monitoring unit.
    ForwardedToUnit,
    /// Unit head has assigned monitoring personnel.
    AssignedToPersonnel,
    /// Monitoring personnel are working on the inspection form.
    InProgress,
    /// Completed form submitted for unit review.
    Submitted,
    /// Endorsed by the unit head.
    UnitReviewed,
    /// Endorsed by the section chief.
    SectionReviewed,
    /// Returned downward with feedback and section edit flags.
    ReturnedForRevision,
    /// Approved by the division chief. Terminal.
    Approved,
    /// Cancelled by an admin action. Terminal.
    Cancelled,
}

impl AssignmentState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::ForwardedToUnit => "forwarded_to_unit",
            Self::AssignedToPersonnel => "assigned_to_personnel",
            Self::InProgress => "in_progress",
            Self::Submitted => "submitted",
            Self::UnitReviewed => "unit_reviewed",
            Self::SectionReviewed => "section_reviewed",
            Self::ReturnedForRevision => "returned_for_revision",
            Self::Approved => "approved",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether the state ends the lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Cancelled)
    }

    /// Returns whether an assignment in this state counts against the
    /// assigned person's workload. Submitted work and beyond no longer
    /// occupies capacity.
    #[must_use]
    pub const fn counts_against_workload(self) -> bool {
        matches!(self, Self::AssignedToPersonnel | Self::InProgress)
    }

    /// Returns whether a reviewer may return an assignment in this state
    /// for revision.
    #[must_use]
    pub const fn is_review_state(self) -> bool {
        matches!(
            self,
            Self::UnitReviewed | Self::SectionReviewed | Self::ReturnedForRevision
        )
    }

    /// Returns whether the personnel reference must be set in this state.
    #[must_use]
    pub const fn requires_assigned_personnel(self) -> bool {
        matches!(
            self,
            Self::AssignedToPersonnel
                | Self::InProgress
                | Self::Submitted
                | Self::UnitReviewed
                | Self::SectionReviewed
                | Self::Approved
                | Self::ReturnedForRevision
        )
    }

    /// Returns whether `to` is a legal lifecycle edge from this state.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        if matches!(to, Self::Cancelled) {
            return !self.is_terminal();
        }
        matches!(
            (self, to),
            (Self::Created, Self::ForwardedToUnit)
                | (Self::ForwardedToUnit, Self::AssignedToPersonnel)
                | (Self::AssignedToPersonnel, Self::InProgress)
                | (Self::InProgress, Self::Submitted)
                | (Self::Submitted, Self::UnitReviewed)
                | (Self::UnitReviewed, Self::SectionReviewed)
                | (Self::UnitReviewed, Self::ReturnedForRevision)
                | (Self::SectionReviewed, Self::Approved)
                | (Self::SectionReviewed, Self::ReturnedForRevision)
                | (Self::ReturnedForRevision, Self::InProgress)
                | (Self::ReturnedForRevision, Self::Approved)
        )
    }
}

impl TryFrom<&str> for AssignmentState {
    type Error = ParseAssignmentStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "forwarded_to_unit" => Ok(Self::ForwardedToUnit),
            "assigned_to_personnel" => Ok(Self::AssignedToPersonnel),
            "in_progress" => Ok(Self::InProgress),
            "submitted" => Ok(Self::Submitted),
            "unit_reviewed" => Ok(Self::UnitReviewed),
            "section_reviewed" => Ok(Self::SectionReviewed),
            "returned_for_revision" => Ok(Self::ReturnedForRevision),
            "approved" => Ok(Self::Approved),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseAssignmentStateError(value.to_owned())),
        }
    }
}

/// Inspection priority level, ordered from lowest to most urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Routine monitoring.
    Low,
    /// Standard schedule.
    Medium,
    /// Elevated attention.
    High,
    /// Immediate attention.
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Completion percentage of the inspection form, 0-100.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompletionPercentage(u8);

impl CompletionPercentage {
    /// No progress recorded.
    pub const ZERO: Self = Self(0);
    /// Fully completed form, eligible for submission.
    pub const COMPLETE: Self = Self(100);

    /// Creates a validated completion percentage.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidCompletionPercentage`] when
    /// the value exceeds 100.
    pub const fn new(value: u8) -> Result<Self, AssignmentDomainError> {
        if value > 100 {
            return Err(AssignmentDomainError::InvalidCompletionPercentage(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether the form is fully completed.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == 100
    }
}

/// Denormalised snapshot of the person an assignment is held by.
///
/// The display name is captured so registry searches can match against it
/// without consulting the personnel directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelAssignment {
    id: PersonnelId,
    name: PersonnelName,
}

impl PersonnelAssignment {
    /// Creates a personnel snapshot.
    #[must_use]
    pub const fn new(id: PersonnelId, name: PersonnelName) -> Self {
        Self { id, name }
    }

    /// Returns the personnel identifier.
    #[must_use]
    pub const fn id(&self) -> PersonnelId {
        self.id
    }

    /// Returns the personnel display name.
    #[must_use]
    pub const fn name(&self) -> &PersonnelName {
        &self.name
    }
}

/// Assignment aggregate root.
///
/// Mutated only through the workflow transition engine; never hard-deleted.
/// Every successful mutation bumps `version` and refreshes `last_updated`,
/// which the registry uses for optimistic concurrency control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    establishment: EstablishmentRef,
    applicable_law: ApplicableLaw,
    category: String,
    priority: Priority,
    state: AssignmentState,
    assigned_personnel: Option<PersonnelAssignment>,
    completion: CompletionPercentage,
    sections_to_edit: Vec<FormSection>,
    feedback: Vec<FeedbackEntry>,
    form_content: Option<FormContent>,
    created_at: DateTime<Utc>,
    assigned_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
    last_updated: DateTime<Utc>,
    version: u64,
}

/// Parameter object for reconstructing a persisted assignment aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignmentData {
    /// Persisted assignment identifier.
    pub id: AssignmentId,
    /// Persisted establishment snapshot.
    pub establishment: EstablishmentRef,
    /// Persisted applicable law.
    pub applicable_law: ApplicableLaw,
    /// Persisted classification category.
    pub category: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle state.
    pub state: AssignmentState,
    /// Persisted personnel snapshot, if any.
    pub assigned_personnel: Option<PersonnelAssignment>,
    /// Persisted completion percentage.
    pub completion: CompletionPercentage,
    /// Persisted section edit flags.
    pub sections_to_edit: Vec<FormSection>,
    /// Persisted feedback history.
    pub feedback: Vec<FeedbackEntry>,
    /// Persisted form content snapshot, if any.
    pub form_content: Option<FormContent>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted personnel-assignment timestamp, if any.
    pub assigned_date: Option<DateTime<Utc>>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted latest lifecycle timestamp.
    pub last_updated: DateTime<Utc>,
    /// Persisted optimistic-concurrency version.
    pub version: u64,
}

impl Assignment {
    /// Creates a new assignment in the [`AssignmentState::Created`] state.
    #[must_use]
    pub fn new(
        establishment: EstablishmentRef,
        applicable_law: ApplicableLaw,
        category: impl Into<String>,
        priority: Priority,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AssignmentId::new(),
            establishment,
            applicable_law,
            category: category.into().trim().to_owned(),
            priority,
            state: AssignmentState::Created,
            assigned_personnel: None,
            completion: CompletionPercentage::ZERO,
            sections_to_edit: Vec::new(),
            feedback: Vec::new(),
            form_content: None,
            created_at: timestamp,
            assigned_date: None,
            due_date,
            last_updated: timestamp,
            version: 1,
        }
    }

    /// Reconstructs an assignment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAssignmentData) -> Self {
        Self {
            id: data.id,
            establishment: data.establishment,
            applicable_law: data.applicable_law,
            category: data.category,
            priority: data.priority,
            state: data.state,
            assigned_personnel: data.assigned_personnel,
            completion: data.completion,
            sections_to_edit: data.sections_to_edit,
            feedback: data.feedback,
            form_content: data.form_content,
            created_at: data.created_at,
            assigned_date: data.assigned_date,
            due_date: data.due_date,
            last_updated: data.last_updated,
            version: data.version,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the establishment snapshot.
    #[must_use]
    pub const fn establishment(&self) -> &EstablishmentRef {
        &self.establishment
    }

    /// Returns the applicable law.
    #[must_use]
    pub const fn applicable_law(&self) -> ApplicableLaw {
        self.applicable_law
    }

    /// Returns the classification category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> AssignmentState {
        self.state
    }

    /// Returns the personnel snapshot, if assigned.
    #[must_use]
    pub const fn assigned_personnel(&self) -> Option<&PersonnelAssignment> {
        self.assigned_personnel.as_ref()
    }

    /// Returns the form completion percentage.
    #[must_use]
    pub const fn completion(&self) -> CompletionPercentage {
        self.completion
    }

    /// Returns the sections flagged for revision, in the order flagged.
    #[must_use]
    pub fn sections_to_edit(&self) -> &[FormSection] {
        &self.sections_to_edit
    }

    /// Returns the append-only feedback history.
    #[must_use]
    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    /// Returns the preserved form content, if any has been saved.
    #[must_use]
    pub const fn form_content(&self) -> Option<&FormContent> {
        self.form_content.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when personnel were assigned, if they have been.
    #[must_use]
    pub const fn assigned_date(&self) -> Option<DateTime<Utc>> {
        self.assigned_date
    }

    /// Returns the due date, if one was set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns the optimistic-concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Forwards the assignment to the responsible monitoring unit.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] unless the
    /// assignment is still in [`AssignmentState::Created`]; forwarding an
    /// already-forwarded assignment is rejected without mutation.
    pub fn forward_to_unit(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.transition_to(AssignmentState::ForwardedToUnit, clock)
    }

    /// Assigns monitoring personnel and records the assignment date.
    ///
    /// Specialization eligibility and workload accounting are enforced by
    /// the workload balancer before this mutator is reached.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] unless the
    /// assignment has been forwarded to the unit.
    pub fn assign_personnel(
        &mut self,
        assignee: PersonnelAssignment,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.check_transition(AssignmentState::AssignedToPersonnel)?;
        self.assigned_personnel = Some(assignee);
        self.assigned_date = Some(clock.utc());
        self.state = AssignmentState::AssignedToPersonnel;
        self.touch(clock);
        Ok(())
    }

    /// Records a form save by the monitoring personnel.
    ///
    /// The first save moves the assignment to
    /// [`AssignmentState::InProgress`]; a save from
    /// [`AssignmentState::ReturnedForRevision`] resumes work while retaining
    /// the section edit flags until resubmission. Prior form content is
    /// replaced only when the save carries content.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] when the
    /// assignment is not held by personnel in a workable state.
    pub fn record_progress(
        &mut self,
        completion: CompletionPercentage,
        content: Option<FormContent>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        match self.state {
            AssignmentState::AssignedToPersonnel | AssignmentState::ReturnedForRevision => {
                self.state = AssignmentState::InProgress;
            }
            AssignmentState::InProgress => {}
            from => {
                return Err(AssignmentDomainError::InvalidStateTransition {
                    assignment_id: self.id,
                    from,
                    to: AssignmentState::InProgress,
                });
            }
        }
        self.completion = completion;
        if let Some(snapshot) = content {
            self.form_content = Some(snapshot);
        }
        self.touch(clock);
        Ok(())
    }

    /// Resumes work on a returned assignment without recording a save.
    ///
    /// Completion, form content, and section edit flags are all retained;
    /// the flags clear only on resubmission.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] unless the
    /// assignment is returned for revision.
    pub fn resume_work(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        if self.state != AssignmentState::ReturnedForRevision {
            return Err(AssignmentDomainError::InvalidStateTransition {
                assignment_id: self.id,
                from: self.state,
                to: AssignmentState::InProgress,
            });
        }
        self.state = AssignmentState::InProgress;
        self.touch(clock);
        Ok(())
    }

    /// Submits the completed form for unit review.
    ///
    /// Clears the section edit flags; the feedback history is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] when not in
    /// progress, or [`AssignmentDomainError::IncompleteSubmission`] when the
    /// form is below 100% completion.
    pub fn submit(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.check_transition(AssignmentState::Submitted)?;
        if !self.completion.is_complete() {
            return Err(AssignmentDomainError::IncompleteSubmission {
                assignment_id: self.id,
                completion: self.completion.value(),
            });
        }
        self.sections_to_edit.clear();
        self.state = AssignmentState::Submitted;
        self.touch(clock);
        Ok(())
    }

    /// Records the unit head's endorsement of submitted work.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] unless the
    /// assignment is submitted.
    pub fn mark_unit_reviewed(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.transition_to(AssignmentState::UnitReviewed, clock)
    }

    /// Records the section chief's endorsement of unit-reviewed work.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] unless the
    /// assignment is unit-reviewed.
    pub fn mark_section_reviewed(
        &mut self,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.transition_to(AssignmentState::SectionReviewed, clock)
    }

    /// Approves the assignment. Terminal.
    ///
    /// A previously-returned assignment may be approved once resubmitted up
    /// the chain, so approval is accepted from the section-reviewed and
    /// returned-for-revision states.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] from any
    /// other state.
    pub fn approve(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.transition_to(AssignmentState::Approved, clock)
    }

    /// Returns the assignment to the monitoring personnel for revision.
    ///
    /// Appends the reviewer's note to the feedback history and unions
    /// `sections` into the edit flags without duplication. A second reviewer
    /// may add further feedback while the assignment is already returned.
    /// An empty `sections` list means "revise freely".
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyFeedback`] when the note is
    /// blank, or [`AssignmentDomainError::InvalidStateTransition`] when the
    /// assignment is not in a review state.
    pub fn return_for_revision(
        &mut self,
        reviewer: ReviewerRole,
        feedback: impl Into<String>,
        sections: &[FormSection],
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        let note = feedback.into();
        let trimmed = note.trim();
        if trimmed.is_empty() {
            return Err(AssignmentDomainError::EmptyFeedback);
        }
        if self.state != AssignmentState::ReturnedForRevision {
            self.check_transition(AssignmentState::ReturnedForRevision)?;
        }

        self.feedback.push(FeedbackEntry {
            reviewer,
            note: trimmed.to_owned(),
            recorded_at: clock.utc(),
        });
        for section in sections {
            if !self.sections_to_edit.contains(section) {
                self.sections_to_edit.push(*section);
            }
        }
        self.state = AssignmentState::ReturnedForRevision;
        self.touch(clock);
        Ok(())
    }

    /// Cancels the assignment. Terminal; releases the personnel reference.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStateTransition`] when the
    /// assignment is already terminal.
    pub fn cancel(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.check_transition(AssignmentState::Cancelled)?;
        self.assigned_personnel = None;
        self.state = AssignmentState::Cancelled;
        self.touch(clock);
        Ok(())
    }

    /// Reschedules the due date. Admin-level action; the due date is
    /// otherwise immutable once set.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::TerminalAssignment`] when the
    /// assignment is closed.
    pub fn reschedule_due_date(
        &mut self,
        due_date: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        if self.state.is_terminal() {
            return Err(AssignmentDomainError::TerminalAssignment {
                assignment_id: self.id,
                state: self.state,
            });
        }
        self.due_date = Some(due_date);
        self.touch(clock);
        Ok(())
    }

    /// Validates a lifecycle edge without mutating.
    const fn check_transition(&self, to: AssignmentState) -> Result<(), AssignmentDomainError> {
        if self.state.can_transition_to(to) {
            Ok(())
        } else {
            Err(AssignmentDomainError::InvalidStateTransition {
                assignment_id: self.id,
                from: self.state,
                to,
            })
        }
    }

    /// Applies a validated lifecycle edge.
    fn transition_to(
        &mut self,
        to: AssignmentState,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.check_transition(to)?;
        self.state = to;
        self.touch(clock);
        Ok(())
    }

    /// Refreshes `last_updated` and bumps the optimistic version.
    fn touch(&mut self, clock: &impl Clock) {
        self.last_updated = clock.utc();
        self.version = self.version.saturating_add(1);
    }
}
