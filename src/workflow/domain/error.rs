//! Workflow error taxonomy and mappings from inner-layer failures.

use super::role::{ParseRoleError, Role};
use super::transition::TransitionKind;
use crate::assignment::domain::{AssignmentDomainError, AssignmentId, AssignmentState};
use crate::assignment::ports::AssignmentRegistryError;
use crate::personnel::domain::{PersonnelId, Specialization};
use crate::personnel::ports::PersonnelDirectoryError;
use crate::workflow::ports::AuditSinkError;
use thiserror::Error;

/// Errors returned by workflow services.
///
/// Authorization is checked before anything else: an actor whose role may
/// never invoke a transition kind receives [`Authorization`] regardless of
/// the assignment's state or existence. A capable role in the wrong state
/// receives [`InvalidTransition`] instead.
///
/// [`Authorization`]: WorkflowError::Authorization
/// [`InvalidTransition`]: WorkflowError::InvalidTransition
#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    /// A domain rule rejected the command's payload.
    #[error("validation failed: {0}")]
    Validation(AssignmentDomainError),

    /// The role may never invoke this transition kind.
    #[error("role {role} is not permitted to {kind}")]
    Authorization {
        /// Role held by the rejected actor.
        role: Role,
        /// The transition kind that was refused.
        kind: TransitionKind,
    },

    /// The transition is not an edge from the assignment's current state.
    #[error("invalid transition for assignment {assignment_id}: {from:?} -> {to:?}")]
    InvalidTransition {
        /// The assignment whose transition was rejected.
        assignment_id: AssignmentId,
        /// State the assignment currently holds.
        from: AssignmentState,
        /// State the caller attempted to reach.
        to: AssignmentState,
    },

    /// The personnel's specialization does not cover the applicable law.
    #[error(
        "personnel {personnel_id} holds specialization {held} but the assignment \
         requires {required}"
    )]
    IneligiblePersonnel {
        /// The ineligible personnel.
        personnel_id: PersonnelId,
        /// Specialization the applicable law requires.
        required: Specialization,
        /// Specialization the personnel holds.
        held: Specialization,
    },

    /// Submission was attempted before the inspection form was complete.
    #[error("assignment {assignment_id} cannot be submitted at {completion}% completion")]
    IncompleteSubmission {
        /// The assignment whose submission was rejected.
        assignment_id: AssignmentId,
        /// Completion percentage at the time of the attempt.
        completion: u8,
    },

    /// A concurrent writer won the race on this assignment.
    ///
    /// The caller should reload the assignment and re-evaluate before
    /// retrying; the state it read is no longer current.
    #[error("concurrent update conflict on assignment {assignment_id}")]
    Conflict {
        /// The contended assignment.
        assignment_id: AssignmentId,
    },

    /// A backing store failed transiently. Safe to retry with backoff.
    #[error("transient backing-store failure: {0}")]
    Transient(String),

    /// The assignment does not exist.
    #[error("assignment not found: {0}")]
    NotFound(AssignmentId),

    /// The personnel record does not exist.
    #[error("personnel not found: {0}")]
    PersonnelNotFound(PersonnelId),

    /// The supplied role string is not part of the review hierarchy.
    #[error(transparent)]
    UnknownRole(#[from] ParseRoleError),
}

impl WorkflowError {
    /// Returns whether the caller may retry the command unchanged.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl From<AssignmentDomainError> for WorkflowError {
    fn from(err: AssignmentDomainError) -> Self {
        match err {
            AssignmentDomainError::InvalidStateTransition {
                assignment_id,
                from,
                to,
            } => Self::InvalidTransition {
                assignment_id,
                from,
                to,
            },
            AssignmentDomainError::IncompleteSubmission {
                assignment_id,
                completion,
            } => Self::IncompleteSubmission {
                assignment_id,
                completion,
            },
            other => Self::Validation(other),
        }
    }
}

impl From<AssignmentRegistryError> for WorkflowError {
    fn from(err: AssignmentRegistryError) -> Self {
        match err {
            AssignmentRegistryError::NotFound(id) => Self::NotFound(id),
            AssignmentRegistryError::DuplicateAssignment(id)
            | AssignmentRegistryError::StaleVersion {
                assignment_id: id, ..
            } => Self::Conflict { assignment_id: id },
            AssignmentRegistryError::Timeout(message) => Self::Transient(message),
            AssignmentRegistryError::Persistence(source) => Self::Transient(source.to_string()),
        }
    }
}

impl From<PersonnelDirectoryError> for WorkflowError {
    fn from(err: PersonnelDirectoryError) -> Self {
        match err {
            PersonnelDirectoryError::NotFound(id) => Self::PersonnelNotFound(id),
            PersonnelDirectoryError::Timeout(message) => Self::Transient(message),
            other => Self::Transient(other.to_string()),
        }
    }
}

impl From<AuditSinkError> for WorkflowError {
    fn from(err: AuditSinkError) -> Self {
        match err {
            AuditSinkError::Timeout(message) => Self::Transient(message),
            AuditSinkError::Persistence(source) => Self::Transient(source.to_string()),
        }
    }
}
