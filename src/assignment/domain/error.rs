//! Error types for assignment domain validation and parsing.

use super::{AssignmentId, AssignmentState};
use thiserror::Error;

/// Errors returned while constructing or mutating assignment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The requested state change is not an edge of the lifecycle.
    #[error("invalid state transition for assignment {assignment_id}: {from:?} -> {to:?}")]
    InvalidStateTransition {
        /// The assignment whose transition was rejected.
        assignment_id: AssignmentId,
        /// State the assignment currently holds.
        from: AssignmentState,
        /// State the caller attempted to reach.
        to: AssignmentState,
    },

    /// Submission was attempted before the inspection form was complete.
    #[error("assignment {assignment_id} cannot be submitted at {completion}% completion")]
    IncompleteSubmission {
        /// The assignment whose submission was rejected.
        assignment_id: AssignmentId,
        /// Completion percentage at the time of the attempt.
        completion: u8,
    },

    /// The assignment is closed in a terminal state and accepts no edits.
    #[error("assignment {assignment_id} is closed in terminal state {state:?}")]
    TerminalAssignment {
        /// The closed assignment.
        assignment_id: AssignmentId,
        /// The terminal state it holds.
        state: AssignmentState,
    },

    /// Return-for-revision feedback is empty after trimming.
    #[error("return-for-revision feedback must not be empty")]
    EmptyFeedback,

    /// The external establishment identifier is empty after trimming.
    #[error("establishment identifier must not be empty")]
    EmptyEstablishmentId,

    /// The establishment display name is empty after trimming.
    #[error("establishment name must not be empty")]
    EmptyEstablishmentName,

    /// The completion percentage is outside the 0-100 range.
    #[error("invalid completion percentage {0}, expected 0-100")]
    InvalidCompletionPercentage(u8),
}

/// Error returned while parsing assignment states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment state: {0}")]
pub struct ParseAssignmentStateError(pub String);

/// Error returned while parsing priority levels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing applicable-law codes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown applicable law: {0}")]
pub struct ParseApplicableLawError(pub String);

/// Error returned while parsing inspection form section names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown inspection form section: {0}")]
pub struct ParseFormSectionError(pub String);
