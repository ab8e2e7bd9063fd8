//! Workflow commands applied by the transition engine.

use super::TransitionKind;
use crate::assignment::domain::{CompletionPercentage, FormContent, FormSection};
use crate::personnel::domain::PersonnelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A request to advance one assignment through its lifecycle.
///
/// Commands carry only the transition payload; the acting principal and the
/// target assignment are supplied alongside when the engine executes them,
/// which lets one command value drive a bulk operation across many
/// assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WorkflowCommand {
    /// Forward a created assignment to the monitoring unit.
    ForwardToUnit,
    /// Hand the assignment to the named monitoring personnel.
    AssignPersonnel {
        /// The personnel to receive the assignment.
        personnel_id: PersonnelId,
    },
    /// Record a form save with the current completion figure.
    SaveProgress {
        /// Completion after the save.
        completion: CompletionPercentage,
        /// Form content snapshot, when the save carries one.
        content: Option<FormContent>,
    },
    /// Pick returned work back up without recording a save.
    Resume,
    /// Submit the completed form for unit review.
    Submit,
    /// Endorse submitted work at the unit level.
    UnitReview,
    /// Endorse unit-reviewed work at the section level.
    SectionReview,
    /// Give final approval.
    Approve,
    /// Return the assignment for revision with reviewer feedback.
    ReturnForRevision {
        /// Free-text note for the monitoring personnel. Must be non-blank.
        feedback: String,
        /// Sections flagged for editing; empty means revise freely.
        sections: Vec<FormSection>,
    },
    /// Cancel the assignment.
    Cancel,
    /// Move the assignment's due date.
    RescheduleDueDate {
        /// The new due date.
        due_date: DateTime<Utc>,
    },
}

impl WorkflowCommand {
    /// Returns the transition kind this command performs.
    #[must_use]
    pub const fn kind(&self) -> TransitionKind {
        match self {
            Self::ForwardToUnit => TransitionKind::ForwardToUnit,
            Self::AssignPersonnel { .. } => TransitionKind::AssignPersonnel,
            Self::SaveProgress { .. } => TransitionKind::SaveProgress,
            Self::Resume => TransitionKind::Resume,
            Self::Submit => TransitionKind::Submit,
            Self::UnitReview => TransitionKind::UnitReview,
            Self::SectionReview => TransitionKind::SectionReview,
            Self::Approve => TransitionKind::Approve,
            Self::ReturnForRevision { .. } => TransitionKind::ReturnForRevision,
            Self::Cancel => TransitionKind::Cancel,
            Self::RescheduleDueDate { .. } => TransitionKind::RescheduleDueDate,
        }
    }
}
