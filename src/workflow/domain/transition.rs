//! Transition kinds recognised by the capability table.

use serde::{Deserialize, Serialize};

/// The kind of workflow action a command performs.
///
/// Kinds are what the capability table grants to roles. A role either may
/// invoke a kind or it may not; whether the kind applies in the
/// assignment's current state is a separate question answered by the
/// lifecycle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Create a new assignment.
    Create,
    /// Forward a created assignment to a monitoring unit.
    ForwardToUnit,
    /// Hand a forwarded assignment to a monitoring personnel.
    AssignPersonnel,
    /// Record a form save by the monitoring personnel.
    SaveProgress,
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
    /// Return reviewed work to the personnel for revision.
    ReturnForRevision,
    /// Cancel the assignment.
    Cancel,
    /// Move the assignment's due date.
    RescheduleDueDate,
}

impl TransitionKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::ForwardToUnit => "forward_to_unit",
            Self::AssignPersonnel => "assign_personnel",
            Self::SaveProgress => "save_progress",
            Self::Resume => "resume",
            Self::Submit => "submit",
            Self::UnitReview => "unit_review",
            Self::SectionReview => "section_review",
            Self::Approve => "approve",
            Self::ReturnForRevision => "return_for_revision",
            Self::Cancel => "cancel",
            Self::RescheduleDueDate => "reschedule_due_date",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
