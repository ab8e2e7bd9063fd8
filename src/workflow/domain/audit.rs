//! Audit record appended for every applied transition.

use super::{Role, TransitionKind};
use crate::assignment::domain::{AssignmentId, AssignmentState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One applied transition in the audit trail.
///
/// Entries are append-only and recorded after the assignment change has
/// been persisted. A return while already returned records equal `from`
/// and `to` states; due-date reschedules do the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The assignment the transition was applied to.
    pub assignment_id: AssignmentId,
    /// Audit label of the acting principal.
    pub actor: String,
    /// Role the actor held at the time.
    pub role: Role,
    /// The transition kind that was applied.
    pub kind: TransitionKind,
    /// State before the transition.
    pub from: AssignmentState,
    /// State after the transition.
    pub to: AssignmentState,
    /// When the transition was applied.
    pub recorded_at: DateTime<Utc>,
}
