//! Role capability table and transition applicability queries.

use super::{Role, TransitionKind};
use crate::assignment::domain::AssignmentState;

/// Returns the transition kinds a role may ever invoke.
///
/// The grants are state-independent. An actor whose role lacks a kind is
/// rejected with an authorization error before the assignment's state is
/// even consulted; an actor whose role holds the kind but invokes it in the
/// wrong state is rejected by the lifecycle instead.
#[must_use]
pub const fn granted_transitions(role: Role) -> &'static [TransitionKind] {
    match role {
        Role::Admin => &[
            TransitionKind::Create,
            TransitionKind::ForwardToUnit,
            TransitionKind::Cancel,
            TransitionKind::RescheduleDueDate,
        ],
        Role::DivisionChief => &[
            TransitionKind::Create,
            TransitionKind::Approve,
            TransitionKind::ReturnForRevision,
        ],
        Role::SectionChief => &[
            TransitionKind::ForwardToUnit,
            TransitionKind::SectionReview,
            TransitionKind::ReturnForRevision,
        ],
        Role::UnitHead => &[
            TransitionKind::AssignPersonnel,
            TransitionKind::UnitReview,
            TransitionKind::ReturnForRevision,
        ],
        Role::MonitoringPersonnel => &[
            TransitionKind::SaveProgress,
            TransitionKind::Resume,
            TransitionKind::Submit,
        ],
    }
}

/// Returns whether the role may ever invoke the given transition kind.
#[must_use]
pub fn role_may_invoke(role: Role, kind: TransitionKind) -> bool {
    granted_transitions(role).contains(&kind)
}

/// Returns whether a transition kind is applicable from the given state.
#[must_use]
pub const fn kind_applies_in(state: AssignmentState, kind: TransitionKind) -> bool {
    match kind {
        // Creation has no source state.
        TransitionKind::Create => false,
        TransitionKind::ForwardToUnit => {
            state.can_transition_to(AssignmentState::ForwardedToUnit)
        }
        TransitionKind::AssignPersonnel => {
            state.can_transition_to(AssignmentState::AssignedToPersonnel)
        }
        TransitionKind::SaveProgress => matches!(
            state,
            AssignmentState::AssignedToPersonnel
                | AssignmentState::InProgress
                | AssignmentState::ReturnedForRevision
        ),
        TransitionKind::Resume => matches!(state, AssignmentState::ReturnedForRevision),
        TransitionKind::Submit => state.can_transition_to(AssignmentState::Submitted),
        TransitionKind::UnitReview => state.can_transition_to(AssignmentState::UnitReviewed),
        TransitionKind::SectionReview => {
            state.can_transition_to(AssignmentState::SectionReviewed)
        }
        TransitionKind::Approve => state.can_transition_to(AssignmentState::Approved),
        TransitionKind::ReturnForRevision => state.is_review_state(),
        TransitionKind::Cancel | TransitionKind::RescheduleDueDate => !state.is_terminal(),
    }
}

/// Returns whether the role may invoke the kind from the given state.
///
/// Conjunction of the capability grant and lifecycle applicability; this is
/// the query behind "which buttons does this actor see".
#[must_use]
pub fn can_transition(role: Role, state: AssignmentState, kind: TransitionKind) -> bool {
    role_may_invoke(role, kind) && kind_applies_in(state, kind)
}
