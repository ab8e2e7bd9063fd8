//! Tests for the role capability table and transition applicability.

use crate::assignment::domain::AssignmentState;
use crate::workflow::domain::capability::{
    can_transition, granted_transitions, kind_applies_in, role_may_invoke,
};
use crate::workflow::domain::{ParseRoleError, Role, TransitionKind};
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[case(
    Role::Admin,
    &[
        TransitionKind::Create,
        TransitionKind::ForwardToUnit,
        TransitionKind::Cancel,
        TransitionKind::RescheduleDueDate
    ]
)]
#[case(
    Role::DivisionChief,
    &[TransitionKind::Create, TransitionKind::Approve, TransitionKind::ReturnForRevision]
)]
#[case(
    Role::SectionChief,
    &[
        TransitionKind::ForwardToUnit,
        TransitionKind::SectionReview,
        TransitionKind::ReturnForRevision
    ]
)]
#[case(
    Role::UnitHead,
    &[
        TransitionKind::AssignPersonnel,
        TransitionKind::UnitReview,
        TransitionKind::ReturnForRevision
    ]
)]
#[case(
    Role::MonitoringPersonnel,
    &[TransitionKind::SaveProgress, TransitionKind::Resume, TransitionKind::Submit]
)]
fn each_role_holds_its_fixed_grants(
    #[case] role: Role,
    #[case] expected: &[TransitionKind],
) -> eyre::Result<()> {
    ensure!(granted_transitions(role) == expected);
    for kind in expected {
        ensure!(role_may_invoke(role, *kind));
    }
    Ok(())
}

#[rstest]
#[case(Role::MonitoringPersonnel, TransitionKind::ForwardToUnit)]
#[case(Role::MonitoringPersonnel, TransitionKind::Approve)]
#[case(Role::SectionChief, TransitionKind::AssignPersonnel)]
#[case(Role::UnitHead, TransitionKind::Cancel)]
#[case(Role::Admin, TransitionKind::Approve)]
#[case(Role::Admin, TransitionKind::ReturnForRevision)]
#[case(Role::DivisionChief, TransitionKind::Submit)]
fn roles_never_hold_other_grants(#[case] role: Role, #[case] kind: TransitionKind) {
    assert!(!role_may_invoke(role, kind));
}

#[rstest]
#[case(AssignmentState::Created, TransitionKind::ForwardToUnit, true)]
#[case(AssignmentState::ForwardedToUnit, TransitionKind::ForwardToUnit, false)]
#[case(AssignmentState::ForwardedToUnit, TransitionKind::AssignPersonnel, true)]
#[case(AssignmentState::AssignedToPersonnel, TransitionKind::SaveProgress, true)]
#[case(AssignmentState::InProgress, TransitionKind::SaveProgress, true)]
#[case(AssignmentState::ReturnedForRevision, TransitionKind::SaveProgress, true)]
#[case(AssignmentState::ReturnedForRevision, TransitionKind::Resume, true)]
#[case(AssignmentState::InProgress, TransitionKind::Resume, false)]
#[case(AssignmentState::InProgress, TransitionKind::Submit, true)]
#[case(AssignmentState::Submitted, TransitionKind::UnitReview, true)]
#[case(AssignmentState::UnitReviewed, TransitionKind::SectionReview, true)]
#[case(AssignmentState::UnitReviewed, TransitionKind::ReturnForRevision, true)]
#[case(AssignmentState::SectionReviewed, TransitionKind::Approve, true)]
#[case(AssignmentState::SectionReviewed, TransitionKind::ReturnForRevision, true)]
#[case(AssignmentState::ReturnedForRevision, TransitionKind::ReturnForRevision, true)]
#[case(AssignmentState::ReturnedForRevision, TransitionKind::Approve, true)]
#[case(AssignmentState::Submitted, TransitionKind::ReturnForRevision, false)]
#[case(AssignmentState::Created, TransitionKind::Cancel, true)]
#[case(AssignmentState::Approved, TransitionKind::Cancel, false)]
#[case(AssignmentState::Cancelled, TransitionKind::RescheduleDueDate, false)]
#[case(AssignmentState::InProgress, TransitionKind::RescheduleDueDate, true)]
#[case(AssignmentState::Created, TransitionKind::Create, false)]
fn kind_applicability_follows_the_lifecycle(
    #[case] state: AssignmentState,
    #[case] kind: TransitionKind,
    #[case] expected: bool,
) {
    assert_eq!(kind_applies_in(state, kind), expected);
}

#[rstest]
#[case(Role::SectionChief, AssignmentState::Created, TransitionKind::ForwardToUnit, true)]
#[case(
    Role::SectionChief,
    AssignmentState::ForwardedToUnit,
    TransitionKind::ForwardToUnit,
    false
)]
#[case(
    Role::MonitoringPersonnel,
    AssignmentState::Created,
    TransitionKind::ForwardToUnit,
    false
)]
#[case(
    Role::DivisionChief,
    AssignmentState::ReturnedForRevision,
    TransitionKind::Approve,
    true
)]
#[case(Role::Admin, AssignmentState::Created, TransitionKind::ForwardToUnit, true)]
#[case(
    Role::Admin,
    AssignmentState::ForwardedToUnit,
    TransitionKind::ForwardToUnit,
    false
)]
#[case(Role::Admin, AssignmentState::InProgress, TransitionKind::Cancel, true)]
#[case(Role::Admin, AssignmentState::Approved, TransitionKind::Cancel, false)]
#[case(Role::UnitHead, AssignmentState::Submitted, TransitionKind::UnitReview, true)]
#[case(Role::UnitHead, AssignmentState::Submitted, TransitionKind::ReturnForRevision, false)]
fn can_transition_is_the_conjunction_of_grant_and_applicability(
    #[case] role: Role,
    #[case] state: AssignmentState,
    #[case] kind: TransitionKind,
    #[case] expected: bool,
) {
    assert_eq!(can_transition(role, state, kind), expected);
}

#[rstest]
fn role_storage_forms_round_trip() -> eyre::Result<()> {
    let roles = [
        Role::Admin,
        Role::DivisionChief,
        Role::SectionChief,
        Role::UnitHead,
        Role::MonitoringPersonnel,
    ];
    for role in roles {
        ensure!(Role::try_from(role.as_str()) == Ok(role));
    }
    Ok(())
}

#[rstest]
fn role_parsing_rejects_unknown_values() {
    let result = Role::try_from("intern");
    assert_eq!(result, Err(ParseRoleError("intern".to_owned())));
}
