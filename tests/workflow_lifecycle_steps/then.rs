//! Then steps for inspection workflow BDD scenarios.

use super::world::{WorkflowWorld, run_async};
use lawin::assignment::{domain::AssignmentState, ports::AssignmentRegistry};
use lawin::personnel::ports::PersonnelDirectory;
use lawin::workflow::domain::WorkflowError;
use rstest_bdd_macros::then;

#[then(r#"the assignment state is "{state}""#)]
fn assignment_state_is(world: &WorkflowWorld, state: String) -> Result<(), eyre::Report> {
    let expected = AssignmentState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let assignment_id = world
        .assignment_id
        .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))?;

    let stored = run_async(world.registry.find_by_id(assignment_id))?
        .ok_or_else(|| eyre::eyre!("assignment missing from registry"))?;
    if stored.state() != expected {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected.as_str(),
            stored.state().as_str()
        ));
    }
    Ok(())
}

#[then("the inspector workload is {expected:u32}")]
fn inspector_workload_is(world: &WorkflowWorld, expected: u32) -> Result<(), eyre::Report> {
    let personnel_id = world
        .inspector_id
        .ok_or_else(|| eyre::eyre!("missing inspector in scenario world"))?;
    let person = run_async(world.directory.find_by_id(personnel_id))?
        .ok_or_else(|| eyre::eyre!("inspector missing from directory"))?;
    if person.workload() != expected {
        return Err(eyre::eyre!(
            "expected workload {expected}, found {}",
            person.workload()
        ));
    }
    Ok(())
}

#[then("a capacity warning is raised")]
fn capacity_warning_is_raised(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing command result"))?;
    match result {
        Ok(outcome) if outcome.warning.is_some() => Ok(()),
        Ok(_) => Err(eyre::eyre!("command succeeded without a capacity warning")),
        Err(err) => Err(eyre::eyre!("expected success with warning, got {err}")),
    }
}

#[then("the command fails with an authorization error")]
fn command_fails_with_authorization(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing command result"))?;
    if !matches!(result, Err(WorkflowError::Authorization { .. })) {
        return Err(eyre::eyre!("expected Authorization error, got {result:?}"));
    }
    Ok(())
}

#[then("the feedback history has {count:usize} entries")]
fn feedback_history_has(world: &WorkflowWorld, count: usize) -> Result<(), eyre::Report> {
    let assignment_id = world
        .assignment_id
        .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))?;
    let stored = run_async(world.registry.find_by_id(assignment_id))?
        .ok_or_else(|| eyre::eyre!("assignment missing from registry"))?;
    if stored.feedback().len() != count {
        return Err(eyre::eyre!(
            "expected {count} feedback entries, found {}",
            stored.feedback().len()
        ));
    }
    Ok(())
}
