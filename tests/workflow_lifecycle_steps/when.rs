//! When steps for inspection workflow BDD scenarios.

use super::world::{WorkflowWorld, inspector, run_async, section_chief, unit_head};
use lawin::assignment::domain::FormSection;
use lawin::workflow::domain::WorkflowCommand;
use rstest_bdd_macros::when;

#[when("the unit head assigns the inspector")]
fn unit_head_assigns(world: &mut WorkflowWorld) -> Result<(), eyre::Report> {
    let assignment_id = world
        .assignment_id
        .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))?;
    let personnel_id = world
        .inspector_id
        .ok_or_else(|| eyre::eyre!("missing inspector in scenario world"))?;

    let result = run_async(world.engine.execute(
        &unit_head(),
        assignment_id,
        WorkflowCommand::AssignPersonnel { personnel_id },
    ));
    world.last_result = Some(result);
    Ok(())
}

#[when("the monitoring personnel forwards the assignment")]
fn monitoring_personnel_forwards(world: &mut WorkflowWorld) -> Result<(), eyre::Report> {
    let assignment_id = world
        .assignment_id
        .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))?;

    let result = run_async(world.engine.execute(
        &inspector(),
        assignment_id,
        WorkflowCommand::ForwardToUnit,
    ));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the section chief returns it flagging "{section}" with feedback "{feedback}""#)]
fn section_chief_returns(
    world: &mut WorkflowWorld,
    section: String,
    feedback: String,
) -> Result<(), eyre::Report> {
    let assignment_id = world
        .assignment_id
        .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))?;
    let flagged = FormSection::try_from(section.as_str())
        .map_err(|err| eyre::eyre!("invalid section in scenario: {err}"))?;

    let result = run_async(world.engine.execute(
        &section_chief(),
        assignment_id,
        WorkflowCommand::ReturnForRevision {
            feedback,
            sections: vec![flagged],
        },
    ));
    world.last_result = Some(result);
    Ok(())
}
