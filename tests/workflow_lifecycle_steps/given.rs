//! Given steps for inspection workflow BDD scenarios.

use super::world::{WorkflowWorld, division_chief, inspector, run_async, section_chief, unit_head};
use eyre::WrapErr;
use lawin::assignment::domain::{ApplicableLaw, CompletionPercentage, Priority};
use lawin::personnel::{
    domain::{PersistedPersonnelData, Personnel, PersonnelId, PersonnelName, Specialization},
    ports::PersonnelDirectory,
};
use lawin::workflow::{domain::WorkflowCommand, services::CreateAssignmentRequest};
use rstest_bdd_macros::given;

#[given("an air quality inspector with workload {workload:u32} of capacity {capacity:u32}")]
fn air_quality_inspector(
    world: &mut WorkflowWorld,
    workload: u32,
    capacity: u32,
) -> Result<(), eyre::Report> {
    let person = Personnel::from_persisted(PersistedPersonnelData {
        id: PersonnelId::new(),
        name: PersonnelName::new("Maria Santos")?,
        specialization: Specialization::AirQuality,
        workload,
        max_capacity: capacity,
    });
    run_async(world.directory.store(&person)).wrap_err("store inspector in scenario setup")?;
    world.inspector_id = Some(person.id());
    Ok(())
}

#[given("a clean air assignment forwarded to the unit")]
fn forwarded_assignment(world: &mut WorkflowWorld) -> Result<(), eyre::Report> {
    let created = run_async(world.engine.create(
        &division_chief(),
        CreateAssignmentRequest::new(
            "est-1042",
            "ABC Manufacturing Corp",
            ApplicableLaw::CleanAirAct,
        )
        .with_address("123 Industrial Ave, Quezon City")
        .with_category("Manufacturing")
        .with_priority(Priority::High),
    ))
    .wrap_err("create assignment in scenario setup")?;
    run_async(
        world
            .engine
            .execute(&section_chief(), created.id(), WorkflowCommand::ForwardToUnit),
    )
    .wrap_err("forward assignment in scenario setup")?;
    world.assignment_id = Some(created.id());
    Ok(())
}

#[given("the assignment has been submitted and unit reviewed")]
fn submitted_and_unit_reviewed(world: &mut WorkflowWorld) -> Result<(), eyre::Report> {
    let assignment_id = world
        .assignment_id
        .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))?;
    let personnel_id = world
        .inspector_id
        .ok_or_else(|| eyre::eyre!("missing inspector in scenario world"))?;

    run_async(world.engine.execute(
        &unit_head(),
        assignment_id,
        WorkflowCommand::AssignPersonnel { personnel_id },
    ))
    .wrap_err("assign inspector in scenario setup")?;
    run_async(world.engine.execute(
        &inspector(),
        assignment_id,
        WorkflowCommand::SaveProgress {
            completion: CompletionPercentage::COMPLETE,
            content: None,
        },
    ))
    .wrap_err("complete form in scenario setup")?;
    run_async(
        world
            .engine
            .execute(&inspector(), assignment_id, WorkflowCommand::Submit),
    )
    .wrap_err("submit in scenario setup")?;
    run_async(
        world
            .engine
            .execute(&unit_head(), assignment_id, WorkflowCommand::UnitReview),
    )
    .wrap_err("unit review in scenario setup")?;
    Ok(())
}
