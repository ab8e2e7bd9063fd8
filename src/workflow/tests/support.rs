//! Shared fixtures for workflow tests.

use std::sync::Arc;

use crate::assignment::adapters::memory::InMemoryAssignmentRegistry;
use crate::assignment::domain::{ApplicableLaw, AssignmentId, CompletionPercentage, Priority};
use crate::personnel::adapters::memory::InMemoryPersonnelDirectory;
use crate::personnel::domain::{
    PersistedPersonnelData, Personnel, PersonnelId, PersonnelName, Specialization,
};
use crate::personnel::ports::PersonnelDirectory;
use crate::workflow::adapters::memory::InMemoryAuditLog;
use crate::workflow::domain::{Principal, Role, WorkflowCommand};
use crate::workflow::services::{CreateAssignmentRequest, TransitionEngine, WorkloadBalancer};
use mockable::DefaultClock;
use rstest::fixture;

/// Engine type used throughout the workflow tests.
pub type TestEngine = TransitionEngine<
    InMemoryAssignmentRegistry,
    InMemoryPersonnelDirectory,
    InMemoryAuditLog,
    DefaultClock,
>;

/// In-memory ports plus the engine wired over them.
pub struct Harness {
    pub directory: Arc<InMemoryPersonnelDirectory>,
    pub registry: Arc<InMemoryAssignmentRegistry>,
    pub audit: Arc<InMemoryAuditLog>,
    pub engine: Arc<TestEngine>,
}

#[fixture]
pub fn harness() -> Harness {
    let directory = Arc::new(InMemoryPersonnelDirectory::new());
    let registry = Arc::new(InMemoryAssignmentRegistry::new());
    let audit = Arc::new(InMemoryAuditLog::new());
    let engine = Arc::new(TransitionEngine::new(
        Arc::clone(&registry),
        WorkloadBalancer::new(Arc::clone(&directory)),
        Arc::clone(&audit),
        Arc::new(DefaultClock),
    ));
    Harness {
        directory,
        registry,
        audit,
        engine,
    }
}

pub fn admin() -> Principal {
    Principal::new("ops-admin", Role::Admin)
}

pub fn division_chief() -> Principal {
    Principal::new("Elena Cruz", Role::DivisionChief)
}

pub fn section_chief() -> Principal {
    Principal::new("Ramon Dizon", Role::SectionChief)
}

pub fn unit_head() -> Principal {
    Principal::new("Liza Navarro", Role::UnitHead)
}

pub fn inspector() -> Principal {
    Principal::new("Maria Santos", Role::MonitoringPersonnel)
}

/// Stores a fresh personnel record and returns its identifier.
pub async fn seed_personnel(
    harness: &Harness,
    name: &str,
    specialization: Specialization,
    max_capacity: u32,
) -> Result<PersonnelId, eyre::Report> {
    let person = Personnel::new(
        PersonnelId::new(),
        PersonnelName::new(name)?,
        specialization,
        max_capacity,
    )?;
    harness.directory.store(&person).await?;
    Ok(person.id())
}

/// Stores a personnel record already carrying the given workload.
pub async fn seed_loaded_personnel(
    harness: &Harness,
    name: &str,
    specialization: Specialization,
    workload: u32,
    max_capacity: u32,
) -> Result<PersonnelId, eyre::Report> {
    let person = Personnel::from_persisted(PersistedPersonnelData {
        id: PersonnelId::new(),
        name: PersonnelName::new(name)?,
        specialization,
        workload,
        max_capacity,
    });
    harness.directory.store(&person).await?;
    Ok(person.id())
}

/// Creates a high-priority clean-air assignment through the engine.
pub async fn create_air_assignment(harness: &Harness) -> Result<AssignmentId, eyre::Report> {
    let created = harness
        .engine
        .create(
            &division_chief(),
            CreateAssignmentRequest::new(
                "est-1042",
                "ABC Manufacturing Corp",
                ApplicableLaw::CleanAirAct,
            )
            .with_address("123 Industrial Ave, Quezon City")
            .with_category("Manufacturing")
            .with_priority(Priority::High),
        )
        .await?;
    Ok(created.id())
}

/// Drives a created assignment through forwarding and personnel assignment.
pub async fn assign_to(
    harness: &Harness,
    assignment_id: AssignmentId,
    personnel_id: PersonnelId,
) -> Result<(), eyre::Report> {
    harness
        .engine
        .execute(&section_chief(), assignment_id, WorkflowCommand::ForwardToUnit)
        .await?;
    harness
        .engine
        .execute(
            &unit_head(),
            assignment_id,
            WorkflowCommand::AssignPersonnel { personnel_id },
        )
        .await?;
    Ok(())
}

/// Drives an assigned assignment to the unit-reviewed state.
pub async fn submit_and_unit_review(
    harness: &Harness,
    assignment_id: AssignmentId,
) -> Result<(), eyre::Report> {
    harness
        .engine
        .execute(
            &inspector(),
            assignment_id,
            WorkflowCommand::SaveProgress {
                completion: CompletionPercentage::COMPLETE,
                content: None,
            },
        )
        .await?;
    harness
        .engine
        .execute(&inspector(), assignment_id, WorkflowCommand::Submit)
        .await?;
    harness
        .engine
        .execute(&unit_head(), assignment_id, WorkflowCommand::UnitReview)
        .await?;
    Ok(())
}

/// Fetches the current workload for a personnel record.
pub async fn workload_of(
    harness: &Harness,
    personnel_id: PersonnelId,
) -> Result<u32, eyre::Report> {
    let person = harness
        .directory
        .find_by_id(personnel_id)
        .await?
        .ok_or_else(|| eyre::eyre!("personnel record missing from directory"))?;
    Ok(person.workload())
}
