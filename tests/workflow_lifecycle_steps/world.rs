//! Shared world state for inspection workflow BDD scenarios.

use std::sync::Arc;

use lawin::assignment::{adapters::memory::InMemoryAssignmentRegistry, domain::AssignmentId};
use lawin::personnel::{adapters::memory::InMemoryPersonnelDirectory, domain::PersonnelId};
use lawin::workflow::{
    adapters::memory::InMemoryAuditLog,
    domain::{Principal, Role, WorkflowError},
    services::{ExecuteOutcome, TransitionEngine, WorkloadBalancer},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Engine type used by the BDD world.
pub type TestEngine = TransitionEngine<
    InMemoryAssignmentRegistry,
    InMemoryPersonnelDirectory,
    InMemoryAuditLog,
    DefaultClock,
>;

/// Scenario world for inspection workflow behaviour tests.
pub struct WorkflowWorld {
    pub registry: Arc<InMemoryAssignmentRegistry>,
    pub directory: Arc<InMemoryPersonnelDirectory>,
    pub engine: Arc<TestEngine>,
    pub inspector_id: Option<PersonnelId>,
    pub assignment_id: Option<AssignmentId>,
    pub last_result: Option<Result<ExecuteOutcome, WorkflowError>>,
}

impl WorkflowWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let registry = Arc::new(InMemoryAssignmentRegistry::new());
        let directory = Arc::new(InMemoryPersonnelDirectory::new());
        let engine = Arc::new(TransitionEngine::new(
            Arc::clone(&registry),
            WorkloadBalancer::new(Arc::clone(&directory)),
            Arc::new(InMemoryAuditLog::new()),
            Arc::new(DefaultClock),
        ));
        Self {
            registry,
            directory,
            engine,
            inspector_id: None,
            assignment_id: None,
            last_result: None,
        }
    }
}

impl Default for WorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WorkflowWorld {
    WorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// The division chief creating assignments in scenarios.
#[must_use]
pub fn division_chief() -> Principal {
    Principal::new("Elena Cruz", Role::DivisionChief)
}

/// The section chief forwarding and reviewing in scenarios.
#[must_use]
pub fn section_chief() -> Principal {
    Principal::new("Ramon Dizon", Role::SectionChief)
}

/// The unit head assigning and reviewing in scenarios.
#[must_use]
pub fn unit_head() -> Principal {
    Principal::new("Liza Navarro", Role::UnitHead)
}

/// The monitoring personnel filling in the form in scenarios.
#[must_use]
pub fn inspector() -> Principal {
    Principal::new("Maria Santos", Role::MonitoringPersonnel)
}
