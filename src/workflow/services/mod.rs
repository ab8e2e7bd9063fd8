//! Workflow orchestration services.

mod balancer;
mod bulk;
mod engine;
mod revision;

pub use balancer::WorkloadBalancer;
pub use bulk::{BulkCoordinator, BulkOutcome};
pub use engine::{CreateAssignmentRequest, ExecuteOutcome, TransitionEngine};
pub use revision::{ResumePacket, RevisionService};
