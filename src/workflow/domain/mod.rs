//! Domain model for the workflow context.

mod audit;
pub mod capability;
mod command;
mod error;
mod role;
mod transition;

pub use audit::AuditEntry;
pub use command::WorkflowCommand;
pub use error::WorkflowError;
pub use role::{ParseRoleError, Principal, Role};
pub use transition::TransitionKind;
