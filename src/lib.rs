//! Lawin: inspection assignment and multi-role review workflow core.
//!
//! This crate tracks environmental-compliance inspections of establishments
//! through a government review hierarchy. An inspection assignment is
//! created, forwarded Division Chief → Section Chief → Unit Head →
//! Monitoring Personnel, executed, and reviewed back up the chain, with
//! returns-for-revision cycling the task downward carrying targeted edit
//! flags, and with workload-aware personnel assignment.
//!
//! # Architecture
//!
//! Lawin follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`personnel`]: Personnel directory with specialization and workload
//! - [`assignment`]: Assignment registry and the canonical lifecycle
//! - [`workflow`]: Role capabilities, transition engine, workload balancer,
//!   revision loop, and bulk operations

pub mod assignment;
pub mod personnel;
pub mod workflow;
