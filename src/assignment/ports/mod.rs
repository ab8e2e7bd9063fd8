//! Port contracts for the assignment registry.
//!
//! Ports define infrastructure-agnostic interfaces used by workflow services.

pub mod query;
pub mod registry;

pub use query::{AssignmentFilter, ParseSortFieldError, SortDirection, SortField, SortSpec};
pub use registry::{AssignmentRegistry, AssignmentRegistryError, AssignmentRegistryResult};
