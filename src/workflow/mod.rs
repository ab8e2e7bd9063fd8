//! Workflow bounded context.
//!
//! Owns who may do what to an assignment: the role capability table, the
//! transition engine that applies commands against the assignment lifecycle,
//! workload-aware personnel assignment, the return-for-revision loop, bulk
//! command application, and the audit trail of applied transitions.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
