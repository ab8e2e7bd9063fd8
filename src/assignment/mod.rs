//! Inspection assignment registry and the canonical lifecycle.
//!
//! An assignment binds one inspection task to one establishment and tracks it
//! through the review hierarchy: created, forwarded to a monitoring unit,
//! assigned to personnel, executed, submitted, reviewed upward, and either
//! approved or returned for revision. All mutation is funnelled through the
//! workflow transition engine; the registry only guarantees atomic
//! read-modify-write per assignment via optimistic versioning. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
