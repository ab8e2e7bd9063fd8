//! Error types for personnel domain validation and parsing.

use super::PersonnelId;
use thiserror::Error;

/// Errors returned while constructing or mutating personnel domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonnelDomainError {
    /// The personnel display name is empty after trimming.
    #[error("personnel name must not be empty")]
    EmptyPersonnelName,

    /// The capacity limit is zero, which would make the person unassignable.
    #[error("personnel capacity must be at least one open assignment")]
    ZeroCapacity,

    /// A workload release was requested with no open assignments recorded.
    #[error("workload underflow for personnel {0}: no open assignments to release")]
    WorkloadUnderflow(PersonnelId),
}

/// Error returned while parsing specialization tags from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown specialization: {0}")]
pub struct ParseSpecializationError(pub String);
