//! Domain model for the personnel directory.
//!
//! The personnel domain models reviewer identity, specialization eligibility,
//! and workload accounting while keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod person;

pub use error::{ParseSpecializationError, PersonnelDomainError};
pub use ids::{PersonnelId, PersonnelName};
pub use person::{CapacityWarning, PersistedPersonnelData, Personnel, Specialization};
