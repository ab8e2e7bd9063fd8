//! Port contracts for the personnel directory.
//!
//! Ports define infrastructure-agnostic interfaces used by workflow services.

pub mod directory;

pub use directory::{PersonnelDirectory, PersonnelDirectoryError, PersonnelDirectoryResult};
