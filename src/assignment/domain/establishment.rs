//! Denormalised establishment snapshot carried by an assignment.
//!
//! Establishment data is owned by an external registry. The snapshot taken
//! at assignment-creation time is stored verbatim and never re-validated
//! against the owning system.

use super::AssignmentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External establishment identifier, opaque to this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstablishmentId(String);

impl EstablishmentId {
    /// Creates a validated establishment identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyEstablishmentId`] if the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AssignmentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AssignmentDomainError::EmptyEstablishmentId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EstablishmentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EstablishmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of establishment display fields at assignment-creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstablishmentRef {
    id: EstablishmentId,
    name: String,
    address: String,
}

impl EstablishmentRef {
    /// Creates an establishment snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyEstablishmentName`] if the
    /// display name is empty after trimming.
    pub fn new(
        id: EstablishmentId,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, AssignmentDomainError> {
        let name = name.into();
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(AssignmentDomainError::EmptyEstablishmentName);
        }
        Ok(Self {
            id,
            name: trimmed_name.to_owned(),
            address: address.into().trim().to_owned(),
        })
    }

    /// Returns the external establishment identifier.
    #[must_use]
    pub const fn id(&self) -> &EstablishmentId {
        &self.id
    }

    /// Returns the establishment display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the establishment address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}
