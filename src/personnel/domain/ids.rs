//! Identifier and validated scalar types for the personnel domain.

use super::PersonnelDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a personnel record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonnelId(Uuid);

impl PersonnelId {
    /// Creates a new random personnel identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a personnel identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PersonnelId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for PersonnelId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PersonnelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty display name of a reviewer or inspector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonnelName(String);

impl PersonnelName {
    /// Creates a validated personnel name.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelDomainError::EmptyPersonnelName`] if the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PersonnelDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PersonnelDomainError::EmptyPersonnelName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonnelName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PersonnelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
