//! Actor roles and the principal invoking workflow commands.

use crate::assignment::domain::ReviewerRole;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role held by an actor in the review hierarchy.
///
/// Capability is keyed purely on the role; which transitions a role may
/// invoke is fixed by [`capability::granted_transitions`] and does not vary
/// with the assignment's state.
///
/// [`capability::granted_transitions`]: super::capability::granted_transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Operational administrator; may cancel and reschedule.
    Admin,
    /// Division chief; creates assignments and gives final approval.
    DivisionChief,
    /// Section chief; forwards work to units and reviews unit endorsements.
    SectionChief,
    /// Unit head; assigns personnel and reviews submitted work.
    UnitHead,
    /// Monitoring personnel; fills in and submits the inspection form.
    MonitoringPersonnel,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::DivisionChief => "division_chief",
            Self::SectionChief => "section_chief",
            Self::UnitHead => "unit_head",
            Self::MonitoringPersonnel => "monitoring_personnel",
        }
    }

    /// Maps the role to its reviewer level, when it has one.
    ///
    /// Only reviewer-level roles may attach revision feedback.
    #[must_use]
    pub const fn reviewer_role(self) -> Option<ReviewerRole> {
        match self {
            Self::DivisionChief => Some(ReviewerRole::DivisionChief),
            Self::SectionChief => Some(ReviewerRole::SectionChief),
            Self::UnitHead => Some(ReviewerRole::UnitHead),
            Self::Admin | Self::MonitoringPersonnel => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "division_chief" => Ok(Self::DivisionChief),
            "section_chief" => Ok(Self::SectionChief),
            "unit_head" => Ok(Self::UnitHead),
            "monitoring_personnel" => Ok(Self::MonitoringPersonnel),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned while parsing roles from persistence or request input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// The authenticated actor invoking a workflow command.
///
/// Identity management is external; the workflow only needs an audit label
/// and the role the caller holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    actor: String,
    role: Role,
}

impl Principal {
    /// Creates a principal with the given audit label and role.
    #[must_use]
    pub fn new(actor: impl Into<String>, role: Role) -> Self {
        Self {
            actor: actor.into(),
            role,
        }
    }

    /// Returns the audit label.
    #[must_use]
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Returns the role held by the actor.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
