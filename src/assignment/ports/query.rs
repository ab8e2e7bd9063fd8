//! Filter and sort model for assignment listings.

use crate::assignment::domain::{Assignment, AssignmentState, Priority};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conjunction of optional predicates applied to an assignment listing.
///
/// Every set field must match for a record to pass. The search term matches
/// case-insensitively as a substring of the establishment name, the
/// establishment address, or the assigned personnel's display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentFilter {
    search_term: Option<String>,
    state: Option<AssignmentState>,
    priority: Option<Priority>,
    category: Option<String>,
}

impl AssignmentFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Restricts the listing to one lifecycle state.
    #[must_use]
    pub const fn with_state(mut self, state: AssignmentState) -> Self {
        self.state = Some(state);
        self
    }

    /// Restricts the listing to one priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts the listing to one classification category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Evaluates the filter against an assignment.
    #[must_use]
    pub fn matches(&self, assignment: &Assignment) -> bool {
        if let Some(state) = self.state
            && assignment.state() != state
        {
            return false;
        }
        if let Some(priority) = self.priority
            && assignment.priority() != priority
        {
            return false;
        }
        if let Some(category) = self.category.as_deref()
            && !assignment.category().eq_ignore_ascii_case(category)
        {
            return false;
        }
        if let Some(term) = self.search_term.as_deref() {
            let needle = term.to_lowercase();
            let establishment = assignment.establishment();
            let personnel_name = assignment
                .assigned_personnel()
                .map(|assignee| assignee.name().as_str().to_lowercase());
            let matches_term = establishment.name().to_lowercase().contains(&needle)
                || establishment.address().to_lowercase().contains(&needle)
                || personnel_name.is_some_and(|name| name.contains(&needle));
            if !matches_term {
                return false;
            }
        }
        true
    }
}

/// Field an assignment listing may be sorted by.
///
/// Parsed from the dotted paths role views send, e.g. `establishment.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Establishment display name, case-insensitive.
    EstablishmentName,
    /// Establishment address, case-insensitive.
    EstablishmentAddress,
    /// Priority level, low to urgent.
    Priority,
    /// Lifecycle state, in pipeline order.
    State,
    /// Date personnel were assigned; unassigned records sort first.
    AssignedDate,
    /// Due date; records without one sort first.
    DueDate,
    /// Latest lifecycle timestamp.
    LastUpdated,
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "establishment.name" => Ok(Self::EstablishmentName),
            "establishment.address" => Ok(Self::EstablishmentAddress),
            "priority" => Ok(Self::Priority),
            "state" => Ok(Self::State),
            "assigned_date" => Ok(Self::AssignedDate),
            "due_date" => Ok(Self::DueDate),
            "last_updated" => Ok(Self::LastUpdated),
            _ => Err(ParseSortFieldError(value.to_owned())),
        }
    }
}

/// Sort direction, toggled per call by the role views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// A sort request: one field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to order by.
    pub field: SortField,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort specification.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Error returned while parsing a dotted sort-field path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct ParseSortFieldError(pub String);
