//! In-memory assignment registry for tests and single-process deployments.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{Assignment, AssignmentId},
    ports::{
        AssignmentFilter, AssignmentRegistry, AssignmentRegistryError, AssignmentRegistryResult,
        SortDirection, SortField, SortSpec,
    },
};
use crate::personnel::domain::PersonnelId;

/// Thread-safe in-memory assignment registry with optimistic versioning.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRegistry {
    state: Arc<RwLock<HashMap<AssignmentId, Assignment>>>,
}

impl InMemoryAssignmentRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compares two assignments on the requested sort field.
fn compare_on(field: SortField, a: &Assignment, b: &Assignment) -> Ordering {
    match field {
        SortField::EstablishmentName => a
            .establishment()
            .name()
            .to_lowercase()
            .cmp(&b.establishment().name().to_lowercase()),
        SortField::EstablishmentAddress => a
            .establishment()
            .address()
            .to_lowercase()
            .cmp(&b.establishment().address().to_lowercase()),
        SortField::Priority => a.priority().cmp(&b.priority()),
        SortField::State => a.state().cmp(&b.state()),
        SortField::AssignedDate => a.assigned_date().cmp(&b.assigned_date()),
        SortField::DueDate => a.due_date().cmp(&b.due_date()),
        SortField::LastUpdated => a.last_updated().cmp(&b.last_updated()),
    }
}

#[async_trait]
impl AssignmentRegistry for InMemoryAssignmentRegistry {
    async fn store(&self, assignment: &Assignment) -> AssignmentRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AssignmentRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&assignment.id()) {
            return Err(AssignmentRegistryError::DuplicateAssignment(
                assignment.id(),
            ));
        }
        state.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn update(&self, assignment: &Assignment) -> AssignmentRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AssignmentRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .get(&assignment.id())
            .ok_or(AssignmentRegistryError::NotFound(assignment.id()))?;

        let expected = stored.version().saturating_add(1);
        if assignment.version() != expected {
            return Err(AssignmentRegistryError::StaleVersion {
                assignment_id: assignment.id(),
                expected,
                found: assignment.version(),
            });
        }
        state.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AssignmentId) -> AssignmentRegistryResult<Option<Assignment>> {
        let state = self.state.read().map_err(|err| {
            AssignmentRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &AssignmentFilter,
        sort: Option<SortSpec>,
    ) -> AssignmentRegistryResult<Vec<Assignment>> {
        let state = self.state.read().map_err(|err| {
            AssignmentRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut listing: Vec<Assignment> = state
            .values()
            .filter(|assignment| filter.matches(assignment))
            .cloned()
            .collect();

        match sort {
            Some(spec) => listing.sort_by(|a, b| {
                let ordering = compare_on(spec.field, a, b);
                let directed = match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                };
                // Ties break by ascending id regardless of direction.
                directed.then_with(|| a.id().cmp(&b.id()))
            }),
            None => listing.sort_by_key(Assignment::id),
        }
        Ok(listing)
    }

    async fn list_by_personnel(
        &self,
        personnel_id: PersonnelId,
    ) -> AssignmentRegistryResult<Vec<Assignment>> {
        let state = self.state.read().map_err(|err| {
            AssignmentRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut holding: Vec<Assignment> = state
            .values()
            .filter(|assignment| {
                assignment
                    .assigned_personnel()
                    .is_some_and(|assignee| assignee.id() == personnel_id)
            })
            .cloned()
            .collect();
        holding.sort_by_key(Assignment::id);
        Ok(holding)
    }
}
