//! In-memory personnel directory for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::personnel::{
    domain::{Personnel, PersonnelId, Specialization},
    ports::{PersonnelDirectory, PersonnelDirectoryError, PersonnelDirectoryResult},
};

/// Thread-safe in-memory personnel directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonnelDirectory {
    state: Arc<RwLock<HashMap<PersonnelId, Personnel>>>,
}

impl InMemoryPersonnelDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonnelDirectory for InMemoryPersonnelDirectory {
    async fn store(&self, personnel: &Personnel) -> PersonnelDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PersonnelDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&personnel.id()) {
            return Err(PersonnelDirectoryError::DuplicatePersonnel(personnel.id()));
        }
        state.insert(personnel.id(), personnel.clone());
        Ok(())
    }

    async fn update(&self, personnel: &Personnel) -> PersonnelDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PersonnelDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&personnel.id()) {
            return Err(PersonnelDirectoryError::NotFound(personnel.id()));
        }
        state.insert(personnel.id(), personnel.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PersonnelId) -> PersonnelDirectoryResult<Option<Personnel>> {
        let state = self.state.read().map_err(|err| {
            PersonnelDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_by_specialization(
        &self,
        specialization: Specialization,
    ) -> PersonnelDirectoryResult<Vec<Personnel>> {
        let state = self.state.read().map_err(|err| {
            PersonnelDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut matching: Vec<Personnel> = state
            .values()
            .filter(|person| person.specialization() == specialization)
            .cloned()
            .collect();
        matching.sort_by_key(|person| (person.workload(), person.id()));
        Ok(matching)
    }
}
