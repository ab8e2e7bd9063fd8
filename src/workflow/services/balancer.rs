//! Workload-aware personnel selection and open-assignment accounting.

use crate::assignment::domain::ApplicableLaw;
use crate::personnel::domain::{CapacityWarning, Personnel, PersonnelId};
use crate::personnel::ports::PersonnelDirectory;
use crate::workflow::domain::WorkflowError;
use std::sync::Arc;

/// Workload-aware assignment helper shared by the transition engine.
///
/// Eligibility is a hard gate keyed on the applicable law's required
/// specialization. Capacity is soft: assigning past `max_capacity` is
/// allowed and surfaces a [`CapacityWarning`] instead of failing.
pub struct WorkloadBalancer<P> {
    directory: Arc<P>,
}

impl<P> WorkloadBalancer<P>
where
    P: PersonnelDirectory,
{
    /// Creates a balancer over the given directory.
    #[must_use]
    pub const fn new(directory: Arc<P>) -> Self {
        Self { directory }
    }

    /// Loads a personnel record and verifies eligibility for the law.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PersonnelNotFound`] when the record does not
    /// exist, or [`WorkflowError::IneligiblePersonnel`] when the person's
    /// specialization does not cover the law.
    pub async fn eligible_for(
        &self,
        law: ApplicableLaw,
        personnel_id: PersonnelId,
    ) -> Result<Personnel, WorkflowError> {
        let person = self
            .directory
            .find_by_id(personnel_id)
            .await?
            .ok_or(WorkflowError::PersonnelNotFound(personnel_id))?;
        let required = law.required_specialization();
        if person.specialization() != required {
            return Err(WorkflowError::IneligiblePersonnel {
                personnel_id,
                required,
                held: person.specialization(),
            });
        }
        Ok(person)
    }

    /// Returns eligible personnel for the law, least loaded first.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Transient`] when the directory fails.
    pub async fn candidates_for(&self, law: ApplicableLaw) -> Result<Vec<Personnel>, WorkflowError> {
        let candidates = self
            .directory
            .list_by_specialization(law.required_specialization())
            .await?;
        Ok(candidates)
    }

    /// Recommends the least-loaded eligible person for the law.
    ///
    /// Prefers someone under capacity; falls back to the least loaded
    /// overall when the whole pool is saturated. Returns `None` when no one
    /// holds the required specialization.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Transient`] when the directory fails.
    pub async fn recommend_for(
        &self,
        law: ApplicableLaw,
    ) -> Result<Option<Personnel>, WorkflowError> {
        let candidates = self.candidates_for(law).await?;
        let pick = candidates
            .iter()
            .find(|person| !person.at_capacity())
            .or_else(|| candidates.first())
            .cloned();
        Ok(pick)
    }

    /// Counts one more open assignment against the person.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PersonnelNotFound`] when the record does not
    /// exist, or [`WorkflowError::Transient`] when the directory fails.
    pub async fn record_assignment(
        &self,
        personnel_id: PersonnelId,
    ) -> Result<Option<CapacityWarning>, WorkflowError> {
        let mut person = self
            .directory
            .find_by_id(personnel_id)
            .await?
            .ok_or(WorkflowError::PersonnelNotFound(personnel_id))?;
        let warning = person.record_assignment();
        self.directory.update(&person).await?;
        if let Some(capacity) = warning {
            tracing::warn!(
                personnel_id = %personnel_id,
                workload = capacity.workload,
                max_capacity = capacity.max_capacity,
                "assignment pushed personnel past capacity"
            );
        }
        Ok(warning)
    }

    /// Releases one open assignment held by the person.
    ///
    /// A release against a zero workload indicates the counter already
    /// drifted; it is logged and the workload stays at zero rather than
    /// failing the surrounding transition.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PersonnelNotFound`] when the record does not
    /// exist, or [`WorkflowError::Transient`] when the directory fails.
    pub async fn release_assignment(&self, personnel_id: PersonnelId) -> Result<(), WorkflowError> {
        let mut person = self
            .directory
            .find_by_id(personnel_id)
            .await?
            .ok_or(WorkflowError::PersonnelNotFound(personnel_id))?;
        match person.release_assignment() {
            Ok(()) => self.directory.update(&person).await?,
            Err(err) => {
                tracing::warn!(personnel_id = %personnel_id, "workload release skipped: {err}");
            }
        }
        Ok(())
    }
}
