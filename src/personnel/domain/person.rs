//! Personnel aggregate root and specialization taxonomy.

use super::{ParseSpecializationError, PersonnelDomainError, PersonnelId, PersonnelName};
use serde::{Deserialize, Serialize};

/// Eligibility tag gating which inspection assignments a person may receive.
///
/// The taxonomy mirrors the environmental management bureau's monitoring
/// sections. Each applicable law maps to exactly one specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    /// Clean-air monitoring.
    AirQuality,
    /// Clean-water monitoring.
    WaterQuality,
    /// Environmental impact assessment monitoring.
    EnvironmentalImpactAssessment,
    /// Toxic substances and hazardous waste monitoring.
    ToxicHazardous,
    /// Ecological solid waste monitoring.
    SolidWaste,
}

impl Specialization {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AirQuality => "air_quality",
            Self::WaterQuality => "water_quality",
            Self::EnvironmentalImpactAssessment => "environmental_impact_assessment",
            Self::ToxicHazardous => "toxic_hazardous",
            Self::SolidWaste => "solid_waste",
        }
    }

    /// Returns the display label used on review screens.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::AirQuality => "Air Quality",
            Self::WaterQuality => "Water Quality",
            Self::EnvironmentalImpactAssessment => "Environmental Impact Assessment",
            Self::ToxicHazardous => "Toxic/Hazardous",
            Self::SolidWaste => "Solid Waste",
        }
    }
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Specialization {
    type Error = ParseSpecializationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "air_quality" => Ok(Self::AirQuality),
            "water_quality" => Ok(Self::WaterQuality),
            "environmental_impact_assessment" => Ok(Self::EnvironmentalImpactAssessment),
            "toxic_hazardous" => Ok(Self::ToxicHazardous),
            "solid_waste" => Ok(Self::SolidWaste),
            _ => Err(ParseSpecializationError(value.to_owned())),
        }
    }
}

/// Informational notice that an assignment pushed a person past capacity.
///
/// Accompanies a successful assignment; never a failure. Over-capacity
/// assignment is permitted but must be surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityWarning {
    /// The person whose capacity was exceeded.
    pub personnel_id: PersonnelId,
    /// Open-assignment count after the triggering assignment.
    pub workload: u32,
    /// The configured soft capacity limit.
    pub max_capacity: u32,
}

/// Personnel aggregate root.
///
/// `workload` counts assignments currently held in the assigned or
/// in-progress states; submitted work no longer counts against capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    id: PersonnelId,
    name: PersonnelName,
    specialization: Specialization,
    workload: u32,
    max_capacity: u32,
}

/// Parameter object for reconstructing a persisted personnel aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPersonnelData {
    /// Persisted personnel identifier.
    pub id: PersonnelId,
    /// Persisted display name.
    pub name: PersonnelName,
    /// Persisted specialization tag.
    pub specialization: Specialization,
    /// Persisted open-assignment count.
    pub workload: u32,
    /// Persisted capacity limit.
    pub max_capacity: u32,
}

impl Personnel {
    /// Creates a new personnel record with no open assignments.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelDomainError::ZeroCapacity`] when `max_capacity`
    /// is zero.
    pub fn new(
        id: PersonnelId,
        name: PersonnelName,
        specialization: Specialization,
        max_capacity: u32,
    ) -> Result<Self, PersonnelDomainError> {
        if max_capacity == 0 {
            return Err(PersonnelDomainError::ZeroCapacity);
        }
        Ok(Self {
            id,
            name,
            specialization,
            workload: 0,
            max_capacity,
        })
    }

    /// Reconstructs a personnel record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPersonnelData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            specialization: data.specialization,
            workload: data.workload,
            max_capacity: data.max_capacity,
        }
    }

    /// Returns the personnel identifier.
    #[must_use]
    pub const fn id(&self) -> PersonnelId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &PersonnelName {
        &self.name
    }

    /// Returns the specialization tag.
    #[must_use]
    pub const fn specialization(&self) -> Specialization {
        self.specialization
    }

    /// Returns the count of currently open assignments.
    #[must_use]
    pub const fn workload(&self) -> u32 {
        self.workload
    }

    /// Returns the soft capacity limit.
    #[must_use]
    pub const fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Returns whether one more assignment would exceed the capacity limit.
    #[must_use]
    pub const fn at_capacity(&self) -> bool {
        self.workload >= self.max_capacity
    }

    /// Records one more open assignment against this person.
    ///
    /// Returns a [`CapacityWarning`] when the new workload exceeds the
    /// capacity limit. Over-capacity assignment is allowed; the warning is
    /// surfaced to the caller rather than blocking.
    pub const fn record_assignment(&mut self) -> Option<CapacityWarning> {
        self.workload = self.workload.saturating_add(1);
        if self.workload > self.max_capacity {
            return Some(CapacityWarning {
                personnel_id: self.id,
                workload: self.workload,
                max_capacity: self.max_capacity,
            });
        }
        None
    }

    /// Releases one open assignment held by this person.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnelDomainError::WorkloadUnderflow`] when no open
    /// assignments are recorded.
    pub const fn release_assignment(&mut self) -> Result<(), PersonnelDomainError> {
        match self.workload.checked_sub(1) {
            Some(remaining) => {
                self.workload = remaining;
                Ok(())
            }
            None => Err(PersonnelDomainError::WorkloadUnderflow(self.id)),
        }
    }
}
