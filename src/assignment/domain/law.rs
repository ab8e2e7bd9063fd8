//! Applicable-law taxonomy driving personnel eligibility.

use super::ParseApplicableLawError;
use crate::personnel::domain::Specialization;
use serde::{Deserialize, Serialize};

/// Environmental statute an inspection is conducted under.
///
/// Each law maps to exactly one monitoring specialization; a person may be
/// assigned an inspection only when their specialization matches the law's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicableLaw {
    /// RA 8749, the Philippine Clean Air Act.
    CleanAirAct,
    /// RA 9275, the Philippine Clean Water Act.
    CleanWaterAct,
    /// PD 1586, the Environmental Impact Statement System.
    EiaSystem,
    /// RA 6969, the Toxic Substances and Hazardous and Nuclear Waste
    /// Control Act.
    ToxicSubstances,
    /// RA 9003, the Ecological Solid Waste Management Act.
    EcologicalSolidWaste,
}

impl ApplicableLaw {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CleanAirAct => "clean_air_act",
            Self::CleanWaterAct => "clean_water_act",
            Self::EiaSystem => "eia_system",
            Self::ToxicSubstances => "toxic_substances",
            Self::EcologicalSolidWaste => "ecological_solid_waste",
        }
    }

    /// Returns the statute citation used on inspection reports.
    #[must_use]
    pub const fn citation(self) -> &'static str {
        match self {
            Self::CleanAirAct => "RA 8749",
            Self::CleanWaterAct => "RA 9275",
            Self::EiaSystem => "PD 1586",
            Self::ToxicSubstances => "RA 6969",
            Self::EcologicalSolidWaste => "RA 9003",
        }
    }

    /// Returns the specialization a person must carry to be eligible for
    /// inspections under this law.
    #[must_use]
    pub const fn required_specialization(self) -> Specialization {
        match self {
            Self::CleanAirAct => Specialization::AirQuality,
            Self::CleanWaterAct => Specialization::WaterQuality,
            Self::EiaSystem => Specialization::EnvironmentalImpactAssessment,
            Self::ToxicSubstances => Specialization::ToxicHazardous,
            Self::EcologicalSolidWaste => Specialization::SolidWaste,
        }
    }
}

impl TryFrom<&str> for ApplicableLaw {
    type Error = ParseApplicableLawError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "clean_air_act" => Ok(Self::CleanAirAct),
            "clean_water_act" => Ok(Self::CleanWaterAct),
            "eia_system" => Ok(Self::EiaSystem),
            "toxic_substances" => Ok(Self::ToxicSubstances),
            "ecological_solid_waste" => Ok(Self::EcologicalSolidWaste),
            _ => Err(ParseApplicableLawError(value.to_owned())),
        }
    }
}
