//! Inspection form sections, revision feedback, and form content snapshots.

use super::ParseFormSectionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A section of the inspection report form.
///
/// The form itself is owned by an external subsystem; this taxonomy exists
/// so returns-for-revision can flag specific sections for targeted editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    /// Establishment and permit particulars.
    GeneralInformation,
    /// Why the inspection was conducted.
    PurposeOfInspection,
    /// Per-permit compliance status.
    ComplianceStatus,
    /// Per-condition summary of compliance.
    SummaryOfCompliance,
    /// Findings and observations recorded on site.
    FindingsObservations,
    /// Inspector recommendations.
    Recommendations,
}

impl FormSection {
    /// All form sections in presentation order.
    pub const ALL: [Self; 6] = [
        Self::GeneralInformation,
        Self::PurposeOfInspection,
        Self::ComplianceStatus,
        Self::SummaryOfCompliance,
        Self::FindingsObservations,
        Self::Recommendations,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeneralInformation => "general_information",
            Self::PurposeOfInspection => "purpose_of_inspection",
            Self::ComplianceStatus => "compliance_status",
            Self::SummaryOfCompliance => "summary_of_compliance",
            Self::FindingsObservations => "findings_observations",
            Self::Recommendations => "recommendations",
        }
    }

    /// Returns the display label used on the inspection form.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GeneralInformation => "General Information",
            Self::PurposeOfInspection => "Purpose of Inspection",
            Self::ComplianceStatus => "Compliance Status",
            Self::SummaryOfCompliance => "Summary of Compliance",
            Self::FindingsObservations => "Findings & Observations",
            Self::Recommendations => "Recommendations",
        }
    }
}

impl TryFrom<&str> for FormSection {
    type Error = ParseFormSectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "general_information" => Ok(Self::GeneralInformation),
            "purpose_of_inspection" => Ok(Self::PurposeOfInspection),
            "compliance_status" => Ok(Self::ComplianceStatus),
            "summary_of_compliance" => Ok(Self::SummaryOfCompliance),
            "findings_observations" => Ok(Self::FindingsObservations),
            "recommendations" => Ok(Self::Recommendations),
            _ => Err(ParseFormSectionError(value.to_owned())),
        }
    }
}

/// Review hierarchy level that may return an assignment for revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerRole {
    /// Unit head reviewing submitted work.
    UnitHead,
    /// Section chief reviewing unit-endorsed work.
    SectionChief,
    /// Division chief giving final approval.
    DivisionChief,
}

impl ReviewerRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnitHead => "unit_head",
            Self::SectionChief => "section_chief",
            Self::DivisionChief => "division_chief",
        }
    }
}

/// One reviewer note attached when returning an assignment for revision.
///
/// Feedback history is append-only; prior notes are never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// The reviewer level that recorded the note.
    pub reviewer: ReviewerRole,
    /// Free-text note for the monitoring personnel.
    pub note: String,
    /// When the note was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Opaque snapshot of inspection form content.
///
/// The form's field-level content is owned by the inspection-form subsystem;
/// this wrapper preserves whatever the form hands back across revision
/// cycles without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormContent(Value);

impl FormContent {
    /// Wraps a form content payload.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped payload.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the payload.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}
