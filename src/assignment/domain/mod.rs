//! Domain model for inspection assignments.
//!
//! The assignment domain models the canonical lifecycle state machine, the
//! establishment snapshot, the applicable-law taxonomy that drives personnel
//! eligibility, and the revision-loop bookkeeping (feedback history and
//! section edit flags) while keeping infrastructure concerns outside of the
//! domain boundary.

mod assignment;
mod error;
mod establishment;
mod ids;
mod law;
mod section;

pub use assignment::{
    Assignment, AssignmentState, CompletionPercentage, PersistedAssignmentData,
    PersonnelAssignment, Priority,
};
pub use error::{
    AssignmentDomainError, ParseApplicableLawError, ParseAssignmentStateError,
    ParseFormSectionError, ParsePriorityError,
};
pub use establishment::{EstablishmentId, EstablishmentRef};
pub use ids::AssignmentId;
pub use law::ApplicableLaw;
pub use section::{FeedbackEntry, FormContent, FormSection, ReviewerRole};
