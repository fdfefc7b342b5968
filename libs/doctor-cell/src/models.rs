use serde::{Deserialize, Serialize};
use shared_models::HasId;

/// Availability lifecycle of a doctor profile. The front desk surfaces
/// available↔busy, either of those →off_duty, and off_duty→available;
/// `set_availability` itself accepts any target state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    OffDuty,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::OffDuty => "Off Duty",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub gender: Gender,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub availability: Availability,
    /// Free text, e.g. "15 years".
    pub experience: String,
    /// Free text, e.g. "9:00 AM - 5:00 PM".
    pub working_hours: String,
    /// Bookable time-slot labels, fixed per doctor. Doctors created through
    /// `add_doctor` start with none, so booking against them offers no time
    /// choices.
    pub available_slots: Vec<String>,
}

impl HasId for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialization: String,
    pub gender: Gender,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub experience: String,
    pub working_hours: String,
}

/// Derived-view inputs for the roster list. The three predicates AND
/// together; `None` means "all". The default value is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterFilter {
    /// Case-insensitive substring match on name OR specialization; the
    /// empty string matches everything.
    pub search_term: String,
    /// Exact specialization match.
    pub specialization: Option<String>,
    /// Exact availability match.
    pub availability: Option<Availability>,
}

/// Per-availability totals for the stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCounts {
    pub available: usize,
    pub busy: usize,
    pub off_duty: usize,
}

impl RosterCounts {
    pub fn total(&self) -> usize {
        self.available + self.busy + self.off_duty
    }
}
