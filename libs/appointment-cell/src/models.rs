use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::{HasId, ValidationError};

/// Lifecycle of a scheduled visit. No terminal state: a cancelled visit can
/// be rebooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Booked,
    Completed,
    Cancelled,
    Rescheduled,
}

impl AppointmentStatus {
    /// The follow-up actions the front desk surfaces per status
    /// ("Complete" / "Cancel" for booked visits, "Rebook" for cancelled
    /// ones). `set_status` itself accepts any target status.
    pub fn surfaced_transitions(self) -> &'static [AppointmentStatus] {
        match self {
            AppointmentStatus::Booked => {
                &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
            }
            AppointmentStatus::Cancelled => &[AppointmentStatus::Booked],
            AppointmentStatus::Completed | AppointmentStatus::Rescheduled => &[],
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Booked => "Booked",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Rescheduled => "Rescheduled",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
    Appointment,
    FollowUp,
}

impl std::fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentKind::Appointment => write!(f, "New"),
            AppointmentKind::FollowUp => write!(f, "Follow-up"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub patient_phone: String,
    /// Snapshot of the doctor's name at booking time; does not track later
    /// roster changes.
    pub doctor_name: String,
    /// Snapshot of the doctor's specialization at booking time.
    pub doctor_specialization: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub kind: AppointmentKind,
}

impl HasId for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub kind: AppointmentKind,
}

/// A doctor as the booking form sees one: identity, specialization, and the
/// static list of bookable slot labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookableDoctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub available_slots: Vec<String>,
}

impl From<&doctor_cell::Doctor> for BookableDoctor {
    fn from(doctor: &doctor_cell::Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            available_slots: doctor.available_slots.clone(),
        }
    }
}

/// Per-status totals for the stats cards. Rescheduled visits have no card,
/// so the overall total comes from the book itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCounts {
    pub booked: usize,
    pub completed: usize,
    pub cancelled: usize,
}

// Error types specific to booking operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown doctor id: {0}")]
    UnknownDoctor(String),
}
