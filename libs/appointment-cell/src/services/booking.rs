use serde::{Deserialize, Serialize};
use tracing::debug;

use shared_models::error::require_non_empty;
use shared_models::replace_by_id;
use shared_utils::IdGenerator;

use crate::models::{
    Appointment, AppointmentCounts, AppointmentKind, AppointmentStatus, BookAppointmentRequest,
    BookingError,
};
use crate::services::directory::DoctorDirectory;

/// Snapshot of the scheduled visits, in booking order.
///
/// Mutating operations return a new snapshot and leave the receiver
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// The built-in records a freshly opened appointments view starts from.
    pub fn seed() -> Self {
        Self::from_appointments(vec![
            Appointment {
                id: "1".to_string(),
                patient_name: "Alice Brown".to_string(),
                patient_phone: "+1234567893".to_string(),
                doctor_name: "Dr. Smith".to_string(),
                doctor_specialization: "Cardiology".to_string(),
                date: "2024-01-15".to_string(),
                time: "10:00 AM".to_string(),
                status: AppointmentStatus::Booked,
                kind: AppointmentKind::Appointment,
            },
            Appointment {
                id: "2".to_string(),
                patient_name: "Bob Wilson".to_string(),
                patient_phone: "+1234567894".to_string(),
                doctor_name: "Dr. Johnson".to_string(),
                doctor_specialization: "Dermatology".to_string(),
                date: "2024-01-15".to_string(),
                time: "11:30 AM".to_string(),
                status: AppointmentStatus::Completed,
                kind: AppointmentKind::FollowUp,
            },
            Appointment {
                id: "3".to_string(),
                patient_name: "Carol Davis".to_string(),
                patient_phone: "+1234567895".to_string(),
                doctor_name: "Dr. Williams".to_string(),
                doctor_specialization: "Pediatrics".to_string(),
                date: "2024-01-15".to_string(),
                time: "02:00 PM".to_string(),
                status: AppointmentStatus::Booked,
                kind: AppointmentKind::Appointment,
            },
        ])
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Books a visit against a doctor from the directory, snapshotting the
    /// doctor's name and specialization into the record. The snapshot never
    /// tracks later roster changes. No slot-collision check is made: the
    /// same doctor, date, and time may be booked twice.
    pub fn try_book(
        &self,
        request: &BookAppointmentRequest,
        directory: &DoctorDirectory,
        ids: &mut dyn IdGenerator,
    ) -> Result<Self, BookingError> {
        require_non_empty("patient_name", &request.patient_name)?;
        require_non_empty("patient_phone", &request.patient_phone)?;
        require_non_empty("doctor_id", &request.doctor_id)?;
        require_non_empty("date", &request.date)?;
        require_non_empty("time", &request.time)?;

        let doctor = directory
            .resolve(&request.doctor_id)
            .ok_or_else(|| BookingError::UnknownDoctor(request.doctor_id.clone()))?;

        let appointment = Appointment {
            id: ids.next_id(),
            patient_name: request.patient_name.clone(),
            patient_phone: request.patient_phone.clone(),
            doctor_name: doctor.name.clone(),
            doctor_specialization: doctor.specialization.clone(),
            date: request.date.clone(),
            time: request.time.clone(),
            status: AppointmentStatus::Booked,
            kind: request.kind,
        };
        debug!(
            patient = %appointment.patient_name,
            doctor = %appointment.doctor_name,
            date = %appointment.date,
            time = %appointment.time,
            "booked appointment"
        );

        let mut appointments = self.appointments.clone();
        appointments.push(appointment);
        Ok(Self { appointments })
    }

    /// As [`try_book`](Self::try_book), but a rejected form or unknown
    /// doctor is a silent no-op that returns the book unchanged.
    pub fn book(
        &self,
        request: &BookAppointmentRequest,
        directory: &DoctorDirectory,
        ids: &mut dyn IdGenerator,
    ) -> Self {
        match self.try_book(request, directory, ids) {
            Ok(book) => book,
            Err(err) => {
                debug!(%err, "booking form rejected");
                self.clone()
            }
        }
    }

    /// Unconditional status replacement. An unknown id matches nothing and
    /// the result equals the input element-wise.
    pub fn set_status(&self, id: &str, status: AppointmentStatus) -> Self {
        Self {
            appointments: replace_by_id(&self.appointments, id, |appointment| Appointment {
                status,
                ..appointment.clone()
            }),
        }
    }

    /// Per-status totals, recomputed on every call rather than cached.
    pub fn counts(&self) -> AppointmentCounts {
        let by_status = |status: AppointmentStatus| {
            self.appointments
                .iter()
                .filter(|appointment| appointment.status == status)
                .count()
        };
        AppointmentCounts {
            booked: by_status(AppointmentStatus::Booked),
            completed: by_status(AppointmentStatus::Completed),
            cancelled: by_status(AppointmentStatus::Cancelled),
        }
    }
}
