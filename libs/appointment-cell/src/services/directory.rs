use serde::{Deserialize, Serialize};

use doctor_cell::DoctorRoster;

use crate::models::BookableDoctor;

/// The doctors a booking can be made against, with their static slot lists.
///
/// The directory is read-only in the booking context; slot candidates are
/// exactly the resolved doctor's `available_slots`, with no check against
/// already-booked slots for that doctor and date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorDirectory {
    doctors: Vec<BookableDoctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<BookableDoctor>) -> Self {
        Self { doctors }
    }

    /// Projects a roster snapshot into booking form, keeping insertion
    /// order. Doctors added through the roster carry no slots, so they
    /// offer zero time choices here.
    pub fn from_roster(roster: &DoctorRoster) -> Self {
        Self::new(roster.doctors().iter().map(BookableDoctor::from).collect())
    }

    /// The built-in directory the booking view starts from.
    pub fn seed() -> Self {
        let slots = |labels: &[&str]| labels.iter().map(|s| s.to_string()).collect();
        Self::new(vec![
            BookableDoctor {
                id: "1".to_string(),
                name: "Dr. Smith".to_string(),
                specialization: "Cardiology".to_string(),
                available_slots: slots(&[
                    "09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM",
                ]),
            },
            BookableDoctor {
                id: "2".to_string(),
                name: "Dr. Johnson".to_string(),
                specialization: "Dermatology".to_string(),
                available_slots: slots(&[
                    "09:30 AM", "11:30 AM", "01:00 PM", "02:30 PM", "04:00 PM",
                ]),
            },
            BookableDoctor {
                id: "3".to_string(),
                name: "Dr. Williams".to_string(),
                specialization: "Pediatrics".to_string(),
                available_slots: slots(&[
                    "08:00 AM", "09:00 AM", "10:30 AM", "02:00 PM", "03:30 PM",
                ]),
            },
        ])
    }

    pub fn doctors(&self) -> &[BookableDoctor] {
        &self.doctors
    }

    pub fn resolve(&self, doctor_id: &str) -> Option<&BookableDoctor> {
        self.doctors.iter().find(|doctor| doctor.id == doctor_id)
    }

    /// Slot labels offered for the given doctor; empty when the id is
    /// unknown.
    pub fn slot_candidates(&self, doctor_id: &str) -> &[String] {
        self.resolve(doctor_id)
            .map_or(&[], |doctor| doctor.available_slots.as_slice())
    }
}
