use serde::{Deserialize, Serialize};
use tracing::debug;

use shared_models::error::require_non_empty;
use shared_models::{replace_by_id, ValidationError};
use shared_utils::IdGenerator;

use crate::models::{
    Availability, CreateDoctorRequest, Doctor, Gender, RosterCounts, RosterFilter,
};

/// Snapshot of the clinic's doctor profiles, in insertion order.
///
/// Mutating operations return a new snapshot; filtering is a pure derived
/// view over the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorRoster {
    doctors: Vec<Doctor>,
}

impl DoctorRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_doctors(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The built-in profiles a freshly opened roster view starts from.
    pub fn seed() -> Self {
        Self::from_doctors(vec![
            Doctor {
                id: "1".to_string(),
                name: "Dr. John Smith".to_string(),
                specialization: "Cardiology".to_string(),
                gender: Gender::Male,
                location: "Building A, Floor 2".to_string(),
                phone: "+1234567890".to_string(),
                email: "john.smith@clinic.com".to_string(),
                availability: Availability::Available,
                experience: "15 years".to_string(),
                working_hours: "9:00 AM - 5:00 PM".to_string(),
                available_slots: Vec::new(),
            },
            Doctor {
                id: "2".to_string(),
                name: "Dr. Sarah Johnson".to_string(),
                specialization: "Dermatology".to_string(),
                gender: Gender::Female,
                location: "Building B, Floor 1".to_string(),
                phone: "+1234567891".to_string(),
                email: "sarah.johnson@clinic.com".to_string(),
                availability: Availability::Busy,
                experience: "12 years".to_string(),
                working_hours: "8:00 AM - 4:00 PM".to_string(),
                available_slots: Vec::new(),
            },
            Doctor {
                id: "3".to_string(),
                name: "Dr. Michael Williams".to_string(),
                specialization: "Pediatrics".to_string(),
                gender: Gender::Male,
                location: "Building A, Floor 3".to_string(),
                phone: "+1234567892".to_string(),
                email: "michael.williams@clinic.com".to_string(),
                availability: Availability::Available,
                experience: "8 years".to_string(),
                working_hours: "10:00 AM - 6:00 PM".to_string(),
                available_slots: Vec::new(),
            },
            Doctor {
                id: "4".to_string(),
                name: "Dr. Emily Davis".to_string(),
                specialization: "Orthopedics".to_string(),
                gender: Gender::Female,
                location: "Building C, Floor 2".to_string(),
                phone: "+1234567893".to_string(),
                email: "emily.davis@clinic.com".to_string(),
                availability: Availability::OffDuty,
                experience: "20 years".to_string(),
                working_hours: "9:00 AM - 3:00 PM".to_string(),
                available_slots: Vec::new(),
            },
        ])
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Appends a new profile starting `Available`, with no bookable slots.
    /// No duplicate check is made against existing profiles.
    pub fn try_add_doctor(
        &self,
        request: &CreateDoctorRequest,
        ids: &mut dyn IdGenerator,
    ) -> Result<Self, ValidationError> {
        require_non_empty("name", &request.name)?;
        require_non_empty("specialization", &request.specialization)?;
        require_non_empty("location", &request.location)?;
        require_non_empty("phone", &request.phone)?;
        require_non_empty("email", &request.email)?;

        let doctor = Doctor {
            id: ids.next_id(),
            name: request.name.clone(),
            specialization: request.specialization.clone(),
            gender: request.gender,
            location: request.location.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            availability: Availability::Available,
            experience: request.experience.clone(),
            working_hours: request.working_hours.clone(),
            available_slots: Vec::new(),
        };
        debug!(name = %doctor.name, specialization = %doctor.specialization, "added doctor profile");

        let mut doctors = self.doctors.clone();
        doctors.push(doctor);
        Ok(Self { doctors })
    }

    /// As [`try_add_doctor`](Self::try_add_doctor), but a rejected form is a
    /// silent no-op that returns the roster unchanged.
    pub fn add_doctor(&self, request: &CreateDoctorRequest, ids: &mut dyn IdGenerator) -> Self {
        match self.try_add_doctor(request, ids) {
            Ok(roster) => roster,
            Err(err) => {
                debug!(%err, "doctor form rejected");
                self.clone()
            }
        }
    }

    /// Unconditional availability replacement. An unknown id matches nothing
    /// and the result equals the input element-wise.
    pub fn set_availability(&self, id: &str, availability: Availability) -> Self {
        Self {
            doctors: replace_by_id(&self.doctors, id, |doctor| Doctor {
                availability,
                ..doctor.clone()
            }),
        }
    }

    /// Pure derived view: the profiles surviving all three filter
    /// predicates, in roster (insertion) order.
    pub fn filter(&self, filter: &RosterFilter) -> Vec<Doctor> {
        let search = filter.search_term.to_lowercase();
        self.doctors
            .iter()
            .filter(|doctor| {
                search.is_empty()
                    || doctor.name.to_lowercase().contains(&search)
                    || doctor.specialization.to_lowercase().contains(&search)
            })
            .filter(|doctor| {
                filter
                    .specialization
                    .as_ref()
                    .is_none_or(|wanted| &doctor.specialization == wanted)
            })
            .filter(|doctor| {
                filter
                    .availability
                    .is_none_or(|wanted| doctor.availability == wanted)
            })
            .cloned()
            .collect()
    }

    /// Distinct specializations present in the roster, in first-occurrence
    /// order; used to populate the specialization filter options.
    pub fn specializations(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for doctor in &self.doctors {
            if !seen.contains(&doctor.specialization) {
                seen.push(doctor.specialization.clone());
            }
        }
        seen
    }

    /// Per-availability totals, recomputed on every call rather than cached.
    pub fn counts(&self) -> RosterCounts {
        let by_availability = |availability: Availability| {
            self.doctors
                .iter()
                .filter(|doctor| doctor.availability == availability)
                .count()
        };
        RosterCounts {
            available: by_availability(Availability::Available),
            busy: by_availability(Availability::Busy),
            off_duty: by_availability(Availability::OffDuty),
        }
    }
}
