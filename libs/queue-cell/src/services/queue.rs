use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shared_models::error::require_non_empty;
use shared_models::{replace_by_id, ValidationError};
use shared_utils::{clock_label, IdGenerator};

use crate::models::{AddPatientRequest, Priority, QueueCounts, QueueEntry, QueueStatus};

/// Snapshot of the day's walk-in queue, in insertion order.
///
/// Every mutating operation returns a new snapshot and leaves the receiver
/// untouched; the presentation layer owns the mutable cell and swaps
/// snapshots in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientQueue {
    entries: Vec<QueueEntry>,
}

impl PatientQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<QueueEntry>) -> Self {
        Self { entries }
    }

    /// The built-in records a freshly opened queue view starts from.
    pub fn seed() -> Self {
        Self::from_entries(vec![
            QueueEntry {
                id: "1".to_string(),
                queue_number: 1,
                name: "John Smith".to_string(),
                phone: "+1234567890".to_string(),
                status: QueueStatus::WithDoctor,
                time_added: "09:30 AM".to_string(),
                priority: Priority::Normal,
            },
            QueueEntry {
                id: "2".to_string(),
                queue_number: 2,
                name: "Sarah Johnson".to_string(),
                phone: "+1234567891".to_string(),
                status: QueueStatus::Waiting,
                time_added: "09:45 AM".to_string(),
                priority: Priority::Urgent,
            },
            QueueEntry {
                id: "3".to_string(),
                queue_number: 3,
                name: "Mike Davis".to_string(),
                phone: "+1234567892".to_string(),
                status: QueueStatus::Waiting,
                time_added: "10:15 AM".to_string(),
                priority: Priority::Normal,
            },
        ])
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next queue number to hand out: one past the highest number present,
    /// or 1 for an empty queue. Numbers are never reused.
    pub fn next_queue_number(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.queue_number)
            .max()
            .map_or(1, |highest| highest + 1)
    }

    /// Appends a walk-in patient with status `Waiting` and the next queue
    /// number. No duplicate-name or duplicate-phone check is made.
    pub fn try_add_patient(
        &self,
        request: &AddPatientRequest,
        ids: &mut dyn IdGenerator,
        now: NaiveTime,
    ) -> Result<Self, ValidationError> {
        require_non_empty("name", &request.name)?;
        require_non_empty("phone", &request.phone)?;

        let entry = QueueEntry {
            id: ids.next_id(),
            queue_number: self.next_queue_number(),
            name: request.name.clone(),
            phone: request.phone.clone(),
            status: QueueStatus::Waiting,
            time_added: clock_label(now),
            priority: request.priority,
        };
        debug!(
            queue_number = entry.queue_number,
            name = %entry.name,
            "added walk-in patient to queue"
        );

        let mut entries = self.entries.clone();
        entries.push(entry);
        Ok(Self { entries })
    }

    /// As [`try_add_patient`](Self::try_add_patient), but a rejected form is
    /// a silent no-op that returns the queue unchanged.
    pub fn add_patient(
        &self,
        request: &AddPatientRequest,
        ids: &mut dyn IdGenerator,
        now: NaiveTime,
    ) -> Self {
        match self.try_add_patient(request, ids, now) {
            Ok(queue) => queue,
            Err(err) => {
                debug!(%err, "walk-in form rejected");
                self.clone()
            }
        }
    }

    /// Unconditional status replacement. An unknown id matches nothing and
    /// the result equals the input element-wise. Requeueing a completed
    /// patient keeps their original queue number.
    pub fn set_status(&self, id: &str, status: QueueStatus) -> Self {
        Self {
            entries: replace_by_id(&self.entries, id, |entry| QueueEntry {
                status,
                ..entry.clone()
            }),
        }
    }

    /// Per-status totals, recomputed on every call rather than cached.
    pub fn counts(&self) -> QueueCounts {
        let by_status = |status: QueueStatus| {
            self.entries
                .iter()
                .filter(|entry| entry.status == status)
                .count()
        };
        QueueCounts {
            waiting: by_status(QueueStatus::Waiting),
            with_doctor: by_status(QueueStatus::WithDoctor),
            completed: by_status(QueueStatus::Completed),
        }
    }
}
