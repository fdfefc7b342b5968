use serde::{Deserialize, Serialize};
use shared_models::HasId;

/// Lifecycle of a walk-in patient. There is no terminal state: a completed
/// patient can be requeued and keeps their original queue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Waiting,
    WithDoctor,
    Completed,
}

impl QueueStatus {
    /// The one follow-up action the front desk surfaces per status
    /// ("Call In", "Complete", "Requeue"). `set_status` itself accepts any
    /// target status.
    pub fn surfaced_transition(self) -> QueueStatus {
        match self {
            QueueStatus::Waiting => QueueStatus::WithDoctor,
            QueueStatus::WithDoctor => QueueStatus::Completed,
            QueueStatus::Completed => QueueStatus::Waiting,
        }
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            QueueStatus::Waiting => "Waiting",
            QueueStatus::WithDoctor => "With Doctor",
            QueueStatus::Completed => "Completed",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Normal,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Normal => write!(f, "Normal"),
            Priority::Urgent => write!(f, "Urgent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: String,
    /// Sequential position number for the day; assigned at insertion and
    /// never reused.
    pub queue_number: u32,
    pub name: String,
    pub phone: String,
    pub status: QueueStatus,
    /// Display-formatted insertion time, e.g. "09:45 AM".
    pub time_added: String,
    pub priority: Priority,
}

impl HasId for QueueEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPatientRequest {
    pub name: String,
    pub phone: String,
    pub priority: Priority,
}

/// Per-status totals for the stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub waiting: usize,
    pub with_doctor: usize,
    pub completed: usize,
}

impl QueueCounts {
    pub fn total(&self) -> usize {
        self.waiting + self.with_doctor + self.completed
    }
}
