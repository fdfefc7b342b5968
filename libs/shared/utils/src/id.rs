use tracing::trace;
use uuid::Uuid;

/// Source of record identifiers, injected into every creation operation so
/// callers control whether ids are random or deterministic.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator: random v4 UUIDs rendered as strings.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        trace!("generated record id {id}");
        id
    }
}

/// Deterministic generator yielding "1", "2", "3", … — the same ids the
/// built-in seed records use, which keeps tests and seeded sessions aligned.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts numbering after existing records, e.g. `starting_at(5)` for a
    /// collection seeded with ids "1" through "4".
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}
