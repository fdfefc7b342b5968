use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected-input errors shared by the three record collections.
///
/// The snapshot operations swallow these and behave as silent no-ops; the
/// `try_*` variants surface them so a front end can show a message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    MissingField(String),
}

/// Checks a required free-text field, naming the field on failure.
///
/// Only the empty string is rejected; whitespace-only input passes, matching
/// the form behavior this replaces.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField(field.to_string()))
    } else {
        Ok(())
    }
}
