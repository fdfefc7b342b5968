pub mod error;
pub mod record;

pub use error::ValidationError;
pub use record::{replace_by_id, HasId};
