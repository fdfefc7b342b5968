pub mod id;
pub mod time;

pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use time::clock_label;
