pub mod booking;
pub mod directory;

pub use booking::AppointmentBook;
pub use directory::DoctorDirectory;
