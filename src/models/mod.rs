pub mod appointment;
pub mod approval;
pub mod attendance;
pub mod enums;
pub mod invoice;
pub mod notification;
pub mod patient;
pub mod profile;
pub mod record;

pub use appointment::Appointment;
pub use approval::{ActivityEntry, DoctorApplication};
pub use attendance::Attendance;
pub use invoice::Invoice;
pub use notification::Notification;
pub use patient::PatientRecord;
pub use profile::UserProfile;
pub use record::MedicalRecord;
