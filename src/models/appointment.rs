use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// One appointment as rendered on a dashboard list.
///
/// `counterpart_name` is the doctor's name on patient-facing lists and the
/// patient's name on doctor-facing lists. `date` and `time` are display
/// strings ("Dec 20, 2025", "10:00 AM") and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub counterpart_name: String,
    /// Specialty label on patient-facing lists, visit-type label
    /// ("Follow-up", "Emergency") on doctor-facing lists.
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// New appointments always start pending.
    pub fn new(
        id: impl Into<String>,
        counterpart_name: impl Into<String>,
        specialty: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            counterpart_name: counterpart_name.into(),
            specialty: specialty.into(),
            date: date.into(),
            time: time.into(),
            status: AppointmentStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }
}
