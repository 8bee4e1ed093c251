use serde::{Deserialize, Serialize};

use super::enums::RecordType;

/// A patient-facing medical record entry (lab report, imaging, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub title: String,
    pub record_type: RecordType,
    pub date: String,
    pub doctor: String,
    pub department: String,
}
