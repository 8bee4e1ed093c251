use serde::{Deserialize, Serialize};

/// Lightweight doctor-facing patient entry.
///
/// Keyed by display name — not a true primary key, so two patients sharing
/// a name collapse into one roster entry. Known data-model gap, kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub last_visit: String,
    pub condition: String,
}
