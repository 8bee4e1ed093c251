use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current schema version of the durable profile projection.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// The user-profile projection mirrored into the durable local store.
///
/// This is the only entity that leaves the in-memory session; everything
/// else is session-scoped seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Versioned so a later schema can migrate old records instead of
    /// guessing their shape.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: String,
    pub blood_group: String,
    pub address: String,
    pub emergency_contact: String,
    pub allergies: String,
    pub medical_conditions: String,
    pub registered_at: DateTime<Utc>,
}

fn default_schema_version() -> u32 {
    PROFILE_SCHEMA_VERSION
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter initials for the avatar badge, uppercased.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        first
            .into_iter()
            .chain(last)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
