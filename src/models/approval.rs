use serde::{Deserialize, Serialize};

use super::enums::ActivityKind;

/// A doctor application awaiting admin approval. `submitted` is a relative
/// display label ("2 hours ago").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorApplication {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub submitted: String,
}

/// One entry in the admin dashboard's bounded recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub text: String,
    pub time: String,
}

impl ActivityEntry {
    pub fn new(kind: ActivityKind, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            time: time.into(),
        }
    }
}
