use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Doctor presence record, mirrored into the durable local store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub present: bool,
    /// Set while present, cleared when attendance is cleared.
    pub marked_at: Option<DateTime<Utc>>,
}
