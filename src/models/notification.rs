use serde::{Deserialize, Serialize};

/// A dashboard notification. `time` is a relative display label
/// ("2 hours ago"), not a parsed timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub read: bool,
    pub time: String,
}

impl Notification {
    pub fn new(id: u32, message: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            read: false,
            time: time.into(),
        }
    }
}
