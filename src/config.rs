use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MediHub";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Well-known key for the durable user-profile projection.
pub const PROFILE_KEY: &str = "userProfile";

/// Well-known key for the doctor attendance record.
pub const ATTENDANCE_KEY: &str = "doctorAttendance";

/// Recent-activity feed holds at most this many entries.
pub const ACTIVITY_FEED_CAPACITY: usize = 5;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/MediHub/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("MediHub")
}

/// Get the durable local store file (JSON key-value, localStorage analogue)
pub fn local_store_path() -> PathBuf {
    app_data_dir().join("local_store.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("MediHub"));
    }

    #[test]
    fn local_store_under_app_data() {
        let store = local_store_path();
        assert!(store.starts_with(app_data_dir()));
        assert!(store.ends_with("local_store.json"));
    }

    #[test]
    fn app_name_is_medihub() {
        assert_eq!(APP_NAME, "MediHub");
    }

    #[test]
    fn default_filter_targets_crate() {
        assert_eq!(default_log_filter(), "medihub=info");
    }
}
