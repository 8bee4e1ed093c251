//! Durable local store — the browser-localStorage analogue.
//!
//! A single JSON file holding a string-keyed map of JSON values. The core
//! only mirrors two projections into it: the user profile under
//! `config::PROFILE_KEY` and the doctor attendance record under
//! `config::ATTENDANCE_KEY`. A missing file reads as an empty store; writes
//! replace the file atomically via a temp file in the same directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Store at the default location under the app data directory.
    pub fn open_default() -> Self {
        Self::open(crate::config::local_store_path())
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the value under `key`. Missing file or missing
    /// key both read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let map = self.read_map()?;
        match map.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_map(&map)
    }

    /// Drop the value under `key`. Unknown keys are no-ops.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn read_map(&self) -> Result<serde_json::Map<String, Value>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(serde_json::Map::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write-then-rename so a crash mid-write never leaves a torn file.
    fn write_map(&self, map: &serde_json::Map<String, Value>) -> Result<(), StoreError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, map)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), keys = map.len(), "local store written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ATTENDANCE_KEY, PROFILE_KEY};
    use crate::models::Attendance;

    fn store_in(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(dir.path().join("local_store.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let got: Option<Attendance> = store.get(ATTENDANCE_KEY).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let attendance = Attendance {
            present: true,
            marked_at: Some(chrono::Utc::now()),
        };
        store.set(ATTENDANCE_KEY, &attendance).unwrap();
        let got: Attendance = store.get(ATTENDANCE_KEY).unwrap().unwrap();
        assert_eq!(got, attendance);
    }

    #[test]
    fn keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set(ATTENDANCE_KEY, &Attendance::default()).unwrap();
        let profile: Option<serde_json::Value> = store.get(PROFILE_KEY).unwrap();
        assert!(profile.is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("k", &1u32).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        let got: Option<u32> = store.get("k").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("k", &1u32).unwrap();
        store.set("k", &2u32).unwrap();
        assert_eq!(store.get::<u32>("k").unwrap(), Some(2));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("nested/deeper/store.json"));
        store.set("k", &true).unwrap();
        assert_eq!(store.get::<bool>("k").unwrap(), Some(true));
    }
}
