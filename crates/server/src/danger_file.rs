//! JSON file persistence for the danger list.

use monitor::{DangerListStore, MonitorError};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Persists the danger list as a pretty-printed JSON array of names.
///
/// A missing or unreadable file loads as an empty list so a corrupted
/// file never prevents startup; saves still fail loudly.
#[derive(Debug)]
pub struct JsonDangerStore {
    path: PathBuf,
}

impl JsonDangerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DangerListStore for JsonDangerStore {
    fn load(&self) -> Result<Vec<String>, MonitorError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read danger list");
                return Ok(Vec::new());
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(names) => Ok(names),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to parse danger list");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, names: &[String]) -> Result<(), MonitorError> {
        let json = serde_json::to_string_pretty(names)
            .map_err(|err| MonitorError::DangerStore(err.to_string()))?;
        fs::write(&self.path, json).map_err(|err| {
            MonitorError::DangerStore(format!("write {}: {err}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDangerStore::new(dir.path().join("danger_list.json"));

        store
            .save(&["eve".to_string(), "mallory".to_string()])
            .unwrap();
        assert_eq!(store.load().unwrap(), vec!["eve", "mallory"]);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDangerStore::new(dir.path().join("danger_list.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("danger_list.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonDangerStore::new(path);
        assert!(store.load().unwrap().is_empty());
    }
}
