//! Filesystem-backed event snapshot storage.

use monitor::SnapshotStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Copies event snapshots into a directory served under `/events/img/`.
///
/// The source is the transport's scratch copy of the latest frame image,
/// which gets overwritten by the next frame; events need their own copy.
#[derive(Debug)]
pub struct FsSnapshotStore {
    events_dir: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(events_dir: PathBuf) -> Self {
        Self { events_dir }
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn store(&self, source: &Path, event_id: u64) -> Option<String> {
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        let file_name = format!("event_{event_id}.{ext}");
        let dest = self.events_dir.join(&file_name);

        match fs::copy(source, &dest) {
            Ok(_) => Some(format!("/events/img/{file_name}")),
            Err(err) => {
                warn!(
                    source = %source.display(),
                    dest = %dest.display(),
                    %err,
                    "failed to store event snapshot"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_snapshot_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("latest_cam1.jpg");
        fs::write(&source, b"jpegbytes").unwrap();

        let store = FsSnapshotStore::new(dir.path().to_path_buf());
        let url = store.store(&source, 7);
        assert_eq!(url.as_deref(), Some("/events/img/event_7.jpg"));
        assert_eq!(fs::read(dir.path().join("event_7.jpg")).unwrap(), b"jpegbytes");
    }

    #[test]
    fn missing_source_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsSnapshotStore::new(dir.path().to_path_buf());
        assert!(store.store(Path::new("/nonexistent/frame.jpg"), 1).is_none());
    }

    #[test]
    fn extension_defaults_to_jpg() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("latest_cam1");
        fs::write(&source, b"raw").unwrap();

        let store = FsSnapshotStore::new(dir.path().to_path_buf());
        let url = store.store(&source, 2);
        assert_eq!(url.as_deref(), Some("/events/img/event_2.jpg"));
    }
}
