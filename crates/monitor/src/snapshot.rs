//! Snapshot persistence seam.
//!
//! The monitor never touches image bytes; it hands the event builder an
//! on-disk source path and receives back an opaque client-facing reference.
//! The filesystem implementation lives in the server crate.

use std::path::Path;

/// Persist a snapshot for a newly allocated event id.
pub trait SnapshotStore: Send + Sync {
    /// Store the image at `source` for `event_id` and return a reference
    /// clients can use to fetch it. Failures must degrade to `None`; this
    /// call never fails the surrounding frame.
    fn store(&self, source: &Path, event_id: u64) -> Option<String>;
}

/// Store that keeps nothing. Events built against it carry no snapshot
/// reference.
#[derive(Debug, Default)]
pub struct NoopSnapshotStore;

impl SnapshotStore for NoopSnapshotStore {
    fn store(&self, _source: &Path, _event_id: u64) -> Option<String> {
        None
    }
}
