//! Event construction: id allocation, snapshot capture, severity.

use crate::danger::DangerRegistry;
use crate::snapshot::SnapshotStore;
use crate::types::{Event, EventType, ObjectsSummary, Severity};
use chrono::{DateTime, Utc};
use frames::{DetectionFlags, FrameRecord, PersonInfo};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Builds immutable [`Event`] records from trigger frames.
///
/// Owns the global id counter, so one builder instance must be shared by
/// every tracker in the process.
pub struct EventBuilder {
    next_id: AtomicU64,
    registry: Arc<DangerRegistry>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl EventBuilder {
    pub fn new(registry: Arc<DangerRegistry>, snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            registry,
            snapshots,
        }
    }

    /// Allocate the next event id. Monotonic, globally unique, 1-based.
    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Build an event from a trigger frame.
    ///
    /// `start_time = end_time = ts` and `duration_sec = 0`; the threat
    /// tracker overwrites the window for threat events and the presence
    /// tracker overwrites end/duration on finalization.
    pub fn build(
        &self,
        event_type: EventType,
        ts: DateTime<Utc>,
        frame: &FrameRecord,
        flags: DetectionFlags,
    ) -> Event {
        let event_id = self.allocate_id();

        // Snapshot persistence is best-effort; a missing reference never
        // blocks the event.
        let snapshot_url = frame
            .image_path
            .as_deref()
            .and_then(|source| self.snapshots.store(source, event_id));

        let persons = frame.persons.clone();
        let person_count = if persons.is_empty() {
            usize::from(flags.has_person)
        } else {
            persons.len()
        };

        let severity = severity_for(flags, &persons, &self.registry);

        debug!(
            event_id,
            camera_id = %frame.camera_id,
            ?event_type,
            ?severity,
            "event built"
        );

        Event {
            event_id,
            camera_id: frame.camera_id.clone(),
            event_type,
            start_time: ts,
            end_time: ts,
            duration_sec: 0.0,
            objects_summary: ObjectsSummary {
                person_count,
                has_box: flags.has_box,
                has_weapon: flags.has_weapon,
            },
            person_info: persons,
            severity,
            snapshot_url,
            caption: String::new(),
        }
    }
}

/// Severity rules. Weapon-free frames are always `normal`; with a weapon,
/// an uncharacterized or non-friend presence, or a blacklisted name,
/// escalates to `danger`, otherwise `attention`.
fn severity_for(
    flags: DetectionFlags,
    persons: &[PersonInfo],
    registry: &DangerRegistry,
) -> Severity {
    if !flags.has_weapon {
        return Severity::Normal;
    }

    // An empty person list means whoever holds the weapon is unidentified.
    let any_unknown = persons.is_empty() || persons.iter().any(|p| !p.is_friend());
    let any_blacklisted = persons
        .iter()
        .filter_map(|p| p.name.as_deref())
        .any(|name| registry.contains(name));

    if any_unknown || any_blacklisted {
        Severity::Danger
    } else {
        Severity::Attention
    }
}
