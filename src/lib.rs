//! Workspace umbrella crate for doorwatch.
//!
//! This crate stitches the frame layer and the monitor together so callers
//! can run the full detection-to-event pipeline with a single API entry
//! point, without touching the HTTP surface in `doorwatch-server`.

pub use frames::{
    compute_flags, normalize_person_info, parse_frame_timestamp, BoundingBox, Detection,
    DetectionFlags, FlagConfig, FrameError, FrameRecord, PersonInfo,
};
pub use monitor::{
    describe_event, DangerListStore, DangerRegistry, Event, EventType, LiveStatus,
    MemoryDangerStore, Monitor, MonitorConfig, MonitorError, NoopSnapshotStore, ObjectsSummary,
    OuterState, Severity, SnapshotStore,
};

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Build a monitor with default thresholds and timing, an empty in-memory
/// danger list, and no snapshot persistence.
///
/// Embedders that need persistence or custom timing construct
/// [`Monitor::new`] directly.
pub fn default_monitor() -> Result<Monitor, MonitorError> {
    Monitor::new(
        MonitorConfig::default(),
        FlagConfig::default(),
        Arc::new(DangerRegistry::in_memory()),
        Arc::new(NoopSnapshotStore),
    )
}

/// Normalize a loosely typed frame payload into a [`FrameRecord`].
///
/// Tolerates everything edge devices actually send: a missing `camera_id`
/// defaults to `cam1`, a missing or unparseable `timestamp` falls back to
/// the current time, malformed `detections` entries are dropped, and
/// `person_info` may be null, a single object, or a list. Inline images are
/// a transport concern and are not decoded here.
pub fn frame_from_value(value: &Value) -> FrameRecord {
    let camera_id = value["camera_id"].as_str().unwrap_or("cam1").to_string();
    let frame_id = value["frame_id"].as_i64();

    let timestamp = match value["timestamp"].as_str() {
        Some(raw) => parse_frame_timestamp(raw),
        None => Utc::now(),
    };

    let detections: Vec<Detection> = value["detections"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    let persons = normalize_person_info(&value["person_info"]);
    debug!(
        camera_id = %camera_id,
        detections = detections.len(),
        persons = persons.len(),
        "normalized raw frame"
    );

    FrameRecord {
        camera_id,
        frame_id,
        timestamp,
        detections,
        persons,
        image_path: None,
    }
}

/// Normalize a raw frame payload and run it through the monitor.
pub fn process_raw_frame(monitor: &Monitor, value: &Value) -> LiveStatus {
    let record = frame_from_value(value);
    monitor.process_frame(&record)
}
