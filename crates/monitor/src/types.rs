//! Event and status records produced by the monitor.

use chrono::{DateTime, Utc};
use frames::PersonInfo;
use serde::{Deserialize, Serialize};

/// Kind of a finalized event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Visitor,
    Delivery,
    Threat,
}

/// Severity assigned at event-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Attention,
    Danger,
}

/// Outer pipeline state reported alongside every processed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OuterState {
    Idle,
    EventActive,
    ThreatActive,
}

/// Compact object summary attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectsSummary {
    pub person_count: usize,
    #[serde(rename = "box")]
    pub has_box: bool,
    #[serde(rename = "weapon")]
    pub has_weapon: bool,
}

/// A finalized event. Immutable once it reaches the status board's history;
/// before that it is exclusively owned by the tracker building it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Monotonic, globally unique, 1-based.
    pub event_id: u64,
    pub camera_id: String,
    pub event_type: EventType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_sec: f64,
    pub objects_summary: ObjectsSummary,
    pub person_info: Vec<PersonInfo>,
    pub severity: Severity,
    /// Opaque client-facing snapshot reference; `None` when snapshot
    /// persistence failed or no image arrived with the trigger frame.
    pub snapshot_url: Option<String>,
    /// Attached by the status board once severity and content are fixed.
    #[serde(default)]
    pub caption: String,
}

/// The single live status record for a deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveStatus {
    pub current_state: OuterState,
    pub danger: bool,
    pub needs_attention: bool,
    pub last_event_id: Option<u64>,
    pub last_event_type: Option<EventType>,
    pub last_event_severity: Severity,
    pub last_event_caption: Option<String>,
    pub latest_snapshot_url: Option<String>,
}

impl Default for LiveStatus {
    fn default() -> Self {
        Self {
            current_state: OuterState::Idle,
            danger: false,
            needs_attention: false,
            last_event_id: None,
            last_event_type: None,
            last_event_severity: Severity::Normal,
            last_event_caption: None,
            latest_snapshot_url: None,
        }
    }
}

/// Signed seconds elapsed from `start` to `end`, with sub-second precision.
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0
}
