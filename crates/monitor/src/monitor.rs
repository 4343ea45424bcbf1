//! Frame-processing coordinator.
//!
//! Owns the per-camera state (threat machine + in-progress presence event),
//! the shared event builder, and the status board. Frames for one camera
//! are serialized behind that camera's lane lock; frames for different
//! cameras proceed in parallel.

use crate::builder::EventBuilder;
use crate::config::MonitorConfig;
use crate::danger::DangerRegistry;
use crate::error::MonitorError;
use crate::presence::{self, InProgressEvent};
use crate::snapshot::SnapshotStore;
use crate::status::StatusBoard;
use crate::threat::{self, CameraThreatState, ThreatStep};
use crate::types::{seconds_between, Event, EventType, LiveStatus, OuterState};
use dashmap::DashMap;
use frames::{compute_flags, DetectionFlags, FlagConfig, FrameRecord};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Per-camera state: the threat machine plus the open presence slot. Both
/// keyed stores are owned here and only ever touched under the lane lock.
#[derive(Debug, Default)]
struct CameraLane {
    threat: CameraThreatState,
    current: Option<InProgressEvent>,
}

/// The frame-to-event pipeline for one deployment.
pub struct Monitor {
    config: MonitorConfig,
    flag_config: FlagConfig,
    builder: EventBuilder,
    registry: Arc<DangerRegistry>,
    lanes: DashMap<String, Arc<Mutex<CameraLane>>>,
    board: Mutex<StatusBoard>,
}

impl Monitor {
    /// Create a monitor. Validates both configurations up front.
    pub fn new(
        config: MonitorConfig,
        flag_config: FlagConfig,
        registry: Arc<DangerRegistry>,
        snapshots: Arc<dyn SnapshotStore>,
    ) -> Result<Self, MonitorError> {
        config.validate()?;
        flag_config
            .validate()
            .map_err(|err| MonitorError::InvalidConfig(err.to_string()))?;
        Ok(Self {
            config,
            flag_config,
            builder: EventBuilder::new(registry.clone(), snapshots),
            registry,
            lanes: DashMap::new(),
            board: Mutex::new(StatusBoard::default()),
        })
    }

    /// Process one frame and return the updated live status.
    ///
    /// Flags are derived first, then the camera's threat machine runs; only
    /// when it falls through does presence merging see the frame. Either
    /// tracker may finalize at most one event, which is captioned and
    /// recorded by the status board.
    pub fn process_frame(&self, frame: &FrameRecord) -> LiveStatus {
        let flags = compute_flags(&frame.detections, &self.flag_config);
        debug!(
            camera_id = %frame.camera_id,
            frame_id = ?frame.frame_id,
            ?flags,
            "processing frame"
        );

        let lane = self
            .lanes
            .entry(frame.camera_id.clone())
            .or_default()
            .clone();
        let (outer_state, event) = {
            let mut lane = lane.lock().unwrap_or_else(|e| e.into_inner());
            self.step_lane(&mut lane, frame, flags)
        };

        let mut board = self.board.lock().unwrap_or_else(|e| e.into_inner());
        board.apply(outer_state, event);
        board.snapshot()
    }

    fn step_lane(
        &self,
        lane: &mut CameraLane,
        frame: &FrameRecord,
        flags: DetectionFlags,
    ) -> (OuterState, Option<Event>) {
        match threat::step(&mut lane.threat, frame.timestamp, flags, &self.config) {
            ThreatStep::Handled { state, window } => {
                let event = window.map(|w| {
                    let mut event =
                        self.builder
                            .build(EventType::Threat, frame.timestamp, frame, flags);
                    // The threat event spans the whole arming window, not
                    // just the trigger frame.
                    event.start_time = w.armed_at;
                    event.end_time = w.triggered_at;
                    event.duration_sec = seconds_between(w.armed_at, w.triggered_at);
                    event
                });
                (state, event)
            }
            ThreatStep::FellThrough { state } => {
                let event = presence::step(
                    &mut lane.current,
                    frame.timestamp,
                    flags,
                    &self.config,
                    |event_type| {
                        self.builder
                            .build(event_type, frame.timestamp, frame, flags)
                    },
                );
                (state, event)
            }
        }
    }

    /// Read-only snapshot of the live status.
    pub fn status(&self) -> LiveStatus {
        self.board
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot()
    }

    /// Clear the danger/attention alert flags.
    pub fn acknowledge(&self) {
        self.board
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .acknowledge();
    }

    /// The most recent `limit` finalized events, oldest first.
    pub fn recent_events(&self, limit: usize) -> Vec<Event> {
        self.board
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .recent(limit)
    }

    /// The danger registry this monitor's severity rules consult.
    pub fn registry(&self) -> &Arc<DangerRegistry> {
        &self.registry
    }
}
