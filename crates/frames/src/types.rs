//! Core data model for a single camera frame.
//!
//! `FrameRecord` is the normalized form handed to the monitor: the transport
//! layer has already parsed the timestamp, flattened `person_info`, and
//! decoded any inline image to a file path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One labeled detection inside a frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    /// Detector class label (e.g. `person`, `knife`, `package`).
    #[serde(default)]
    pub class_name: String,

    /// Numeric class id, when the detector reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,

    /// Detector confidence in `[0, 1]`. Missing values count as 0.
    #[serde(default)]
    pub confidence: f64,

    /// Pixel-space location, when reported. Not used by flag extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Center/extent bounding box as reported by the detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

/// One recognized (or unrecognized) person annotation.
///
/// The wire field is `type`; anything other than `"friend"` is treated as
/// unknown by the severity rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PersonInfo {
    /// Identity class, e.g. `friend` or `unknown`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display name, when recognition produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PersonInfo {
    /// True when this annotation is classified as a friend.
    pub fn is_friend(&self) -> bool {
        self.kind.as_deref() == Some("friend")
    }
}

/// A normalized, timestamped detection report from one camera.
#[derive(Debug, Clone)]
pub struct FrameRecord {
    /// Camera the frame came from. Frames for one camera must arrive in
    /// non-decreasing timestamp order.
    pub camera_id: String,

    /// Frame counter from the edge device, if any. Carried for logging only.
    pub frame_id: Option<i64>,

    /// Logical time of the frame. All state-machine timing derives from
    /// this, never from the wall clock.
    pub timestamp: DateTime<Utc>,

    /// Labeled detections for this frame.
    pub detections: Vec<Detection>,

    /// Normalized person annotations (see [`crate::normalize_person_info`]).
    pub persons: Vec<PersonInfo>,

    /// Decoded snapshot source on local disk, when the frame carried one.
    pub image_path: Option<PathBuf>,
}

/// Boolean facts derived from one frame's detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectionFlags {
    pub has_person: bool,
    pub has_box: bool,
    pub has_weapon: bool,
}
