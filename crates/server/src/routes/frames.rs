use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use frames::{normalize_person_info, parse_frame_timestamp, Detection, FrameRecord};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// One frame's detection results as posted by an edge device
#[derive(Debug, Deserialize)]
pub struct FrameRequest {
    /// Camera identifier (defaults to `cam1` for single-camera setups)
    #[serde(default = "default_camera_id")]
    pub camera_id: String,

    /// Frame counter from the edge device
    #[serde(default)]
    pub frame_id: Option<i64>,

    /// Frame capture time, RFC 3339 preferred. Missing or unparseable
    /// timestamps fall back to the server clock.
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Raw detector output for this frame
    #[serde(default)]
    pub detections: Vec<Detection>,

    /// Recognition output: null, a single object, or a list of objects
    #[serde(default)]
    pub person_info: Value,

    /// Inline JPEG snapshot of the frame
    #[serde(default)]
    pub image_jpeg_base64: Option<String>,
}

fn default_camera_id() -> String {
    "cam1".to_string()
}

/// Ingest one frame result and return the updated live status.
///
/// This is the hot path: the edge device posts every analyzed frame here.
/// The request is normalized into a `FrameRecord` (timestamp parsed,
/// person_info flattened, inline image decoded to a scratch file) and fed
/// through the monitor. Image decode failures degrade to a frame without
/// a snapshot source; they never fail the request.
pub async fn frame_result(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<FrameRequest>,
) -> ServerResult<impl IntoResponse> {
    let timestamp = match request.timestamp.as_deref() {
        Some(raw) => parse_frame_timestamp(raw),
        None => Utc::now(),
    };

    let image_path = request
        .image_jpeg_base64
        .as_deref()
        .and_then(|encoded| decode_frame_image(&state, &request.camera_id, encoded));

    let record = FrameRecord {
        camera_id: request.camera_id,
        frame_id: request.frame_id,
        timestamp,
        detections: request.detections,
        persons: normalize_person_info(&request.person_info),
        image_path,
    };

    let status = state.monitor.process_frame(&record);
    Ok(Json(status))
}

/// Decode an inline JPEG to the camera's scratch file, overwriting the
/// previous frame's image.
fn decode_frame_image(state: &ServerState, camera_id: &str, encoded: &str) -> Option<PathBuf> {
    let raw = match BASE64.decode(encoded) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(camera_id = %camera_id, %err, "failed to decode frame image");
            return None;
        }
    };

    let path = state.config.tmp_dir().join(format!("latest_{camera_id}.jpg"));
    match std::fs::write(&path, raw) {
        Ok(()) => Some(path),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to write frame image");
            None
        }
    }
}
