use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Current live status for dashboard polling
pub async fn latest_status(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(state.monitor.status()))
}

/// Acknowledge the current alert, clearing the danger and attention flags.
///
/// The last-event fields and current state are left untouched.
pub async fn ack_alert(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    state.monitor.acknowledge();
    Ok(Json(json!({ "status": "ok" })))
}
