use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Request to add or remove a danger list entry
#[derive(Debug, Deserialize)]
pub struct DangerUpdateRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Current danger list, sorted.
pub async fn get_danger_list(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "dangerous_persons": state.monitor.registry().names()
    })))
}

/// Add or remove a name. Both operations are idempotent; the updated list
/// is persisted before the response is sent.
pub async fn update_danger_list(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<DangerUpdateRequest>,
) -> ServerResult<impl IntoResponse> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ServerError::BadRequest("name required".to_string()))?;

    let registry = state.monitor.registry();
    match request.action.as_deref() {
        Some("add") => registry.add(name)?,
        Some("remove") => registry.remove(name)?,
        _ => return Err(ServerError::BadRequest("invalid action".to_string())),
    }

    Ok(Json(json!({
        "status": "ok",
        "dangerous_persons": registry.names()
    })))
}
