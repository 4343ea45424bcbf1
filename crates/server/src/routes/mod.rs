//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the doorwatch
//! server. Routes are organized by functionality:
//!
//! - `frames`: Frame result ingestion (the hot path)
//! - `status`: Live status polling and alert acknowledgement
//! - `events`: Event history listing
//! - `danger`: Danger list administration
//! - `health`: Health checks and readiness

pub mod danger;
pub mod events;
pub mod frames;
pub mod health;
pub mod status;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Doorwatch Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/frame_result",
            "/latest_status",
            "/events",
            "/events/img/{file}",
            "/ack_alert",
            "/danger_list",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
