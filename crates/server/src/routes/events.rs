use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use frames::PersonInfo;
use monitor::{Event, EventType, Severity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for event listing
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Maximum number of events to return, newest kept
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Client-facing projection of a finalized event
#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub event_id: u64,
    pub event_type: EventType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub severity: Severity,
    pub caption: String,
    pub person_info: Vec<PersonInfo>,
    pub snapshot_url: Option<String>,
}

impl From<Event> for EventSummary {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            event_type: event.event_type,
            start_time: event.start_time,
            end_time: event.end_time,
            severity: event.severity,
            caption: event.caption,
            person_info: event.person_info,
            snapshot_url: event.snapshot_url,
        }
    }
}

/// List recent finalized events, oldest first.
pub async fn list_events(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<EventsQuery>,
) -> ServerResult<impl IntoResponse> {
    let events: Vec<EventSummary> = state
        .monitor
        .recent_events(query.limit)
        .into_iter()
        .map(EventSummary::from)
        .collect();
    Ok(Json(events))
}
