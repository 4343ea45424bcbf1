//! Live status record and event history.

use crate::caption::describe_event;
use crate::types::{Event, LiveStatus, OuterState, Severity};
use tracing::info;

/// The deployment's single mutable status record plus the append-only
/// history of finalized events. Callers serialize access (the coordinator
/// keeps it behind a mutex) so readers always observe a fully applied
/// update.
#[derive(Debug, Default)]
pub struct StatusBoard {
    status: LiveStatus,
    history: Vec<Event>,
}

impl StatusBoard {
    /// Apply one processed frame's outcome.
    ///
    /// A finalized event gets its caption attached here, updates the
    /// `last_event_*` fields, raises the severity flags, and is appended to
    /// history. The outer state is recorded unconditionally.
    pub fn apply(&mut self, outer_state: OuterState, event: Option<Event>) {
        if let Some(mut event) = event {
            event.caption = describe_event(&event);

            self.status.last_event_id = Some(event.event_id);
            self.status.last_event_type = Some(event.event_type);
            self.status.last_event_severity = event.severity;
            self.status.last_event_caption = Some(event.caption.clone());
            self.status.latest_snapshot_url = event.snapshot_url.clone();

            match event.severity {
                Severity::Danger => {
                    self.status.danger = true;
                    self.status.needs_attention = false;
                }
                // Danger is sticky: a later attention event never demotes it.
                Severity::Attention if !self.status.danger => {
                    self.status.needs_attention = true;
                }
                _ => {}
            }

            info!(
                event_id = event.event_id,
                severity = ?event.severity,
                caption = %event.caption,
                "event recorded"
            );
            self.history.push(event);
        }

        self.status.current_state = outer_state;
    }

    /// Clear the alert flags. History and the current state are untouched.
    pub fn acknowledge(&mut self) {
        self.status.danger = false;
        self.status.needs_attention = false;
    }

    /// Snapshot of the live status.
    pub fn snapshot(&self) -> LiveStatus {
        self.status.clone()
    }

    /// The most recent `limit` finalized events, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<Event> {
        let start = self.history.len().saturating_sub(limit);
        self.history[start..].to_vec()
    }

    /// Total number of finalized events.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
