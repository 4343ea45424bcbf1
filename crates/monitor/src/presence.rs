//! Visitor/delivery event merging with grace-period closing.
//!
//! Each camera holds at most one in-progress event. Consecutive
//! person-present frames extend it; once the subject disappears, a grace
//! timer runs against frame timestamps and the event is finalized when the
//! timer crosses the configured cooldown. Reappearance before that cancels
//! the pending closure and keeps extending the same event.

use crate::config::MonitorConfig;
use crate::types::{seconds_between, Event, EventType};
use chrono::{DateTime, Utc};
use frames::DetectionFlags;
use tracing::{debug, info};

/// A not-yet-finalized visitor/delivery event plus its closure timer.
#[derive(Debug, Clone)]
pub struct InProgressEvent {
    pub event: Event,
    /// Set when the subject disappears; cleared if they reappear before the
    /// grace period elapses.
    pub cooldown_started_at: Option<DateTime<Utc>>,
}

/// Advance one camera's presence tracker by one frame.
///
/// `build` is invoked only when a new event must be created; it allocates
/// the id and captures the snapshot. Returns the finalized event, if this
/// frame closed one.
pub fn step(
    slot: &mut Option<InProgressEvent>,
    ts: DateTime<Utc>,
    flags: DetectionFlags,
    cfg: &MonitorConfig,
    build: impl FnOnce(EventType) -> Event,
) -> Option<Event> {
    if flags.has_person {
        let event_type = if flags.has_box {
            EventType::Delivery
        } else {
            EventType::Visitor
        };

        match slot {
            None => {
                let event = build(event_type);
                debug!(event_id = event.event_id, ?event_type, "presence event opened");
                *slot = Some(InProgressEvent {
                    event,
                    cooldown_started_at: None,
                });
            }
            Some(ongoing) => {
                // Same subject still present: extend and cancel any pending
                // closure.
                ongoing.event.end_time = ts;
                ongoing.cooldown_started_at = None;
            }
        }
        return None;
    }

    let ongoing = slot.as_mut()?;
    match ongoing.cooldown_started_at {
        None => {
            ongoing.cooldown_started_at = Some(ts);
            None
        }
        Some(started) => {
            if seconds_between(started, ts) < cfg.event_end_cooldown_secs {
                return None;
            }
            let mut event = slot.take().map(|p| p.event)?;
            event.duration_sec = seconds_between(event.start_time, event.end_time);
            info!(
                event_id = event.event_id,
                duration_sec = event.duration_sec,
                "presence event finalized"
            );
            Some(event)
        }
    }
}
