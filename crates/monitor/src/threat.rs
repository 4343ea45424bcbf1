//! Per-camera threat state machine.
//!
//! Phases escalate `none → arming → active` while person+weapon frames keep
//! arriving, and decay back to `none` once the weapon has been absent for
//! the configured cooldown. Exactly one threat window is emitted per arming
//! episode, at the instant the minimum duration is first met.

use crate::config::MonitorConfig;
use crate::types::{seconds_between, OuterState};
use chrono::{DateTime, Utc};
use frames::DetectionFlags;
use tracing::info;

/// Escalation phase of one camera's threat machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreatPhase {
    #[default]
    None,
    Arming,
    Active,
}

/// Threat-machine state for one camera. Created lazily on the camera's
/// first frame and kept for the process lifetime.
///
/// `armed_at` is set while the phase is arming/active and cleared on decay;
/// `weapon_absent_since` tracks cooldown progress and is only set while the
/// weapon is missing during an armed episode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraThreatState {
    pub phase: ThreatPhase,
    pub armed_at: Option<DateTime<Utc>>,
    pub weapon_absent_since: Option<DateTime<Utc>>,
}

/// The arming window of a newly triggered threat event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatWindow {
    pub armed_at: DateTime<Utc>,
    pub triggered_at: DateTime<Utc>,
}

/// Outcome of stepping the threat machine for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatStep {
    /// The frame was consumed by the threat machine; presence merging is
    /// skipped. `window` is set exactly once per episode, on the
    /// arming→active transition.
    Handled {
        state: OuterState,
        window: Option<ThreatWindow>,
    },
    /// The threat machine is done with this frame (possibly after advancing
    /// its cooldown); presence merging still runs.
    FellThrough { state: OuterState },
}

/// Advance one camera's threat machine by one frame.
pub fn step(
    state: &mut CameraThreatState,
    ts: DateTime<Utc>,
    flags: DetectionFlags,
    cfg: &MonitorConfig,
) -> ThreatStep {
    if flags.has_person && flags.has_weapon {
        return match state.phase {
            ThreatPhase::None => {
                state.phase = ThreatPhase::Arming;
                state.armed_at = Some(ts);
                state.weapon_absent_since = None;
                info!(timestamp = %ts, "threat machine arming");
                ThreatStep::Handled {
                    state: OuterState::EventActive,
                    window: None,
                }
            }
            ThreatPhase::Arming => {
                // armed_at is always set in this phase; a missing value can
                // only mean corrupted state, so restart the episode.
                let armed_at = *state.armed_at.get_or_insert(ts);
                if seconds_between(armed_at, ts) >= cfg.min_threat_duration_secs {
                    state.phase = ThreatPhase::Active;
                    info!(armed_at = %armed_at, triggered_at = %ts, "threat active");
                    ThreatStep::Handled {
                        state: OuterState::ThreatActive,
                        window: Some(ThreatWindow {
                            armed_at,
                            triggered_at: ts,
                        }),
                    }
                } else {
                    ThreatStep::Handled {
                        state: OuterState::EventActive,
                        window: None,
                    }
                }
            }
            ThreatPhase::Active => {
                // Weapon is back in frame; any cooldown progress resets.
                state.weapon_absent_since = None;
                ThreatStep::Handled {
                    state: OuterState::ThreatActive,
                    window: None,
                }
            }
        };
    }

    match state.phase {
        ThreatPhase::None => ThreatStep::FellThrough {
            state: OuterState::Idle,
        },
        ThreatPhase::Arming | ThreatPhase::Active => {
            match state.weapon_absent_since {
                None => state.weapon_absent_since = Some(ts),
                Some(since) => {
                    if seconds_between(since, ts) >= cfg.threat_cooldown_secs {
                        *state = CameraThreatState::default();
                        info!(timestamp = %ts, "threat cooled down");
                    }
                }
            }
            // A threat that just decayed still reports event_active for
            // this frame; only a surviving active phase reports threat.
            let outer = if state.phase == ThreatPhase::Active {
                OuterState::ThreatActive
            } else {
                OuterState::EventActive
            };
            ThreatStep::FellThrough { state: outer }
        }
    }
}
