use crate::error::MonitorError;
use serde::{Deserialize, Serialize};

/// Timing policy for the threat and presence state machines.
///
/// All durations are logical: they are compared against frame timestamps,
/// never against the wall clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// How long person+weapon must persist before a threat event fires.
    pub min_threat_duration_secs: f64,

    /// How long the weapon must stay absent before an armed/active threat
    /// decays back to none.
    pub threat_cooldown_secs: f64,

    /// Grace period after the subject disappears before a visitor/delivery
    /// event is finalized.
    pub event_end_cooldown_secs: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            min_threat_duration_secs: 3.0,
            threat_cooldown_secs: 5.0,
            event_end_cooldown_secs: 2.0,
        }
    }
}

impl MonitorConfig {
    /// Validate durations. Call once at startup.
    pub fn validate(&self) -> Result<(), MonitorError> {
        for (name, value) in [
            ("min_threat_duration_secs", self.min_threat_duration_secs),
            ("threat_cooldown_secs", self.threat_cooldown_secs),
            ("event_end_cooldown_secs", self.event_end_cooldown_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MonitorError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
