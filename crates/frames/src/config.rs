use crate::error::FrameError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Confidence thresholds and class-name sets for flag extraction.
///
/// Cheap to clone and serializable so it can be loaded from the same
/// file/env configuration as the rest of the deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Minimum confidence for a `person` detection to count.
    pub person_threshold: f64,

    /// Minimum confidence for a box-like detection to count.
    pub box_threshold: f64,

    /// Minimum confidence for a weapon detection to count.
    pub weapon_threshold: f64,

    /// Class names treated as a package/box.
    pub box_classes: HashSet<String>,

    /// Class names treated as a weapon.
    pub weapon_classes: HashSet<String>,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            person_threshold: 0.60,
            box_threshold: 0.50,
            weapon_threshold: 0.50,
            box_classes: default_box_classes(),
            weapon_classes: default_weapon_classes(),
        }
    }
}

impl FlagConfig {
    /// Validate thresholds and class sets. Call once at startup.
    pub fn validate(&self) -> Result<(), FrameError> {
        for (name, value) in [
            ("person_threshold", self.person_threshold),
            ("box_threshold", self.box_threshold),
            ("weapon_threshold", self.weapon_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FrameError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.weapon_classes.is_empty() {
            return Err(FrameError::InvalidConfig(
                "weapon_classes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_box_classes() -> HashSet<String> {
    ["box", "package", "backpack"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_weapon_classes() -> HashSet<String> {
    [
        "knife", "scissors", "gun", "pistol", "rifle", "hammer", "bat", "axe",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
