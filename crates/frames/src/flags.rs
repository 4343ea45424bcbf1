//! Derivation of [`DetectionFlags`] from a frame's detection list.

use crate::config::FlagConfig;
use crate::types::{Detection, DetectionFlags};

/// Derive the boolean per-frame facts from a detection list.
///
/// A detection contributes to a flag only when its class name matches and
/// its confidence meets the configured threshold. Pure function; the caller
/// decides what the flags mean.
pub fn compute_flags(detections: &[Detection], cfg: &FlagConfig) -> DetectionFlags {
    let has_person = detections
        .iter()
        .any(|d| d.class_name == "person" && d.confidence >= cfg.person_threshold);

    let has_box = detections
        .iter()
        .any(|d| cfg.box_classes.contains(&d.class_name) && d.confidence >= cfg.box_threshold);

    let has_weapon = detections
        .iter()
        .any(|d| cfg.weapon_classes.contains(&d.class_name) && d.confidence >= cfg.weapon_threshold);

    DetectionFlags {
        has_person,
        has_box,
        has_weapon,
    }
}
