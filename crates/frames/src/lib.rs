//! Frame layer for doorwatch.
//! Provides the wire-shaped frame data model, derivation of per-frame
//! detection flags, normalization of the loosely typed `person_info` field,
//! and tolerant timestamp parsing. Everything here is pure and side-effect
//! free; the state machines live in the `monitor` crate.

pub mod config;
pub mod error;
pub mod flags;
pub mod person;
pub mod time;
pub mod types;

pub use config::FlagConfig;
pub use error::FrameError;
pub use flags::compute_flags;
pub use person::normalize_person_info;
pub use time::parse_frame_timestamp;
pub use types::{BoundingBox, Detection, DetectionFlags, FrameRecord, PersonInfo};
