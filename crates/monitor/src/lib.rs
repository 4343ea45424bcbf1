//! Frame-to-event core for doorwatch.
//!
//! This crate owns the only temporal logic in the system: per-camera threat
//! escalation and cooldown, presence merging with grace-period closing,
//! severity and caption derivation, and the single live status record.
//! Time advances exclusively through the timestamps embedded in frames, so
//! all of it is testable without real waits.
//!
//! The entry point is [`Monitor::process_frame`]; everything else is a
//! stage it composes:
//!
//! - [`threat`] — per-camera `none → arming → active` state machine
//! - [`presence`] — visitor/delivery event merging and closure
//! - [`builder`] — event construction (id, snapshot, severity)
//! - [`caption`] — natural-language event captions
//! - [`status`] — live status record and append-only history
//! - [`danger`] — persisted set of dangerous person names

pub mod builder;
pub mod caption;
pub mod config;
pub mod danger;
pub mod error;
pub mod monitor;
pub mod presence;
pub mod snapshot;
pub mod status;
pub mod threat;
pub mod types;

pub use builder::EventBuilder;
pub use caption::describe_event;
pub use config::MonitorConfig;
pub use danger::{DangerListStore, DangerRegistry, MemoryDangerStore};
pub use error::MonitorError;
pub use monitor::Monitor;
pub use snapshot::{NoopSnapshotStore, SnapshotStore};
pub use status::StatusBoard;
pub use threat::{CameraThreatState, ThreatPhase, ThreatStep, ThreatWindow};
pub use types::{Event, EventType, LiveStatus, ObjectsSummary, OuterState, Severity};
