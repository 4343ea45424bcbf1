use thiserror::Error;

/// Errors produced by the frame layer.
///
/// Frame ingestion itself is deliberately infallible (malformed timestamps
/// and person-info degrade locally), so the only failure surface is
/// configuration validation at startup.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// A confidence threshold or class set failed validation.
    #[error("invalid flag configuration: {0}")]
    InvalidConfig(String),
}
