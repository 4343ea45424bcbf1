use thiserror::Error;

/// Errors surfaced by the monitor core.
///
/// State transitions themselves never fail; each camera is independently
/// recoverable, so the error surface is limited to configuration validation
/// and the external danger-list persistence seam.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MonitorError {
    /// A duration or threshold failed validation.
    #[error("invalid monitor configuration: {0}")]
    InvalidConfig(String),

    /// The external danger-list store failed to load or persist.
    #[error("danger list store failed: {0}")]
    DangerStore(String),
}
