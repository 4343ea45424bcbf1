//! Doorwatch Server - HTTP API for the doorbell camera event monitor
//!
//! This crate exposes the doorwatch frame-to-event pipeline over HTTP. An
//! edge device posts per-frame detection results; the server maintains
//! per-camera threat and presence state, finalizes events, and serves the
//! live status, event history, and snapshots to dashboard clients.
//!
//! # Features
//!
//! - **Frame Ingestion**: Normalizes raw frame posts (timestamps, person
//!   annotations, inline JPEG snapshots) and feeds them to the monitor
//! - **Status & Alerts**: Live status polling and alert acknowledgement
//! - **Event History**: Recent finalized events with captions and snapshots
//! - **Danger List**: Persisted administration of blacklisted names
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /frame_result` - Ingest one frame's detection results
//! - `GET /latest_status` - Current live status
//! - `POST /ack_alert` - Clear alert flags
//! - `GET /events?limit=N` - Recent finalized events
//! - `GET /events/img/{file}` - Event snapshot images
//! - `GET /danger_list` - Current danger list
//! - `POST /danger_list` - Add or remove a danger list entry

pub mod config;
pub mod danger_file;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod snapshot;
pub mod state;

pub use config::ServerConfig;
pub use danger_file::JsonDangerStore;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use snapshot::FsSnapshotStore;
pub use state::ServerState;
