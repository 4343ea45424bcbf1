use crate::config::ServerConfig;
use crate::danger_file::JsonDangerStore;
use crate::error::ServerResult;
use crate::snapshot::FsSnapshotStore;
use monitor::{DangerRegistry, Monitor};
use std::fs;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Frame-to-event pipeline (shared across requests)
    pub monitor: Arc<Monitor>,
}

impl ServerState {
    /// Create new server state
    ///
    /// Creates the on-disk layout under `data_dir`, seeds the danger
    /// registry from its persisted file, and wires the monitor to the
    /// filesystem snapshot store.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        fs::create_dir_all(config.events_dir())?;
        fs::create_dir_all(config.tmp_dir())?;

        let registry = Arc::new(DangerRegistry::load(Box::new(JsonDangerStore::new(
            config.danger_list_path(),
        )))?);
        let snapshots = Arc::new(FsSnapshotStore::new(config.events_dir()));

        let monitor = Arc::new(Monitor::new(
            config.monitor.clone(),
            config.flags.clone(),
            registry,
            snapshots,
        )?);

        Ok(Self {
            config: Arc::new(config),
            monitor,
        })
    }
}
