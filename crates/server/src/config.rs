use frames::FlagConfig;
use monitor::MonitorConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB (frame posts carry inline JPEGs)
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Root directory for event snapshots, decoded frame images, and the
    /// persisted danger list
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Detection flag thresholds and weapon classes
    #[serde(default)]
    pub flags: FlagConfig,

    /// Threat and presence timing
    #[serde(default)]
    pub monitor: MonitorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            data_dir: default_data_dir(),
            flags: FlagConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("doorwatch").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("DOORWATCH_SERVER").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.flags.validate()?;
        config.monitor.validate()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    /// Directory holding per-event snapshot copies, served under
    /// `/events/img/`
    pub fn events_dir(&self) -> PathBuf {
        self.data_dir.join("events")
    }

    /// Scratch directory for the latest decoded frame image per camera
    pub fn tmp_dir(&self) -> PathBuf {
        self.data_dir.join("tmp")
    }

    /// Path of the persisted danger list
    pub fn danger_list_path(&self) -> PathBuf {
        self.data_dir.join("danger_list.json")
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
