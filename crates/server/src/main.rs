//! Doorwatch Server - HTTP API for the doorbell camera event monitor
//!
//! This binary wires the frame-to-event pipeline to an HTTP surface for
//! edge devices and dashboard clients.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
