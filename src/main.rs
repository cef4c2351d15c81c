//! Contact Book server - Main entry point
//!
//! Serves the contacts API and the prebuilt UI bundle.

use anyhow::Result;
use contact_book::{run_server, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Reads `.env` before the environment; a bad value aborts before logging starts.
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .init();
    info!(level = %config.log_level, "Configuration loaded successfully");

    match &config.data_file {
        Some(path) => info!("Persisting contacts to {}", path.display()),
        None => info!("Keeping contacts in memory"),
    }

    run_server(config).await?;

    info!("Contact Book server shutdown complete");
    Ok(())
}
