// Bank Transfers - Web Server
// Read-only REST API with Axum

use anyhow::{Context, Result};
use bank_transfers::api::{router, AppState};
use bank_transfers::{init_logging, registry, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config);

    // Seed before any request can be served
    let registry = registry::init()?;

    let app = router(AppState::new(registry), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("API: http://{}{}/bankTransfer/all", addr, config.api_prefix.trim_end_matches('/'));

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
