//! Contact Book Server - Main entry point

use anyhow::Result;
use contact_book_server::repositories::ContactRepository;
use contact_book_server::services::ContactService;
use contact_book_server::{Config, ContactBookServer, ContactServiceImpl, InMemoryContactStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // stderr only, stdout carries MCP traffic
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Page size default {} (max {}), picture limit {} bytes",
        config.default_page_size, config.max_page_size, config.max_picture_bytes
    );

    let repository = Arc::new(InMemoryContactStore::new()) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(
        repository,
        Arc::new(mockable::DefaultClock),
        &config,
    )) as Arc<dyn ContactService>;

    let server = ContactBookServer::new(service);

    info!("Starting MCP server with stdio transport");
    contact_book_server::server::run_server(server).await?;

    info!("Contact Book Server shutdown complete");
    Ok(())
}
