// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::domains::listings::data::seed;
use server_core::kernel::{
    MemoryBuyerStore, MemoryListingStore, MemorySellerStore, ServerDeps,
};
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Leadmart marketplace API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the listing catalog (seed file when configured, built-in sample
    // catalog otherwise)
    let listings = match &config.seed_path {
        Some(path) => {
            let listings =
                seed::load_listings(path).context("Failed to load listing seed file")?;
            tracing::info!(count = listings.len(), path = %path, "Seed file loaded");
            listings
        }
        None => {
            let listings = seed::builtin_listings();
            tracing::info!(count = listings.len(), "Using built-in sample catalog");
            listings
        }
    };

    // Wire up the in-memory stores
    let deps = Arc::new(ServerDeps::new(
        Arc::new(MemoryListingStore::new(listings)),
        Arc::new(MemoryBuyerStore::seeded()),
        Arc::new(MemorySellerStore::seeded()),
    ));

    // Build application
    let app = build_app(deps, config.allowed_origins.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Listings API: http://localhost:{}/api/listings", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
