//! API Gateway Library
//!
//! The HTTP route layer of SheTrade Connect: validates requests, calls the
//! storage engine and auth use cases, and shapes JSON responses.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use common::AppResult;
use storage_service_lib::{fixtures, MemStorage, Storage};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the store for a fresh process: seeded with the demo data unless
/// disabled.
pub async fn build_storage(config: &GatewayConfig) -> AppResult<MemStorage> {
    if !config.seed_fixtures {
        info!("Starting with an empty store");
        return Ok(MemStorage::new());
    }

    let owner_password = config.password_scheme().hash(fixtures::DEMO_PASSWORD)?;
    let storage = MemStorage::seeded(owner_password).await?;

    let counts = storage.counts().await?;
    info!(
        users = counts.users,
        products = counts.products,
        suppliers = counts.suppliers,
        procurements = counts.procurements,
        financial_offers = counts.financial_offers,
        forum_posts = counts.forum_posts,
        learning_resources = counts.learning_resources,
        "Fixtures loaded"
    );

    Ok(storage)
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = config.password_scheme();
    if !scheme.is_production_safe() {
        warn!("ALLOW_PLAINTEXT_PASSWORDS is set: credentials are stored in the clear. Do not use in production");
    }

    let storage: Arc<dyn Storage> = Arc::new(build_storage(&config).await?);
    let addr: SocketAddr = config.service.addr().parse()?;

    // Create app state
    let state = AppState::with_storage(storage, config);

    // Build router
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
