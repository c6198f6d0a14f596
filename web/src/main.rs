//! Todoql GraphQL server.
//!
//! Serves the todo schema over HTTP. The store is in-memory only and is
//! lost on restart.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin todoql-server
//! # GraphQL endpoint: http://localhost:4000/graphql
//! ```

use std::sync::Arc;
use todoql_core::TodoStore;
use todoql_web::{build_router, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todoql_web=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting todoql GraphQL server");

    // Load configuration
    let config = Config::from_env();
    info!(host = %config.server.host, port = config.server.port, "Configuration loaded");

    // One store per process, shared with the gateway by handle
    let store = Arc::new(TodoStore::new());
    let app = build_router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server ready at http://{addr}/graphql");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on ctrl-c.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
    }
}
