// Main entry point for the job board dashboard

use std::sync::Arc;

use anyhow::{Context, Result};
use firestore::FirestoreService;
use jobboard_core::{
    kernel::FirestoreAdapter,
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jobboard_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting job board dashboard");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        project = %config.store.project_id,
        collection = %config.store.collection,
        emulator = config.store.emulator_host.is_some(),
        "Configuration loaded"
    );

    // Connect the document store
    let firestore = Arc::new(FirestoreService::new(config.store.firestore_options()));
    let store = Arc::new(FirestoreAdapter::new(firestore));

    let state = AppState::new(store, config.store.collection.clone(), config.dashboard);
    let app = build_app(state, config.rate_limit_enabled);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Dashboard: http://localhost:{}/", config.port);
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
