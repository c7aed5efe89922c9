//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;
use crate::domains::jobs::{build_listings, fetch_job_postings, JobFilter, JobListing};
use crate::kernel::BaseJobStore;
use crate::server::error::DashboardError;
use crate::server::middleware::with_rate_limit;
use crate::server::routes::{dashboard_handler, health_handler, jobs_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BaseJobStore>,
    pub collection: String,
    pub dashboard: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BaseJobStore>,
        collection: impl Into<String>,
        dashboard: DashboardConfig,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            dashboard: Arc::new(dashboard),
        }
    }

    /// Fetch, clean and filter postings for one request
    pub async fn listings(&self, filter: &JobFilter) -> Result<Vec<JobListing>, DashboardError> {
        let raws = fetch_job_postings(self.store.as_ref(), &self.collection).await?;
        Ok(build_listings(raws, filter))
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState, rate_limit_enabled: bool) -> Router {
    // CORS configuration - read-only surface, any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET]);

    let mut router = Router::new()
        .route("/", get(dashboard_handler))
        .route("/api/jobs", get(jobs_handler));

    if rate_limit_enabled {
        router = with_rate_limit(router);
    }

    router
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
