use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    store: StoreHealth,
}

#[derive(Serialize)]
pub struct StoreHealth {
    status: String,
    collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks the job store with a 5 second timeout. Failure details go to the
/// logs only; upstream responses are never echoed.
/// Returns 200 OK if the store answers, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (store_status, error) = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        state.store.ping(&state.collection),
    )
    .await
    {
        Ok(Ok(())) => ("ok", None),
        Ok(Err(e)) => {
            tracing::warn!(error = %format!("{:#}", e), "Health check: store query failed");
            ("error", Some("Store query failed".to_string()))
        }
        Err(_) => {
            tracing::warn!("Health check: store query timed out");
            ("error", Some("Store query timeout (>5s)".to_string()))
        }
    };

    let is_healthy = error.is_none();

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            store: StoreHealth {
                status: store_status.to_string(),
                collection: state.collection.clone(),
                error,
            },
        }),
    )
}
