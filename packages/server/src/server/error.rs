use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the dashboard HTTP handlers
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Job store unavailable: {0:#}")]
    StoreUnavailable(#[from] anyhow::Error),
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::StoreUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to show to visitors (no upstream details)
    pub fn public_message(&self) -> &'static str {
        match self {
            DashboardError::StoreUnavailable(_) => {
                "Job postings are temporarily unavailable. Please try again later."
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}
