use axum::{
    extract::{Extension, Query},
    response::{Html, IntoResponse, Response},
};

use crate::domains::jobs::render::{render_error_page, render_page, PageModel};
use crate::domains::jobs::JobFilter;
use crate::server::app::AppState;

/// Dashboard page: sidebar filters plus the card grid
pub async fn dashboard_handler(
    Extension(state): Extension<AppState>,
    Query(filter): Query<JobFilter>,
) -> Response {
    match state.listings(&filter).await {
        Ok(listings) => {
            tracing::info!(shown = listings.len(), ?filter, "Rendering dashboard");
            Html(render_page(&PageModel {
                config: &state.dashboard,
                filter: &filter,
                listings: &listings,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load job postings");
            (
                e.status(),
                Html(render_error_page(&state.dashboard, e.public_message())),
            )
                .into_response()
        }
    }
}
