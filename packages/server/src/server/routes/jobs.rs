use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Serialize;

use crate::domains::jobs::{JobFilter, JobListing};
use crate::server::app::AppState;
use crate::server::error::DashboardError;

#[derive(Serialize)]
pub struct JobListingResponse {
    #[serde(flatten)]
    pub listing: JobListing,
    pub very_old: bool,
}

#[derive(Serialize)]
pub struct JobsResponse {
    pub count: usize,
    pub jobs: Vec<JobListingResponse>,
}

/// JSON view of the same listings the dashboard renders
pub async fn jobs_handler(
    Extension(state): Extension<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<JobsResponse>, DashboardError> {
    let listings = state.listings(&filter).await?;

    let jobs: Vec<JobListingResponse> = listings
        .into_iter()
        .map(|listing| JobListingResponse {
            very_old: listing.is_very_old(),
            listing,
        })
        .collect();

    Ok(Json(JobsResponse {
        count: jobs.len(),
        jobs,
    }))
}
