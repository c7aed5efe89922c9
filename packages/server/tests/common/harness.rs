//! In-process test harness: the real router over a mock job store.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use jobboard_core::kernel::test_dependencies::MockJobStore;
use jobboard_core::server::{build_app, AppState};
use jobboard_core::DashboardConfig;
use serde_json::Value;
use tower::ServiceExt;

use super::sample_batches;

pub const COLLECTION: &str = "emeajobs";

pub struct TestHarness {
    pub router: Router,
    pub store: Arc<MockJobStore>,
}

impl TestHarness {
    pub fn with_store(store: MockJobStore) -> Self {
        Self::with_config(store, DashboardConfig::default())
    }

    pub fn with_config(store: MockJobStore, config: DashboardConfig) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), COLLECTION, config);
        Self {
            router: build_app(state, false),
            store,
        }
    }

    /// Harness serving the standard sample batches
    pub fn sample() -> Self {
        let store = sample_batches()
            .into_iter()
            .fold(MockJobStore::new(), |store, batch| store.with_jobs(batch));
        Self::with_store(store)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }
}
