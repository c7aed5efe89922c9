//! Adapters from vendor clients to the kernel traits.

use anyhow::Result;
use async_trait::async_trait;
use firestore::FirestoreService;
use serde_json::Value;
use std::sync::Arc;

use crate::kernel::BaseJobStore;

// =============================================================================
// FirestoreService Adapter (implements BaseJobStore trait)
// =============================================================================

/// Wrapper around FirestoreService that implements BaseJobStore trait
pub struct FirestoreAdapter(pub Arc<FirestoreService>);

impl FirestoreAdapter {
    pub fn new(service: Arc<FirestoreService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseJobStore for FirestoreAdapter {
    async fn fetch_documents(&self, collection: &str) -> Result<Vec<Value>> {
        let documents = self.0.list_documents(collection).await?;
        Ok(documents.iter().map(|doc| doc.to_json()).collect())
    }

    /// Single one-document page; health checks stay cheap on large collections
    async fn ping(&self, collection: &str) -> Result<()> {
        self.0.check_collection(collection).await?;
        Ok(())
    }
}
