// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseJobStore)

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

// =============================================================================
// Document Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseJobStore: Send + Sync {
    /// Fetch every document in a collection as plain JSON objects, in store order
    async fn fetch_documents(&self, collection: &str) -> Result<Vec<Value>>;

    /// Reachability check used by the health endpoint.
    ///
    /// The default reads the whole collection; stores should override it with
    /// a bounded read.
    async fn ping(&self, collection: &str) -> Result<()> {
        self.fetch_documents(collection).await.map(|_| ())
    }
}
