// TestDependencies - mock implementations for testing
//
// Provides an in-memory document store that can be injected into the app for tests.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::BaseJobStore;

// =============================================================================
// Mock Job Store
// =============================================================================

pub struct MockJobStore {
    documents: Arc<Mutex<Vec<Value>>>,
    failure: Option<String>,
    fetch_calls: Arc<Mutex<Vec<String>>>,
}

impl MockJobStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a raw document to be returned
    pub fn with_document(self, document: Value) -> Self {
        self.documents.lock().unwrap().push(document);
        self
    }

    /// Add a document of the form `{"jobs": [...]}`
    pub fn with_jobs(self, jobs: Vec<Value>) -> Self {
        self.with_document(serde_json::json!({ "jobs": jobs }))
    }

    /// Make every fetch fail with the given message
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Get all collections that were fetched
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

impl Default for MockJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseJobStore for MockJobStore {
    async fn fetch_documents(&self, collection: &str) -> Result<Vec<Value>> {
        self.fetch_calls
            .lock()
            .unwrap()
            .push(collection.to_string());

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        Ok(self.documents.lock().unwrap().clone())
    }
}
