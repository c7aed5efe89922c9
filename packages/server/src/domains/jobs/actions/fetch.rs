use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domains::jobs::models::RawJobPosting;
use crate::kernel::BaseJobStore;

/// Read every document in `collection` and concatenate their `jobs` arrays.
///
/// Documents are visited in store order and each array keeps its own order.
/// A document without a `jobs` array contributes nothing; an entry that is
/// not a posting object is skipped.
pub async fn fetch_job_postings(
    store: &dyn BaseJobStore,
    collection: &str,
) -> Result<Vec<RawJobPosting>> {
    let documents = store
        .fetch_documents(collection)
        .await
        .with_context(|| format!("Failed to fetch documents from {}", collection))?;

    let mut postings = Vec::new();
    for (doc_index, document) in documents.iter().enumerate() {
        let Some(jobs) = document.get("jobs").and_then(Value::as_array) else {
            debug!(doc_index, "Document has no jobs array");
            continue;
        };

        for (job_index, job) in jobs.iter().enumerate() {
            match serde_json::from_value::<RawJobPosting>(job.clone()) {
                Ok(posting) => postings.push(posting),
                Err(e) => warn!(
                    doc_index,
                    job_index,
                    error = %e,
                    "Skipping malformed job posting"
                ),
            }
        }
    }

    debug!(
        collection,
        documents = documents.len(),
        postings = postings.len(),
        "Fetched job postings"
    );

    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::MockJobStore;
    use serde_json::json;

    #[tokio::test]
    async fn concatenates_jobs_across_documents_in_order() {
        let store = MockJobStore::new()
            .with_jobs(vec![json!({"job-title": "A"}), json!({"job-title": "B"})])
            .with_document(json!({"meta": "no jobs here"}))
            .with_jobs(vec![json!({"job-title": "C"})]);

        let postings = fetch_job_postings(&store, "emeajobs").await.unwrap();
        let titles: Vec<_> = postings.iter().map(|p| p.title.as_deref()).collect();

        assert_eq!(titles, vec![Some("A"), Some("B"), Some("C")]);
        assert_eq!(store.fetch_calls(), vec!["emeajobs".to_string()]);
    }

    #[tokio::test]
    async fn skips_entries_that_are_not_postings() {
        let store = MockJobStore::new().with_jobs(vec![
            json!("just a string"),
            json!({"job-title": 42}),
            json!({"job-title": "Kept"}),
        ]);

        let postings = fetch_job_postings(&store, "emeajobs").await.unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title.as_deref(), Some("Kept"));
    }

    #[tokio::test]
    async fn jobs_field_that_is_not_an_array_is_ignored() {
        let store = MockJobStore::new().with_document(json!({"jobs": {"job-title": "A"}}));

        let postings = fetch_job_postings(&store, "emeajobs").await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = MockJobStore::new().failing("permission denied");

        let err = fetch_job_postings(&store, "emeajobs").await.unwrap_err();
        assert!(format!("{:#}", err).contains("permission denied"));
    }
}
