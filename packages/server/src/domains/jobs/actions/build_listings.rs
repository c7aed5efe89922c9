use std::collections::HashSet;

use tracing::debug;

use crate::domains::jobs::filter::JobFilter;
use crate::domains::jobs::models::{JobListing, JobPosting, RawJobPosting};

/// Turn raw postings into display listings.
///
/// Incomplete postings are dropped, then exact duplicates (first occurrence
/// wins), then contact emails are extracted and the filter applied. Order is
/// preserved throughout.
pub fn build_listings(raws: Vec<RawJobPosting>, filter: &JobFilter) -> Vec<JobListing> {
    let fetched = raws.len();

    let complete: Vec<JobPosting> = raws.into_iter().filter_map(JobPosting::from_raw).collect();
    let complete_count = complete.len();

    let mut seen = HashSet::new();
    let unique: Vec<JobPosting> = complete
        .into_iter()
        .filter(|posting| seen.insert(posting.clone()))
        .collect();
    let unique_count = unique.len();

    let listings: Vec<JobListing> = unique
        .into_iter()
        .map(JobListing::from_posting)
        .filter(|listing| filter.matches(listing))
        .collect();

    debug!(
        fetched,
        complete = complete_count,
        unique = unique_count,
        shown = listings.len(),
        "Built job listings"
    );

    listings
}
