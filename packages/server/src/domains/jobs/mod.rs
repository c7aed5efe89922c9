pub mod actions;
pub mod filter;
pub mod models;
pub mod render;

pub use actions::{build_listings, fetch_job_postings};
pub use filter::JobFilter;
pub use models::{JobListing, JobPosting, RawJobPosting};
