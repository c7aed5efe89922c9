//! Jobs domain actions - fetch postings from the store and shape them for display.

pub mod build_listings;
pub mod fetch;

pub use build_listings::build_listings;
pub use fetch::fetch_job_postings;
