pub mod job_listing;
pub mod job_posting;

pub use job_listing::*;
pub use job_posting::*;
