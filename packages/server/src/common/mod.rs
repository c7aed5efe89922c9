// Common types and utilities shared across the application

pub mod contact;
pub mod staleness;
pub mod utils;

pub use contact::{extract_emails, has_email, highlight_emails};
pub use staleness::is_very_old;
