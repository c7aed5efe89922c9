use serde::Serialize;

use super::JobPosting;
use crate::common::{extract_emails, has_email, is_very_old};

/// A posting ready for display, with contact emails pulled out of its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub posting: JobPosting,
    /// Comma-separated emails found in the description; empty when none
    pub contact: String,
}

impl JobListing {
    pub fn from_posting(posting: JobPosting) -> Self {
        let contact = extract_emails(&posting.description).join(", ");
        Self { posting, contact }
    }

    pub fn has_contact(&self) -> bool {
        has_email(&self.contact)
    }

    pub fn is_very_old(&self) -> bool {
        is_very_old(&self.posting.posted_ago)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(description: &str) -> JobPosting {
        JobPosting {
            title: "Data Engineer".to_string(),
            company: "Globex".to_string(),
            location: "Berlin".to_string(),
            description: description.to_string(),
            link: "https://globex.de/careers/42".to_string(),
            posted_ago: "1 month ago".to_string(),
        }
    }

    #[test]
    fn joins_extracted_emails() {
        let listing =
            JobListing::from_posting(posting("Mail anna@globex.de or talent@globex.de"));
        assert_eq!(listing.contact, "anna@globex.de, talent@globex.de");
        assert!(listing.has_contact());
        assert!(listing.is_very_old());
    }

    #[test]
    fn no_emails_leaves_contact_empty() {
        let listing = JobListing::from_posting(posting("Apply online"));
        assert_eq!(listing.contact, "");
        assert!(!listing.has_contact());
    }
}
