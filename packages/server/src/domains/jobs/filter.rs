use serde::Deserialize;

use super::models::JobListing;

/// Sidebar filters, as submitted by the dashboard form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JobFilter {
    /// Case-insensitive substring of the job title
    pub title: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Only keep postings with at least one recruiter email
    #[serde(rename = "recruiter_email", deserialize_with = "checkbox")]
    pub require_recruiter_email: bool,
}

impl JobFilter {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        require_recruiter_email: bool,
    ) -> Self {
        Self {
            title: Some(title.into()),
            location: Some(location.into()),
            require_recruiter_email,
        }
    }

    /// Trimmed, lowercased title term, or `None` when blank
    pub fn title_term(&self) -> Option<String> {
        normalize(self.title.as_deref())
    }

    pub fn location_term(&self) -> Option<String> {
        normalize(self.location.as_deref())
    }

    pub fn matches(&self, listing: &JobListing) -> bool {
        if self.require_recruiter_email && !listing.has_contact() {
            return false;
        }

        if let Some(term) = self.title_term() {
            if !listing.posting.title.to_lowercase().contains(&term) {
                return false;
            }
        }

        if let Some(term) = self.location_term() {
            if !listing.posting.location.to_lowercase().contains(&term) {
                return false;
            }
        }

        true
    }
}

fn normalize(term: Option<&str>) -> Option<String> {
    let term = term?.trim();
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// HTML checkboxes submit `on` when ticked and nothing otherwise.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref().map(str::to_lowercase).as_deref(),
        Some("on" | "true" | "1" | "yes")
    ))
}
