use serde::{Deserialize, Serialize};

/// A job posting exactly as stored in a document's `jobs` array.
///
/// Any field may be absent; incomplete postings are dropped before display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawJobPosting {
    #[serde(rename = "job-title")]
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "Job_txt")]
    pub description: Option<String>,
    #[serde(rename = "Job_Link")]
    pub link: Option<String>,
    #[serde(rename = "posted-time-ago")]
    pub posted_ago: Option<String>,
}

/// A complete job posting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub link: String,
    /// Free-text relative age, e.g. "2 weeks ago"
    pub posted_ago: String,
}

impl JobPosting {
    /// Returns `None` if any field is missing.
    pub fn from_raw(raw: RawJobPosting) -> Option<Self> {
        Some(Self {
            title: raw.title?,
            company: raw.company?,
            location: raw.location?,
            description: raw.description?,
            link: raw.link?,
            posted_ago: raw.posted_ago?,
        })
    }
}
