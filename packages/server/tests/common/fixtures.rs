//! Job posting documents shaped the way the scraper stores them.

use serde_json::{json, Value};

pub fn job(title: &str, location: &str, description: &str, posted_ago: &str) -> Value {
    json!({
        "job-title": title,
        "company": "Acme Europe",
        "location": location,
        "Job_txt": description,
        "Job_Link": format!("https://jobs.acme.example/{}", title.to_lowercase().replace(' ', "-")),
        "posted-time-ago": posted_ago,
    })
}

/// Two scrape batches with one duplicate, one incomplete entry and one stale posting
pub fn sample_batches() -> Vec<Vec<Value>> {
    vec![
        vec![
            job(
                "Rust Engineer",
                "Amsterdam, Netherlands",
                "Build our trading core. Send your CV to talent@acme.example.com",
                "3 days ago",
            ),
            job(
                "Frontend Developer",
                "Berlin, Germany",
                "React and TypeScript, apply via the portal",
                "2 months ago",
            ),
            json!({"job-title": "Incomplete", "company": "Acme Europe"}),
        ],
        vec![
            job(
                "Rust Engineer",
                "Amsterdam, Netherlands",
                "Build our trading core. Send your CV to talent@acme.example.com",
                "3 days ago",
            ),
            job(
                "Site Reliability Engineer",
                "Lisbon, Portugal",
                "On-call rotation. Questions: ops-hiring@acme.example.com",
                "1 week ago",
            ),
        ],
    ]
}
