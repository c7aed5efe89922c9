use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use firestore::{FirestoreOptions, ServiceAccountKey};
use std::env;

/// Firestore connection settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub credentials: Option<ServiceAccountKey>,
    pub emulator_host: Option<String>,
}

impl StoreConfig {
    pub fn firestore_options(&self) -> FirestoreOptions {
        FirestoreOptions {
            project_id: self.project_id.clone(),
            database: self.database.clone(),
            credentials: self.credentials.clone(),
            emulator_host: self.emulator_host.clone(),
        }
    }
}

/// Sidebar card describing who runs the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperContact {
    pub name: String,
    pub email: Option<String>,
    pub links: Vec<(String, String)>,
}

/// Presentation settings for the dashboard page
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub page_title: String,
    pub heading: String,
    pub cards_per_row: usize,
    pub description_preview_chars: usize,
    pub developer_contact: Option<DeveloperContact>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: "Jobs in EU".to_string(),
            heading: "Handpicked Jobs in Europe".to_string(),
            cards_per_row: 4,
            description_preview_chars: 50,
            developer_contact: None,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreConfig,
    pub dashboard: DashboardConfig,
    pub rate_limit_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; `from_env` passes the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let emulator_host = lookup("FIRESTORE_EMULATOR_HOST");
        let credentials = load_credentials(&lookup)?;

        if credentials.is_none() && emulator_host.is_none() {
            bail!("FIREBASE_CONFIG or GOOGLE_APPLICATION_CREDENTIALS must be set");
        }

        let project_id = match lookup("FIRESTORE_PROJECT_ID") {
            Some(id) => id,
            None => credentials
                .as_ref()
                .and_then(|key| key.project_id.clone())
                .context("FIRESTORE_PROJECT_ID must be set")?,
        };

        let defaults = DashboardConfig::default();
        let cards_per_row: usize = lookup("CARDS_PER_ROW")
            .unwrap_or_else(|| defaults.cards_per_row.to_string())
            .parse()
            .context("CARDS_PER_ROW must be a valid number")?;
        if cards_per_row == 0 {
            bail!("CARDS_PER_ROW must be at least 1");
        }

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            store: StoreConfig {
                project_id,
                database: lookup("FIRESTORE_DATABASE").unwrap_or_else(|| "(default)".to_string()),
                collection: lookup("FIRESTORE_COLLECTION")
                    .unwrap_or_else(|| "emeajobs".to_string()),
                credentials,
                emulator_host,
            },
            dashboard: DashboardConfig {
                page_title: lookup("PAGE_TITLE").unwrap_or(defaults.page_title),
                heading: lookup("PAGE_HEADING").unwrap_or(defaults.heading),
                cards_per_row,
                description_preview_chars: lookup("DESCRIPTION_PREVIEW_CHARS")
                    .unwrap_or_else(|| defaults.description_preview_chars.to_string())
                    .parse()
                    .context("DESCRIPTION_PREVIEW_CHARS must be a valid number")?,
                developer_contact: lookup("CONTACT_NAME").map(|name| DeveloperContact {
                    name,
                    email: lookup("CONTACT_EMAIL"),
                    links: lookup("CONTACT_LINKS")
                        .map(|raw| parse_contact_links(&raw))
                        .unwrap_or_default(),
                }),
            },
            rate_limit_enabled: lookup("RATE_LIMIT_ENABLED")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no" | "off"))
                .unwrap_or(true),
        })
    }
}

/// Inline `FIREBASE_CONFIG` JSON wins over a `GOOGLE_APPLICATION_CREDENTIALS` path
fn load_credentials<F>(lookup: &F) -> Result<Option<ServiceAccountKey>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(json) = lookup("FIREBASE_CONFIG") {
        let key = ServiceAccountKey::from_json(&json)
            .context("FIREBASE_CONFIG is not a valid service account key")?;
        return Ok(Some(key));
    }

    if let Some(path) = lookup("GOOGLE_APPLICATION_CREDENTIALS") {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read credentials file {}", path))?;
        let key = ServiceAccountKey::from_json(&json)
            .with_context(|| format!("{} is not a valid service account key", path))?;
        return Ok(Some(key));
    }

    Ok(None)
}

/// Parse `Label=url,Label=url`; entries without `=` are skipped
pub fn parse_contact_links(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| {
            let (label, url) = entry.split_once('=')?;
            let (label, url) = (label.trim(), url.trim());
            if label.is_empty() || url.is_empty() {
                return None;
            }
            Some((label.to_string(), url.to_string()))
        })
        .collect()
}
