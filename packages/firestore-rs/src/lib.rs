// Minimal Cloud Firestore REST client: service account auth and collection reads.
// https://cloud.google.com/firestore/docs/reference/rest

pub mod models;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

pub use crate::models::{decode_value, Document, ServiceAccountKey};
use crate::models::{ListDocumentsResponse, TokenResponse};

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: &str = "300";

#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Request to Firestore failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Firestore returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode Firestore response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, FirestoreError>;

#[derive(Debug, Clone)]
pub struct FirestoreOptions {
    pub project_id: String,
    pub database: String,
    pub credentials: Option<ServiceAccountKey>,
    /// `host:port` of a local emulator; skips OAuth entirely when set
    pub emulator_host: Option<String>,
}

impl FirestoreOptions {
    pub fn new(project_id: impl Into<String>, credentials: ServiceAccountKey) -> Self {
        Self {
            project_id: project_id.into(),
            database: "(default)".to_string(),
            credentials: Some(credentials),
            emulator_host: None,
        }
    }

    pub fn emulator(project_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: "(default)".to_string(),
            credentials: None,
            emulator_host: Some(host.into()),
        }
    }

    fn base_url(&self) -> String {
        match &self.emulator_host {
            Some(host) => format!("http://{}/v1", host.trim_end_matches('/')),
            None => FIRESTORE_BASE_URL.to_string(),
        }
    }

    /// `.../projects/{p}/databases/{d}/documents/{collection}`
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url(),
            self.project_id,
            self.database,
            collection.trim_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    refresh_at: i64,
}

#[derive(Debug)]
pub struct FirestoreService {
    options: FirestoreOptions,
    client: Client,
    token: Mutex<Option<CachedToken>>,
}

impl FirestoreService {
    pub fn new(options: FirestoreOptions) -> Self {
        Self {
            options,
            client: Client::new(),
            token: Mutex::new(None),
        }
    }

    pub fn options(&self) -> &FirestoreOptions {
        &self.options
    }

    /// Stream every document of a collection, following page tokens.
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .fetch_page(collection, PAGE_SIZE, page_token.as_deref())
                .await?;

            documents.extend(page.documents);

            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        Ok(documents)
    }

    /// Read at most one document with a single request; never follows page tokens.
    pub async fn check_collection(&self, collection: &str) -> Result<()> {
        self.fetch_page(collection, "1", None).await.map(|_| ())
    }

    async fn fetch_page(
        &self,
        collection: &str,
        page_size: &str,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse> {
        let token = self.access_token().await?;

        let mut request = self
            .client
            .get(self.options.collection_url(collection))
            .bearer_auth(token)
            .query(&[("pageSize", page_size)]);
        if let Some(page) = page_token {
            request = request.query(&[("pageToken", page)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FirestoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let page: ListDocumentsResponse = response
            .json()
            .await
            .map_err(|e| FirestoreError::Decode(e.to_string()))?;

        tracing::debug!(
            collection,
            documents = page.documents.len(),
            has_next = page.next_page_token.is_some(),
            "Fetched Firestore page"
        );

        Ok(page)
    }

    async fn access_token(&self) -> Result<String> {
        if self.options.emulator_host.is_some() {
            return Ok("owner".to_string());
        }

        let mut cached = self.token.lock().await;
        let now = Utc::now().timestamp();
        if let Some(token) = cached.as_ref() {
            if now < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.exchange_token().await?;
        let value = fresh.access_token.clone();
        *cached = Some(CachedToken {
            value: fresh.access_token,
            // refresh a minute early
            refresh_at: now + fresh.expires_in - 60,
        });
        Ok(value)
    }

    async fn exchange_token(&self) -> Result<TokenResponse> {
        let key = self
            .options
            .credentials
            .as_ref()
            .ok_or_else(|| FirestoreError::Auth("no service account credentials".to_string()))?;

        let assertion = sign_assertion(key)?;

        let response = self
            .client
            .post(&key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FirestoreError::Auth(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| FirestoreError::Decode(e.to_string()))
    }
}

/// Build the RS256 JWT bearer assertion for the OAuth token exchange.
fn sign_assertion(key: &ServiceAccountKey) -> Result<String> {
    let now = Utc::now();
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: DATASTORE_SCOPE,
        aud: &key.token_uri,
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| FirestoreError::Auth(format!("invalid private key: {}", e)))?;

    encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|e| FirestoreError::Auth(e.to_string()))
}
