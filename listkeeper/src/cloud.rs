//! Cloud sync client
//!
//! One user-scoped endpoint, `{endpoint}/users/{user_id}/lists`:
//! - `GET` returns the stored copy
//! - `POST` replaces it with `{listsJSON, settingsJSON}`
//! - `DELETE` removes it
//!
//! Lists and settings travel as JSON *strings* inside the body, produced by the
//! same mapping as the storage file. Any answer is either that data or a
//! `{message}` object.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::CloudConfig;
use crate::error::{Error, Result};
use crate::state::Settings;
use crate::storage::{
    lists_from_json, lists_to_json, settings_from_json, settings_to_json, Document,
};

/// Request and response body carrying a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudBody {
    #[serde(rename = "listsJSON")]
    pub lists_json: String,
    #[serde(rename = "settingsJSON", default, skip_serializing_if = "Option::is_none")]
    pub settings_json: Option<String>,
}

impl CloudBody {
    pub fn from_document(document: &Document) -> Result<Self> {
        Ok(Self {
            lists_json: lists_to_json(&document.lists)?,
            settings_json: Some(settings_to_json(&document.settings)?),
        })
    }

    /// Missing settings fall back to the defaults.
    pub fn into_document(self) -> Result<Document> {
        let lists = lists_from_json(&self.lists_json)?;
        let settings = match self.settings_json.as_deref() {
            Some(json) if !json.trim().is_empty() => settings_from_json(json)?,
            _ => Settings::default(),
        };
        Ok(Document::new(lists, settings))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CloudResponse {
    Data(CloudBody),
    Message { message: String },
}

/// Decoded answer of the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum CloudReply {
    Message(String),
    Document(Document),
}

impl CloudReply {
    /// Decode a response body.
    ///
    /// An empty body (typical for `DELETE`) is reported as `"OK"`.
    pub fn decode(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(CloudReply::Message("OK".to_string()));
        }
        match serde_json::from_str(body)? {
            CloudResponse::Data(data) => Ok(CloudReply::Document(data.into_document()?)),
            CloudResponse::Message { message } => Ok(CloudReply::Message(message)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    url: String,
}

impl CloudClient {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: &CloudConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: lists_url(&config.endpoint, &config.user_id),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<CloudReply> {
        tracing::debug!(url = %self.url, "fetching cloud copy");
        let response = self.http.get(&self.url).send().await?;
        Self::read(response).await
    }

    pub async fn push(&self, document: &Document) -> Result<CloudReply> {
        tracing::debug!(url = %self.url, lists = document.lists.len(), "pushing cloud copy");
        let body = CloudBody::from_document(document)?;
        let response = self.http.post(&self.url).json(&body).send().await?;
        Self::read(response).await
    }

    pub async fn delete(&self) -> Result<CloudReply> {
        tracing::debug!(url = %self.url, "deleting cloud copy");
        let response = self.http.delete(&self.url).send().await?;
        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<CloudReply> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = %status, "cloud request failed");
            return Err(Error::Cloud(error_message(status, &body)));
        }
        CloudReply::decode(&body)
    }
}

fn lists_url(endpoint: &str, user_id: &str) -> String {
    format!(
        "{}/users/{}/lists",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(user_id)
    )
}

/// Prefer the endpoint's own `{message}` over the bare status line.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<CloudResponse>(body) {
        Ok(CloudResponse::Message { message }) => format!("{status}: {message}"),
        _ => status.to_string(),
    }
}
