//! ulvis.net provider

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::provider::Provider;

const ULVIS_ENDPOINT: &str = "https://ulvis.net/api.php";

/// Extended built-in provider backed by the ulvis.net JSON API.
///
/// The short URL sits at `data.url` in the response body.
pub struct Ulvis {
    client: reqwest::Client,
    endpoint: String,
}

impl Ulvis {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, ULVIS_ENDPOINT)
    }

    /// Point the provider at a different endpoint (tests, proxies).
    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Provider for Ulvis {
    fn name(&self) -> Option<&str> {
        Some("ulvis")
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url), ("type", "json")])
            .send()
            .await
            .map_err(|e| Error::upstream("ulvis", e))?
            .error_for_status()
            .map_err(|e| Error::upstream("ulvis", e))?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::upstream("ulvis", e))?;
        body.pointer("/data/url")
            .and_then(Value::as_str)
            .map(|short| short.trim().to_string())
            .ok_or_else(|| Error::UpstreamBody {
                provider: "ulvis",
                message: "missing data.url".to_string(),
            })
    }
}
