//! is.gd provider

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::provider::Provider;

const ISGD_ENDPOINT: &str = "https://is.gd/create.php";

/// Built-in provider backed by the is.gd simple-format API.
pub struct IsGd {
    client: reqwest::Client,
    endpoint: String,
}

impl IsGd {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, ISGD_ENDPOINT)
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
impl Provider for IsGd {
    fn name(&self) -> Option<&str> {
        Some("isgd")
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "simple"), ("url", url)])
            .send()
            .await
            .map_err(|e| Error::upstream("isgd", e))?
            .error_for_status()
            .map_err(|e| Error::upstream("isgd", e))?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream("isgd", e))?;
        Ok(body.trim().to_string())
    }
}
