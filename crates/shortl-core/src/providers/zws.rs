//! zws.im provider

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::provider::Provider;

const ZWS_ENDPOINT: &str = "https://api.zws.im/";

/// Extended built-in provider backed by the zws.im API.
///
/// Unlike the GET-based providers, zws takes a JSON POST body and answers
/// with a JSON object whose `url` field holds the short URL.
pub struct Zws {
    client: reqwest::Client,
    endpoint: String,
}

impl Zws {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, ZWS_ENDPOINT)
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
impl Provider for Zws {
    fn name(&self) -> Option<&str> {
        Some("zws")
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(|e| Error::upstream("zws", e))?
            .error_for_status()
            .map_err(|e| Error::upstream("zws", e))?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::upstream("zws", e))?;
        body.get("url")
            .and_then(Value::as_str)
            .map(|short| short.trim().to_string())
            .ok_or_else(|| Error::UpstreamBody {
                provider: "zws",
                message: "missing url".to_string(),
            })
    }
}
