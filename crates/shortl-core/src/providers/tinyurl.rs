//! TinyURL provider

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::provider::Provider;

const TINYURL_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

/// Built-in provider backed by the TinyURL create API.
pub struct TinyUrl {
    client: reqwest::Client,
    endpoint: String,
}

impl TinyUrl {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, TINYURL_ENDPOINT)
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
impl Provider for TinyUrl {
    fn name(&self) -> Option<&str> {
        Some("tinyurl")
    }

    async fn shorten(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| Error::upstream("tinyurl", e))?
            .error_for_status()
            .map_err(|e| Error::upstream("tinyurl", e))?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream("tinyurl", e))?;
        Ok(body.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn passes_url_as_query_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api-create.php"))
            .and(query_param("url", "https://example.com/long"))
            .respond_with(ResponseTemplate::new(200).set_body_string("https://tinyurl.com/xyz"))
            .mount(&server)
            .await;

        let provider = TinyUrl::with_endpoint(
            reqwest::Client::new(),
            format!("{}/api-create.php", server.uri()),
        );
        let short = provider.shorten("https://example.com/long").await.unwrap();
        assert_eq!(short, "https://tinyurl.com/xyz");
    }

    #[tokio::test]
    async fn error_status_is_an_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api-create.php"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let provider = TinyUrl::with_endpoint(
            reqwest::Client::new(),
            format!("{}/api-create.php", server.uri()),
        );
        let err = provider.shorten("not-a-url").await.unwrap_err();
        assert!(matches!(err, Error::Upstream { provider: "tinyurl", .. }));
    }
}
