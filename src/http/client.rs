//! HTTP transport for the CarsXE client
//!
//! A thin wrapper around `reqwest` that handles:
//! - URL construction from base, path, and query pairs
//! - A uniform request timeout
//! - Status classification: non-2xx responses keep their raw body

use crate::error::{Error, Result};
use crate::types::JsonValue;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, applied uniformly to every request
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("carsxe-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client enforcing the transport contract
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request and return the raw response body
    pub async fn get(&self, url: Url) -> Result<String> {
        self.send(self.client.get(url)).await
    }

    /// Make a POST request with a JSON body and return the raw response body.
    ///
    /// `Content-Type: application/json` is set by the body encoder.
    pub async fn post_json(&self, url: Url, body: &JsonValue) -> Result<String> {
        self.send(self.client.post(url).json(body)).await
    }

    /// Send a request and apply the status contract.
    ///
    /// Transport failures (including timeout) map to [`Error::Network`].
    /// Non-2xx responses map to [`Error::HttpStatus`] with the raw body
    /// retained and no JSON parse attempted. 2xx responses return the body.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Request failed with HTTP {}", status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {}", status.as_u16());
        Ok(response.text().await?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build a request URL from base, path, and query pairs.
///
/// Duplicate slashes at the join are trimmed. Query pairs are appended in
/// the order given; the caller is responsible for putting `key` and `source`
/// last. Fails with [`Error::InvalidUrl`] when base and path do not form a
/// well-formed URL.
pub fn build_url(base: &str, path: &str, query: &[(String, String)]) -> Result<Url> {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut url = Url::parse(&format!("{base}/{path}"))?;

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    Ok(url)
}
