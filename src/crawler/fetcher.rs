//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests returning the body text whatever the status code
//! - Classifying connection-level failures

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Connection-level failure while fetching a single URL
///
/// The crawler logs these and moves on; they never abort a crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Request { url: String, message: String },
}

impl FetchError {
    fn classify(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            Self::Timeout { url }
        } else if error.is_connect() {
            Self::Connect {
                url,
                message: error.to_string(),
            }
        } else if error.is_body() || error.is_decode() {
            Self::Body {
                url,
                message: error.to_string(),
            }
        } else {
            Self::Request {
                url,
                message: error.to_string(),
            }
        }
    }
}

/// Retrieves the raw content of a page
///
/// Implementations must return the response body for any HTTP status and reserve
/// `FetchError` for failures where no response body is available.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns its body as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Whole-request timeout
    pub timeout: Duration,

    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl FetcherConfig {
    /// Builds a config with the default 10 second connect timeout
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
            connect_timeout: Duration::from_secs(10).min(timeout),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed with reqwest's default policy; plain HTTP and HTTPS are
/// both allowed, the scheme of each URL selects the transport.
///
/// # Example
///
/// ```no_run
/// use sitemap_ripple::crawler::{build_http_client, FetcherConfig};
/// use std::time::Duration;
///
/// let config = FetcherConfig::new("sitemap-ripple/1.0", Duration::from_secs(30));
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// `PageFetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned HTTP {}, keeping body", url, status.as_u16());
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::classify(url, e))
    }
}
