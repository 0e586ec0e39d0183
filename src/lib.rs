//! Sitemap-Ripple: a breadth-first sitemap and robots.txt generator
//!
//! This crate crawls a website from a base URL, following same-origin links up to a
//! bounded depth, and renders the visited pages as a `sitemap.xml` together with a
//! `robots.txt` that points at it.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sitemap-Ripple operations
///
/// Only fatal failures end up here. Fetch failures and unresolvable links are
/// handled inside the crawl and never reach the caller.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Malformed option '{0}', expected key=value")]
    MalformedOption(String),

    #[error("Unknown option key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// URL-specific errors
///
/// When raised while resolving an `href` this is the link resolution error: the
/// offending link is dropped and the crawl continues.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for Sitemap-Ripple operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::GenerateOptions;
pub use crawler::{crawl, Crawler, HttpFetcher, PageFetcher};
pub use output::{generate_sitemap_and_robots, generate_with_fetcher, OutputPaths};
pub use state::{PageRecord, VisitedIndex};
