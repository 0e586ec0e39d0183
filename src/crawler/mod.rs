//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - HTML parsing and link extraction behind the `PageParser` trait
//! - The FIFO work queue
//! - The breadth-first crawl loop

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{crawl, CrawlStats, Crawler};
pub use fetcher::{build_http_client, FetchError, FetcherConfig, HttpFetcher, PageFetcher};
pub use parser::{now_timestamp, parse_html, HtmlParser, PageParser, ParsedPage};
pub use scheduler::{CrawlTarget, WorkQueue};

use crate::config::GenerateOptions;
use std::time::Duration;

/// Builds the HTTP fetcher described by the generation options
///
/// # Returns
///
/// * `Ok(HttpFetcher)` - Client built with the configured user agent and timeout
/// * `Err(reqwest::Error)` - The TLS backend could not be initialised
pub fn fetcher_for(options: &GenerateOptions) -> Result<HttpFetcher, reqwest::Error> {
    let config = FetcherConfig::new(
        options.user_agent.clone(),
        Duration::from_secs(options.timeout_secs),
    );
    HttpFetcher::new(&config)
}
