//! HTML parser for extracting links and metadata
//!
//! This module handles parsing HTML content to extract:
//! - Links to follow (every `<a href>` on the page)
//! - The `last-modified` hint used as the sitemap `lastmod`

use crate::url::resolve_link;
use chrono::{SecondsFormat, Utc};
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// `last-modified` meta content, or the extraction timestamp
    pub last_modified: String,

    /// Absolute URLs of every resolvable anchor, in document order
    pub links: Vec<String>,
}

/// Capability the crawler needs from an HTML parser
///
/// The crawler only talks to this trait, so any HTML library can back it.
pub trait PageParser: Send + Sync {
    /// Returns the absolute URL of every anchor that resolves against `page_url`
    fn extract_links(&self, html: &str, page_url: &Url) -> Vec<String>;

    /// Returns the page's last-modified hint
    fn extract_last_modified(&self, html: &str) -> String;

    /// Runs both extractions
    fn extract(&self, html: &str, page_url: &Url) -> ParsedPage {
        ParsedPage {
            last_modified: self.extract_last_modified(html),
            links: self.extract_links(html, page_url),
        }
    }
}

/// `PageParser` backed by scraper's html5ever tree
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl PageParser for HtmlParser {
    fn extract_links(&self, html: &str, page_url: &Url) -> Vec<String> {
        let document = Html::parse_document(html);
        links_in(&document, page_url)
    }

    fn extract_last_modified(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        last_modified_in(&document)
    }

    // Parses the document once for both extractions
    fn extract(&self, html: &str, page_url: &Url) -> ParsedPage {
        let document = Html::parse_document(html);
        ParsedPage {
            last_modified: last_modified_in(&document),
            links: links_in(&document, page_url),
        }
    }
}

/// Parses HTML content and extracts links and metadata
///
/// When the page has no `<meta name="last-modified">` tag the current time is used,
/// so two fetches of the same page can yield different `last_modified` values.
///
/// # Example
///
/// ```
/// use sitemap_ripple::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><meta name="last-modified" content="2024-05-01"></head>
///               <body><a href="/page">Link</a></body></html>"#;
/// let page_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &page_url);
/// assert_eq!(parsed.last_modified, "2024-05-01");
/// assert_eq!(parsed.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn parse_html(html: &str, page_url: &Url) -> ParsedPage {
    HtmlParser.extract(html, page_url)
}

/// Returns the current UTC time as ISO-8601 with milliseconds
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn last_modified_in(document: &Html) -> String {
    Selector::parse(r#"meta[name="last-modified"]"#)
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .and_then(|element| element.value().attr("content"))
                .filter(|content| !content.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(now_timestamp)
}

fn links_in(document: &Html, page_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&a_selector) {
        if let Some(href) = element.value().attr("href") {
            match resolve_link(href, page_url) {
                Ok(absolute_url) => links.push(absolute_url),
                Err(e) => tracing::debug!("Dropping link {:?} on {}: {}", href, page_url, e),
            }
        }
    }

    links
}
