//! URL handling module for Sitemap-Ripple
//!
//! URLs are compared byte-for-byte; nothing here normalizes them. This module only
//! resolves hrefs to absolute URLs and decides whether a URL is in crawl scope.

mod matcher;
mod resolve;

// Re-export main functions
pub use matcher::is_same_origin;
pub use resolve::resolve_link;
