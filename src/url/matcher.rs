/// Checks if a URL falls under the crawl's base URL
///
/// The test is a plain string prefix comparison against the exact base URL, not a
/// scheme/host comparison. `http://x.com/foo` therefore also admits
/// `http://x.com/foobar`, and `http://example.com` admits
/// `http://example.com.evil.com/`.
///
/// # Examples
///
/// ```
/// use sitemap_ripple::url::is_same_origin;
///
/// assert!(is_same_origin("https://example.com", "https://example.com/about"));
/// assert!(!is_same_origin("https://example.com", "https://other.com/"));
/// assert!(!is_same_origin("https://example.com", "http://example.com/"));
/// ```
pub fn is_same_origin(base_url: &str, candidate: &str) -> bool {
    candidate.starts_with(base_url)
}
