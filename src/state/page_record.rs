/// Sitemap metadata recorded for a successfully fetched page
///
/// Created once, on the first successful fetch of a URL, and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Value of the page's `last-modified` meta tag, or the extraction time
    pub last_modified: String,

    /// Depth-derived priority with exactly two fractional digits
    pub priority: String,
}

impl PageRecord {
    /// Builds a record for a page found `depth` links away from the base URL
    pub fn new(last_modified: impl Into<String>, depth: u32) -> Self {
        Self {
            last_modified: last_modified.into(),
            priority: priority_for_depth(depth),
        }
    }
}

/// Computes `1.0 - depth * 0.1` formatted to two decimals
///
/// Not clamped: depths past 10 yield negative priorities.
pub fn priority_for_depth(depth: u32) -> String {
    format!("{:.2}", 1.0 - f64::from(depth) * 0.1)
}
