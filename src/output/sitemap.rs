//! Sitemap XML generation
//!
//! Renders the visited index as a sitemaps.org 0.9 `urlset`, one `<url>` per page in
//! crawl order.

use crate::state::VisitedIndex;

/// Namespace of the sitemap protocol schema
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Escapes the five XML-reserved characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats visited pages as a sitemap document
///
/// `loc` and `lastmod` are escaped; `priority` is machine generated and written as is.
///
/// # Example
///
/// ```
/// use sitemap_ripple::output::format_sitemap;
/// use sitemap_ripple::state::{PageRecord, VisitedIndex};
///
/// let mut pages = VisitedIndex::new();
/// pages.insert("https://example.com/", PageRecord::new("2024-01-01", 0));
/// let xml = format_sitemap(&pages);
/// assert!(xml.contains("<loc>https://example.com/</loc>"));
/// assert!(xml.contains("<priority>1.00</priority>"));
/// ```
pub fn format_sitemap(pages: &VisitedIndex) -> String {
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

    for (url, record) in pages.iter() {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            escape_xml(&record.last_modified)
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", record.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>");
    xml
}
