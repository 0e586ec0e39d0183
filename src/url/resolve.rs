use crate::UrlError;
use url::Url;

/// Resolves an `href` against the page it was found on
///
/// Relative, protocol-relative, fragment-only and absolute hrefs all resolve with
/// standard URL joining. A result whose scheme is not `http` or `https`
/// (`javascript:`, `mailto:`, `tel:`, `data:` ...) cannot be fetched and is reported
/// as an unsupported scheme.
///
/// # Examples
///
/// ```
/// use sitemap_ripple::url::resolve_link;
/// use url::Url;
///
/// let page = Url::parse("https://example.com/docs/intro").unwrap();
/// assert_eq!(resolve_link("setup", &page).unwrap(), "https://example.com/docs/setup");
/// assert!(resolve_link("javascript:void(0)", &page).is_err());
/// ```
pub fn resolve_link(href: &str, page_url: &Url) -> Result<String, UrlError> {
    let resolved = page_url
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    match resolved.scheme() {
        "http" | "https" => Ok(resolved.into()),
        other => Err(UrlError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    #[test]
    fn test_absolute() {
        assert_eq!(
            resolve_link("https://other.com/x", &page()).unwrap(),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve_link("/about", &page()).unwrap(),
            "https://example.com/about"
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(
            resolve_link("other", &page()).unwrap(),
            "https://example.com/blog/other"
        );
        assert_eq!(
            resolve_link("../up", &page()).unwrap(),
            "https://example.com/up"
        );
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            resolve_link("//cdn.example.com/lib", &page()).unwrap(),
            "https://cdn.example.com/lib"
        );
    }

    #[test]
    fn test_fragment_only() {
        assert_eq!(
            resolve_link("#comments", &page()).unwrap(),
            "https://example.com/blog/post#comments"
        );
    }

    #[test]
    fn test_empty_href_is_the_page() {
        assert_eq!(
            resolve_link("", &page()).unwrap(),
            "https://example.com/blog/post"
        );
    }

    #[test]
    fn test_javascript_rejected() {
        assert!(matches!(
            resolve_link("javascript:void(0)", &page()),
            Err(UrlError::UnsupportedScheme(scheme)) if scheme == "javascript"
        ));
    }

    #[test]
    fn test_mailto_rejected() {
        assert!(matches!(
            resolve_link("mailto:team@example.com", &page()),
            Err(UrlError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(matches!(
            resolve_link("http://[::1", &page()),
            Err(UrlError::Parse(_))
        ));
    }
}
