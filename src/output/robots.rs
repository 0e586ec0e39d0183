//! robots.txt generation

use crate::UrlError;
use url::Url;

/// Formats a robots policy allowing everything except `disallow_paths`
///
/// The `Sitemap:` line is `sitemap.xml` resolved against `base_url` with standard
/// URL joining, so a base with a path keeps its directory but drops a trailing
/// file segment.
///
/// # Example
///
/// ```
/// use sitemap_ripple::output::format_robots;
///
/// let robots = format_robots("https://example.com", &["/private".to_string()]).unwrap();
/// assert_eq!(
///     robots,
///     "User-agent: *\nDisallow: /private\n\nSitemap: https://example.com/sitemap.xml\n"
/// );
/// ```
pub fn format_robots(base_url: &str, disallow_paths: &[String]) -> Result<String, UrlError> {
    let sitemap_url = Url::parse(base_url)
        .and_then(|base| base.join("sitemap.xml"))
        .map_err(|e| UrlError::Parse(format!("{}: {}", base_url, e)))?;

    let mut content = String::from("User-agent: *\n");
    for path in disallow_paths {
        content.push_str(&format!("Disallow: {}\n", path));
    }
    content.push_str(&format!("\nSitemap: {}\n", sitemap_url));

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_disallow_paths() {
        let robots = format_robots("http://localhost:3000", &[]).unwrap();
        assert_eq!(
            robots,
            "User-agent: *\n\nSitemap: http://localhost:3000/sitemap.xml\n"
        );
    }

    #[test]
    fn test_disallow_paths_in_order() {
        let robots =
            format_robots("https://example.com", &paths(&["/private", "/admin"])).unwrap();

        assert!(robots.contains("Disallow: /private\n"));
        assert!(robots.contains("Disallow: /admin\n"));
        assert!(robots.find("/private").unwrap() < robots.find("/admin").unwrap());
        assert!(robots.ends_with("\nSitemap: https://example.com/sitemap.xml\n"));
    }

    #[test]
    fn test_paths_not_validated() {
        let robots = format_robots("https://example.com", &paths(&["no-slash *"])).unwrap();
        assert!(robots.contains("Disallow: no-slash *\n"));
    }

    #[test]
    fn test_base_with_directory() {
        let robots = format_robots("https://example.com/docs/", &[]).unwrap();
        assert!(robots.contains("Sitemap: https://example.com/docs/sitemap.xml\n"));
    }

    #[test]
    fn test_base_with_file_segment_is_replaced() {
        let robots = format_robots("https://example.com/docs", &[]).unwrap();
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml\n"));
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            format_robots("not a url", &[]),
            Err(UrlError::Parse(_))
        ));
    }
}
