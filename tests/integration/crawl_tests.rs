//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl-format-write cycle end-to-end.

use sitemap_ripple::config::GenerateOptions;
use sitemap_ripple::crawler::{crawl, FetcherConfig, HttpFetcher};
use sitemap_ripple::generate_sitemap_and_robots;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_fetcher() -> HttpFetcher {
    HttpFetcher::new(&FetcherConfig::new("TestBot/1.0", Duration::from_secs(5)))
        .expect("Failed to build fetcher")
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

/// Mounts `/` linking to `/about` and `/contact`, each linking back to `/`
async fn mount_three_page_site(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/about">About</a><a href="/contact">Contact</a>"#,
        ))
        .mount(mock_server)
        .await;

    for page in ["/about", "/contact"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html_page(&format!(
                r#"<h1>{}</h1><a href="/">Home</a>"#,
                &page[1..]
            )))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(mock_server)
        .await;
}

fn options_for(base_url: String, out_dir: &TempDir, max_depth: u32) -> GenerateOptions {
    GenerateOptions {
        base_url,
        out_dir: out_dir.path().to_string_lossy().into_owned(),
        max_depth,
        disallow_paths: vec!["/private".to_string(), "/admin".to_string()],
        timeout_secs: 5,
        user_agent: "TestBot/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_three_page_site_crawl() {
    let mock_server = MockServer::start().await;
    mount_three_page_site(&mock_server).await;
    let base_url = format!("{}/", mock_server.uri());

    let pages = crawl(&base_url, 2, &test_fetcher()).await;

    let urls: Vec<&str> = pages.urls().collect();
    assert_eq!(
        urls,
        vec![
            base_url.clone(),
            format!("{}about", base_url),
            format!("{}contact", base_url)
        ]
    );
    let priorities: Vec<&str> = pages.iter().map(|(_, r)| r.priority.as_str()).collect();
    assert_eq!(priorities, vec!["1.00", "0.90", "0.90"]);
}

#[tokio::test]
async fn test_generates_sitemap_and_robots() {
    let mock_server = MockServer::start().await;
    mount_three_page_site(&mock_server).await;
    let base_url = mock_server.uri();
    let out_dir = TempDir::new().expect("Failed to create temp dir");

    let paths = generate_sitemap_and_robots(&options_for(format!("{}/", base_url), &out_dir, 2))
        .await
        .expect("Generation failed");

    let sitemap = std::fs::read_to_string(&paths.sitemap).expect("Missing sitemap.xml");
    assert!(sitemap.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(sitemap.contains(&format!("<loc>{}/</loc>", base_url)));
    assert!(sitemap.contains(&format!("<loc>{}/about</loc>", base_url)));
    assert!(sitemap.contains(&format!("<loc>{}/contact</loc>", base_url)));
    assert_eq!(sitemap.matches("<url>").count(), 3);

    let robots = std::fs::read_to_string(&paths.robots).expect("Missing robots.txt");
    assert!(robots.starts_with("User-agent: *\n"));
    assert!(robots.contains("Disallow: /private\n"));
    assert!(robots.contains("Disallow: /admin\n"));
    assert!(robots.ends_with(&format!("Sitemap: {}/sitemap.xml\n", base_url)));
}

#[tokio::test]
async fn test_missing_page_yields_single_entry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/does-not-exist", mock_server.uri());
    let pages = crawl(&base_url, 5, &test_fetcher()).await;

    assert_eq!(pages.len(), 1);
    assert!(pages.contains(&base_url));
    assert_eq!(pages.get(&base_url).unwrap().priority, "1.00");
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/level1">1</a>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(html_page(r#"<a href="/level2">2</a>"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(html_page("end"))
        .expect(0) // Beyond max depth, never fetched
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/", mock_server.uri());
    let pages = crawl(&base_url, 1, &test_fetcher()).await;

    assert_eq!(pages.len(), 2);
    assert!(!pages.contains(&format!("{}level2", base_url)));
}

#[tokio::test]
async fn test_off_site_and_unresolvable_links_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="https://elsewhere.invalid/">Away</a>
               <a href="javascript:void(0)">JS</a>
               <a href="http://[::1">Broken</a>
               <a href="/inside">Inside</a>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/inside"))
        .respond_with(html_page("inside"))
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/", mock_server.uri());
    let pages = crawl(&base_url, 3, &test_fetcher()).await;

    let urls: Vec<&str> = pages.urls().collect();
    assert_eq!(urls, vec![base_url.clone(), format!("{}inside", base_url)]);
    for url in pages.urls() {
        assert!(url.starts_with(&base_url));
    }
}

#[tokio::test]
async fn test_unreachable_base_writes_empty_sitemap() {
    // Bind then drop a listener so the port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind failed");
        listener.local_addr().expect("no local addr").port()
    };
    let out_dir = TempDir::new().expect("Failed to create temp dir");
    let options = options_for(format!("http://127.0.0.1:{}/", port), &out_dir, 2);

    let paths = generate_sitemap_and_robots(&options)
        .await
        .expect("Fetch failures must not fail generation");

    let sitemap = std::fs::read_to_string(&paths.sitemap).expect("Missing sitemap.xml");
    assert_eq!(sitemap.matches("<url>").count(), 0);
    assert!(sitemap.ends_with("</urlset>"));
}

#[tokio::test]
async fn test_unwritable_output_dir_fails() {
    let mock_server = MockServer::start().await;
    mount_three_page_site(&mock_server).await;

    let tmp = TempDir::new().expect("Failed to create temp dir");
    let blocker = tmp.path().join("public");
    std::fs::write(&blocker, "a file, not a directory").expect("write failed");

    let options = GenerateOptions {
        base_url: format!("{}/", mock_server.uri()),
        out_dir: blocker.to_string_lossy().into_owned(),
        max_depth: 2,
        ..Default::default()
    };

    let result = generate_sitemap_and_robots(&options).await;
    assert!(matches!(
        result,
        Err(sitemap_ripple::SitemapError::Output(_))
    ));
}

#[tokio::test]
async fn test_invalid_options_rejected_before_crawling() {
    let out_dir = TempDir::new().expect("Failed to create temp dir");
    let options = options_for("ftp://example.com/".to_string(), &out_dir, 2);

    let result = generate_sitemap_and_robots(&options).await;
    assert!(matches!(
        result,
        Err(sitemap_ripple::SitemapError::Config(_))
    ));
    assert!(!out_dir.path().join("sitemap.xml").exists());
}
