//! Output module for rendering and persisting crawl results
//!
//! This module handles:
//! - Formatting the visited pages as `sitemap.xml`
//! - Formatting the `robots.txt` policy that points at the sitemap
//! - Writing both files to the output directory
//! - Running the whole crawl-format-write pipeline

mod robots;
mod sitemap;
mod writer;

pub use robots::format_robots;
pub use sitemap::{escape_xml, format_sitemap, SITEMAP_NAMESPACE};
pub use writer::{write_outputs, OutputError, OutputPaths, OutputResult, ROBOTS_FILE, SITEMAP_FILE};

use crate::config::{validate, GenerateOptions};
use crate::crawler::{fetcher_for, Crawler, PageFetcher};
use crate::SitemapError;
use std::path::Path;

/// Crawls the site and writes `sitemap.xml` and `robots.txt`
///
/// This is the main entry point for a generation run. It will:
/// 1. Validate the options
/// 2. Build the HTTP fetcher
/// 3. Crawl from the base URL
/// 4. Format the sitemap and robots policy
/// 5. Write both files, sitemap first
///
/// # Returns
///
/// * `Ok(OutputPaths)` - Where the two files were written
/// * `Err(SitemapError)` - Invalid options or a file system failure
///
/// # Example
///
/// ```no_run
/// use sitemap_ripple::{generate_sitemap_and_robots, GenerateOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = GenerateOptions {
///     base_url: "https://example.com/".to_string(),
///     ..Default::default()
/// };
/// let paths = generate_sitemap_and_robots(&options).await?;
/// println!("Sitemap at {}", paths.sitemap.display());
/// # Ok(())
/// # }
/// ```
pub async fn generate_sitemap_and_robots(
    options: &GenerateOptions,
) -> Result<OutputPaths, SitemapError> {
    let fetcher = fetcher_for(options)?;
    generate_with_fetcher(options, &fetcher).await
}

/// Runs the pipeline with a caller-supplied fetcher
///
/// Options are validated before anything is fetched or written.
pub async fn generate_with_fetcher(
    options: &GenerateOptions,
    fetcher: &dyn PageFetcher,
) -> Result<OutputPaths, SitemapError> {
    validate(options)?;

    tracing::info!("Crawling site to generate sitemap...");
    let (pages, stats) = Crawler::new(options.base_url.as_str(), options.max_depth, fetcher)
        .run()
        .await;

    if stats.fetch_failed > 0 {
        tracing::warn!(
            "{} page(s) could not be fetched and are missing from the sitemap",
            stats.fetch_failed
        );
    }

    let sitemap = format_sitemap(&pages);
    let robots = format_robots(&options.base_url, &options.disallow_paths)?;

    let paths = write_outputs(Path::new(&options.out_dir), &sitemap, &robots)?;

    tracing::info!("Sitemap generated at {}", paths.sitemap.display());
    tracing::info!("robots.txt generated at {}", paths.robots.display());

    Ok(paths)
}
