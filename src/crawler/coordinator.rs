//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop:
//! - Draining the work queue one target at a time
//! - Skipping duplicates and targets past the depth limit
//! - Fetching, recording and expanding pages
//! - Logging and dropping failed fetches

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::{HtmlParser, PageParser};
use crate::crawler::scheduler::{CrawlTarget, WorkQueue};
use crate::state::{PageRecord, SkipReason, TargetOutcome, VisitedIndex};
use crate::url::is_same_origin;
use std::time::{Duration, Instant};
use url::Url;

/// Counters collected over one crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Targets fetched and recorded
    pub visited: usize,

    /// Targets dropped because the URL was already recorded
    pub duplicates: usize,

    /// Targets dropped for exceeding the maximum depth
    pub depth_exceeded: usize,

    /// Targets whose fetch failed
    pub fetch_failed: usize,

    /// Total links put on the queue
    pub enqueued: usize,

    /// Wall-clock time of the crawl
    pub elapsed: Duration,
}

impl CrawlStats {
    fn record(&mut self, outcome: TargetOutcome) {
        match outcome {
            TargetOutcome::Skipped(SkipReason::Duplicate) => self.duplicates += 1,
            TargetOutcome::Skipped(SkipReason::DepthExceeded) => self.depth_exceeded += 1,
            TargetOutcome::FetchFailed => self.fetch_failed += 1,
            TargetOutcome::Visited { enqueued } => {
                self.visited += 1;
                self.enqueued += enqueued;
            }
        }
    }
}

/// Breadth-first crawler over same-origin links
///
/// One `Crawler` performs one crawl: it owns the visited index and the work queue
/// for the duration of [`Crawler::run`].
pub struct Crawler<'a> {
    base_url: String,
    max_depth: u32,
    fetcher: &'a dyn PageFetcher,
    parser: &'a dyn PageParser,
    visited: VisitedIndex,
    queue: WorkQueue,
    stats: CrawlStats,
}

impl<'a> Crawler<'a> {
    /// Creates a crawler using the scraper-backed HTML parser
    pub fn new(base_url: impl Into<String>, max_depth: u32, fetcher: &'a dyn PageFetcher) -> Self {
        Self::with_parser(base_url, max_depth, fetcher, &HtmlParser)
    }

    /// Creates a crawler with an explicit parser
    pub fn with_parser(
        base_url: impl Into<String>,
        max_depth: u32,
        fetcher: &'a dyn PageFetcher,
        parser: &'a dyn PageParser,
    ) -> Self {
        let base_url = base_url.into();
        let queue = WorkQueue::seeded(base_url.clone());

        Self {
            base_url,
            max_depth,
            fetcher,
            parser,
            visited: VisitedIndex::new(),
            queue,
            stats: CrawlStats::default(),
        }
    }

    /// Runs the crawl until the queue is empty and returns the visited pages
    ///
    /// Failed fetches never surface here; they are logged and left out of the
    /// result.
    pub async fn run(mut self) -> (VisitedIndex, CrawlStats) {
        tracing::info!(
            "Starting crawl of {} (max depth {})",
            self.base_url,
            self.max_depth
        );
        let start_time = Instant::now();

        while let Some(target) = self.queue.pop() {
            let outcome = self.process_target(&target).await;
            tracing::trace!(
                "{} -> {} ({} pending)",
                target.url,
                outcome,
                self.queue.len()
            );
            self.stats.record(outcome);

            if self.queue.is_empty() {
                tracing::debug!("Work queue drained after {}", target.url);
            }
        }

        self.stats.elapsed = start_time.elapsed();
        tracing::info!(
            "Crawl completed: {} pages visited, {} fetch failures, {} duplicates, {} beyond depth in {:?}",
            self.stats.visited,
            self.stats.fetch_failed,
            self.stats.duplicates,
            self.stats.depth_exceeded,
            self.stats.elapsed
        );

        (self.visited, self.stats)
    }

    /// Takes one target through skip, fetch, record and expand
    async fn process_target(&mut self, target: &CrawlTarget) -> TargetOutcome {
        if self.visited.contains(&target.url) {
            tracing::debug!("Skipping {}: already visited", target.url);
            return TargetOutcome::Skipped(SkipReason::Duplicate);
        }

        if target.depth > self.max_depth {
            tracing::debug!(
                "Skipping {}: depth {} exceeds {}",
                target.url,
                target.depth,
                self.max_depth
            );
            return TargetOutcome::Skipped(SkipReason::DepthExceeded);
        }

        // Queued links always come from resolved URLs; only the seed can fail here
        let page_url = match Url::parse(&target.url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Error crawling {}: invalid URL: {}", target.url, e);
                return TargetOutcome::FetchFailed;
            }
        };

        tracing::info!("Crawling: {}", target.url);
        let body = match self.fetcher.fetch(&target.url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Error crawling {}: {}", target.url, e);
                return TargetOutcome::FetchFailed;
            }
        };

        let parsed = self.parser.extract(&body, &page_url);
        self.visited.insert(
            target.url.clone(),
            PageRecord::new(parsed.last_modified, target.depth),
        );

        let enqueued = self.enqueue_links(target, parsed.links);
        TargetOutcome::Visited { enqueued }
    }

    /// Queues every same-origin link that has not been visited yet
    fn enqueue_links(&mut self, from: &CrawlTarget, links: Vec<String>) -> usize {
        let mut enqueued = 0;

        for link in links {
            if !is_same_origin(&self.base_url, &link) {
                tracing::trace!("Ignoring off-site link {}", link);
                continue;
            }

            if self.visited.contains(&link) {
                continue;
            }

            self.queue.push(from.child(link));
            enqueued += 1;
        }

        enqueued
    }
}

/// Crawls from `base_url` and returns the visited pages in breadth-first order
///
/// # Example
///
/// ```no_run
/// use sitemap_ripple::crawler::{crawl, FetcherConfig, HttpFetcher};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new(&FetcherConfig::new("bot/1.0", Duration::from_secs(30)))?;
/// let pages = crawl("https://example.com/", 3, &fetcher).await;
/// for (url, record) in pages.iter() {
///     println!("{} {}", url, record.priority);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(base_url: &str, max_depth: u32, fetcher: &dyn PageFetcher) -> VisitedIndex {
    let (visited, _stats) = Crawler::new(base_url, max_depth, fetcher).run().await;
    visited
}
