//! Work queue for the breadth-first crawl
//!
//! Targets are served strictly first-in first-out. Because every target enqueued
//! while processing depth `d` carries depth `d + 1` and goes to the back, all
//! depth-`d` targets are dequeued before any of their children.

use std::collections::VecDeque;

/// A URL waiting to be crawled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    /// Absolute URL, exactly as discovered
    pub url: String,

    /// Number of links between the base URL and this one
    pub depth: u32,
}

impl CrawlTarget {
    /// Creates a target
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }

    /// Creates the target for a link found on this page
    pub fn child(&self, url: impl Into<String>) -> Self {
        Self::new(url, self.depth + 1)
    }
}

/// FIFO queue of crawl targets
#[derive(Debug, Clone, Default)]
pub struct WorkQueue {
    targets: VecDeque<CrawlTarget>,
}

impl WorkQueue {
    /// Creates a queue holding only the seed target at depth 0
    pub fn seeded(base_url: impl Into<String>) -> Self {
        let mut queue = Self::default();
        queue.push(CrawlTarget::new(base_url, 0));
        queue
    }

    /// Appends a target to the back
    pub fn push(&mut self, target: CrawlTarget) {
        self.targets.push_back(target);
    }

    /// Removes and returns the front target
    pub fn pop(&mut self) -> Option<CrawlTarget> {
        self.targets.pop_front()
    }

    /// Number of pending targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if no targets are pending
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
