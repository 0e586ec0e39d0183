/// Outcome definitions for a dequeued crawl target
///
/// Every target moves from pending to exactly one of these outcomes and is never
/// processed again.
use std::fmt;

/// Why a target was skipped without being fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The URL is already in the visited index
    Duplicate,

    /// The target's depth is beyond the configured maximum
    DepthExceeded,
}

/// Final state of one crawl target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOutcome {
    /// Dropped before fetching
    Skipped(SkipReason),

    /// The fetch failed; the URL is absent from the results
    FetchFailed,

    /// Fetched, recorded and expanded; carries the number of links enqueued
    Visited { enqueued: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "duplicate"),
            Self::DepthExceeded => write!(f, "depth_exceeded"),
        }
    }
}

impl fmt::Display for TargetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped(reason) => write!(f, "skipped ({})", reason),
            Self::FetchFailed => write!(f, "fetch_failed"),
            Self::Visited { enqueued } => write!(f, "visited (+{} queued)", enqueued),
        }
    }
}
