//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageRecord`: sitemap metadata for one visited page
//! - `VisitedIndex`: insertion-ordered, insert-once map of visited pages
//! - `TargetOutcome`: what happened to a dequeued crawl target

mod outcome;
mod page_record;
mod visited;

// Re-export main types
pub use outcome::{SkipReason, TargetOutcome};
pub use page_record::{priority_for_depth, PageRecord};
pub use visited::VisitedIndex;
