// src/crawl/mod.rs
// =============================================================================
// This module handles the website crawl and the term counting.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Same-site restriction (links must contain the start URL's prefix)
// - Configurable depth limit
// - URL normalization so the same page is never fetched twice
//
// Submodules:
// - engine: The crawl loop and its state
// - normalize: URL -> deduplication key
// - counter: Case-insensitive term counting
// - error: What can make a crawl fail
// =============================================================================

mod counter;
mod engine;
mod error;
mod normalize;

pub use engine::{CrawlEngine, CrawlParams, CrawlReport, PageTally};
pub use error::CrawlError;
