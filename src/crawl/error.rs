// src/crawl/error.rs
// =============================================================================
// Errors that end a crawl.
//
// There is no "partial success": if any of these happens, the crawl stops
// and no total is reported.
// =============================================================================

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// A page couldn't be loaded. No retries, the whole crawl fails
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The search term isn't a valid regular expression
    #[error("invalid search term: {0}")]
    InvalidTerm(#[source] regex::Error),

    /// The crawl was stopped (Ctrl-C) between two pages
    #[error("crawl cancelled")]
    Cancelled,
}
