// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only window onto the network.
//
// The crawl engine doesn't know anything about HTTP or HTML. It only needs
// one capability: "given a URL, give me the page's text and its links".
// That capability is the `Fetcher` trait defined here.
//
// Submodules:
// - http: The real fetcher (reqwest + scraper)
// - html: Pulls visible text and links out of an HTML document
//
// Rust concepts:
// - Traits: Shared behavior that different types can implement
// - async-trait: Lets a trait have async methods that work with generics
// - thiserror: Derives std::error::Error for our error enum
// =============================================================================

mod html;
mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpFetcher;

// What a single fetch gives back to the crawl engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    /// Visible text of the page (what the term is counted in)
    pub text: String,
    /// Absolute outbound link URLs, in document order
    pub links: Vec<String>,
}

// Everything that can go wrong while fetching one page
//
// The engine treats every one of these as fatal for the whole crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout, TLS error, body decoding error...
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The URL couldn't be parsed at all
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

// The fetch collaborator
//
// Send + Sync so a fetcher can be shared with spawned tasks if needed.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Loads `url` and returns its text and outbound links
    async fn fetch(&self, url: &str) -> Result<PageContent, FetchError>;
}
