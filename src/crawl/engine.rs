// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself, breadth-first.
//
// How it works:
// 1. Start with the initial URL in a queue (the "frontier") at depth 0
// 2. Take the next page off the front of the queue
// 3. Skip it if its normalized URL was already visited
// 4. Fetch it, count the search term in its text, add to the total
// 5. If we're still above the depth limit, queue its same-site links
// 6. Mark it visited and repeat until the queue is empty
//
// Ownership:
// - The engine owns the frontier, the visited set and the domain prefix.
//   Nothing else can touch them
// - The running total is a plain local in run(), added to once per page
//
// Rust concepts:
// - Generics: CrawlEngine<F> works with any Fetcher (real or fake)
// - VecDeque: FIFO queue for breadth-first traversal
// - HashSet: O(1) "have we seen this?" lookups
// =============================================================================

use std::collections::{HashSet, VecDeque};

use regex::Regex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::counter::TermCounter;
use super::error::CrawlError;
use super::normalize::normalize_url;
use crate::fetch::Fetcher;

// What the crawl was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlParams {
    /// Where to start (also decides which site we stay on)
    pub url: String,
    /// Search term, used as a case-insensitive pattern
    pub term: String,
    /// How many link-hops away from the start URL we may go
    pub depth: usize,
}

// A page waiting in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierItem {
    pub url: String,
    /// Link-hops from the start URL (the start URL itself is 0)
    pub depth: usize,
}

// The result for one visited page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTally {
    /// The URL as it was fetched (not normalized)
    pub url: String,
    pub depth: usize,
    pub count: usize,
}

// The result for a whole crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub term: String,
    /// Visited pages in the order they were fetched
    pub pages: Vec<PageTally>,
    pub total: usize,
}

impl CrawlReport {
    pub fn pages_visited(&self) -> usize {
        self.pages.len()
    }
}

// Extracts the "scheme://host[:port]/" prefix a link must contain to be
// followed
//
// Returns "" when the start URL doesn't look like an HTTP(S) URL.
//
// Examples:
//   "https://example.com/docs/intro" -> "https://example.com/"
//   "http://localhost:8080"          -> "http://localhost:8080"
//   "example.com"                    -> ""
pub fn domain_prefix(start_url: &str) -> String {
    // Constant pattern, known to be valid
    let pattern = Regex::new(r"^(?:http|https)://[a-zA-Z0-9.\-]+(?::[0-9]+)?/?").unwrap();

    pattern
        .find(start_url)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub struct CrawlEngine<F> {
    fetcher: F,
    counter: TermCounter,
    max_depth: usize,
    domain: String,
    frontier: VecDeque<FrontierItem>,
    // Normalized URLs of every page fetched so far
    visited: HashSet<String>,
    cancel: Option<watch::Receiver<bool>>,
}

impl<F: Fetcher> CrawlEngine<F> {
    // Sets up a crawl
    //
    // Fails only if the search term isn't a valid pattern. Nothing is
    // fetched until run() is called.
    pub fn new(fetcher: F, params: &CrawlParams) -> Result<Self, CrawlError> {
        let counter = TermCounter::new(&params.term)?;

        let domain = domain_prefix(&params.url);
        if domain.is_empty() {
            // Every link contains "", so the crawl isn't scoped to any site
            warn!(
                url = %params.url,
                "start URL has no scheme://host prefix, links to any site will be followed"
            );
        }

        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierItem {
            url: params.url.clone(),
            depth: 0,
        });

        Ok(Self {
            fetcher,
            counter,
            max_depth: params.depth,
            domain,
            frontier,
            visited: HashSet::new(),
            cancel: None,
        })
    }

    // Lets the crawl be stopped from outside
    //
    // Once the channel holds `true`, run() stops before taking the next page
    // off the queue. A page that is already being fetched is always finished
    // and counted first, so a hung fetch delays the stop until the fetcher
    // gives up (the binary exits outright on a second Ctrl-C).
    pub fn with_cancellation(mut self, cancel: watch::Receiver<bool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    // Runs the crawl to completion
    //
    // `on_page` is called once for every visited page, right after its count
    // has been added to the total. Any fetch error ends the crawl.
    pub async fn run<C>(mut self, mut on_page: C) -> Result<CrawlReport, CrawlError>
    where
        C: FnMut(&PageTally),
    {
        let mut pages = Vec::new();
        let mut total = 0;

        while let Some(item) = self.frontier.pop_front() {
            if self.is_cancelled() {
                info!(pending = self.frontier.len() + 1, "crawl cancelled");
                return Err(CrawlError::Cancelled);
            }

            let Some(tally) = self.visit(item).await? else {
                continue;
            };

            total += tally.count;
            on_page(&tally);
            pages.push(tally);
        }

        info!(pages = pages.len(), total, "crawl finished");

        Ok(CrawlReport {
            term: self.counter.term().to_string(),
            pages,
            total,
        })
    }

    // Processes one queue item
    //
    // Returns Ok(None) when the page was already visited (nothing fetched,
    // nothing counted).
    async fn visit(&mut self, item: FrontierItem) -> Result<Option<PageTally>, CrawlError> {
        let key = normalize_url(&item.url);
        if self.visited.contains(&key) {
            debug!(url = %item.url, "already visited, skipping");
            return Ok(None);
        }

        // Fetch the URL exactly as it was linked, not the normalized key
        let page = self
            .fetcher
            .fetch(&item.url)
            .await
            .map_err(|source| CrawlError::Fetch {
                url: item.url.clone(),
                source,
            })?;

        let count = self.counter.count(&page.text);
        info!(url = %item.url, depth = item.depth, count, "visited page");

        if item.depth < self.max_depth {
            self.enqueue_links(page.links, item.depth + 1);
        }

        self.visited.insert(key);

        Ok(Some(PageTally {
            url: item.url,
            depth: item.depth,
            count,
        }))
    }

    // Queues every same-site link we haven't visited yet
    //
    // The visited check here compares the raw link against normalized keys,
    // so "https://a.com/p/" can still be queued after "https://a.com/p" was
    // visited. That's fine: visit() catches it before fetching.
    fn enqueue_links(&mut self, links: Vec<String>, depth: usize) {
        for link in links {
            if !link.contains(self.domain.as_str()) {
                debug!(%link, "outside the start site, not following");
                continue;
            }
            if self.visited.contains(&link) {
                continue;
            }

            debug!(%link, depth, "queued");
            self.frontier.push_back(FrontierItem { url: link, depth });
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|cancel| *cancel.borrow())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check "visited" when taking an item off the queue, not when
//    adding it?
//    - The same page can be linked from many pages at the same depth
//    - We let all those copies into the queue and drop the extras when
//      they reach the front. Only the first copy is ever fetched
//
// 2. Why does the crawl always stop?
//    - Links are only queued while depth < max_depth, and every queued link
//      is one level deeper than its page. After max_depth + 1 levels
//      nothing new can be queued, and the queue drains
//
// 3. What is `let Some(x) = ... else { continue };`?
//    - "let-else": bind x if the pattern matches, otherwise run the else
//      block, which must leave the loop iteration (continue/return/break)
//
// 4. Why is `run` taking `mut self` (by value)?
//    - A crawl engine is good for exactly one crawl. Consuming it means
//      the visited set and the queue can't leak into a second run
// -----------------------------------------------------------------------------
