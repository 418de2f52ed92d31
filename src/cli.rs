// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are only three options, and all of them have defaults, so running
// `term-crawler` with no arguments does something useful:
//
//   term-crawler                              # kayako.com, "kayako", depth 2
//   term-crawler -u https://example.com -t rust -d 1
//
// Logging verbosity isn't a flag: set RUST_LOG (e.g. RUST_LOG=debug).
// =============================================================================

use clap::Parser;

use crate::crawl::CrawlParams;

pub const DEFAULT_URL: &str = "https://www.kayako.com/";
pub const DEFAULT_TERM: &str = "kayako";
pub const DEFAULT_DEPTH: usize = 2;

// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "term-crawler",
    version,
    about = "Crawl a website and count how often a term appears",
    long_about = "term-crawler walks a website breadth-first from a start URL, staying on the same site, \
                  and counts case-insensitive matches of a search term in the text of every page it visits."
)]
pub struct Cli {
    /// URL to start crawling from
    ///
    /// Only links on the same site (same scheme://host[:port]) are followed
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Term to search for
    ///
    /// Matched case-insensitively. The term is a regular expression,
    /// so escape characters like '.' or '(' to match them literally
    #[arg(short, long, default_value = DEFAULT_TERM)]
    pub term: String,

    /// Depth of scanning
    ///
    /// Depth 0 = just the start page
    /// Depth 1 = start page + the pages it links to
    /// etc.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,
}

impl Cli {
    /// Hands the parsed options to the crawl engine
    pub fn into_params(self) -> CrawlParams {
        CrawlParams {
            url: self.url,
            term: self.term,
            depth: self.depth,
        }
    }
}
