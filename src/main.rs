// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, controlled by RUST_LOG, written to stderr)
// 2. Parse command-line arguments using clap
// 3. Crawl the site, printing one line per visited page
// 4. Print the total and exit with a proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: Fetching pages over the network without blocking
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Channels: A watch channel tells the crawl to stop on Ctrl-C
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;    // src/cli.rs - command-line parsing
mod crawl;  // src/crawl/ - the breadth-first crawl and term counting
mod fetch;  // src/fetch/ - loading pages over HTTP

use std::future::Future;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use crawl::{CrawlEngine, CrawlParams, CrawlReport};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole cause chain: "failed to fetch X: HTTP 404"
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the counts on stdout
//
// Default level is "warn"; RUST_LOG=info shows every visited page,
// RUST_LOG=debug also shows skipped and queued links.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let params = Cli::parse().into_params();

    tracing::info!(url = %params.url, term = %params.term, depth = params.depth, "starting crawl");

    let fetcher = HttpFetcher::new().context("failed to create HTTP client")?;
    let report = crawl_site(fetcher, &params).await?;

    println!("Total instances of '{}' found: {}", report.term, report.total);
    Ok(())
}

// Crawls the site and prints a line per page as it goes
//
// Nothing is returned (or printed as a total) unless every page loaded.
async fn crawl_site(fetcher: HttpFetcher, params: &CrawlParams) -> Result<CrawlReport> {
    let (cancel_tx, cancel_rx) = watch::channel(false);

    // Ctrl-C stops the crawl before the next page, never in the middle of one.
    // A second Ctrl-C doesn't wait for the current fetch
    tokio::spawn(async move {
        if watch_interrupts(tokio::signal::ctrl_c, cancel_tx).await {
            eprintln!("Interrupted twice, exiting");
            std::process::exit(130);
        }
    });

    let report = CrawlEngine::new(fetcher, params)?
        .with_cancellation(cancel_rx)
        .run(|page| {
            println!(
                "Found {} instances of '{}' in the body of {} (depth {})",
                page.count, params.term, page.url, page.depth
            );
        })
        .await?;

    tracing::info!(pages = report.pages_visited(), "all pages visited");

    Ok(report)
}

// Waits for interrupts from `next_signal`
//
// The first one flips `cancel` to true. Returns true once a second one
// arrives, false if the signal handler couldn't be installed.
async fn watch_interrupts<S, Fut>(mut next_signal: S, cancel: watch::Sender<bool>) -> bool
where
    S: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if next_signal().await.is_err() {
        return false;
    }

    tracing::warn!("interrupted, stopping after the current page (Ctrl-C again to exit now)");
    let _ = cancel.send(true);

    next_signal().await.is_ok()
}
