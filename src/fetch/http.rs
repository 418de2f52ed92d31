// src/fetch/http.rs
// =============================================================================
// This module fetches real pages over HTTP.
//
// Key functionality:
// - Makes a GET request with a shared, pooled reqwest client
// - Treats any non-2xx status as a failure
// - Hands the body to the html module for text and link extraction
//
// Rust concepts:
// - async/await: Network I/O without blocking the thread
// - impl Trait for Type: Plugging HttpFetcher into the Fetcher trait
// - ? operator: Propagating errors up to the caller
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use tracing::debug;

use super::html::{extract_links, extract_text};
use super::{FetchError, Fetcher, PageContent};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 5;

// Fetches pages with reqwest and reads them with scraper
//
// Cloning is cheap: reqwest::Client is an Arc internally.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with a 10 second timeout and up to 5 redirects
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("term-crawler/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        let url = url::Url::parse(url)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        // Relative links resolve against where we ended up, not where we
        // started, so a redirect to /docs/ makes "intro" mean /docs/intro
        let final_url = response.url().clone();
        let body = response.text().await?;

        // Html isn't Send, so it must not live across an .await point
        let document = Html::parse_document(&body);
        let page = PageContent {
            text: extract_text(&document),
            links: extract_links(&document, &final_url),
        };

        debug!(
            url = %final_url,
            bytes = body.len(),
            links = page.links.len(),
            "fetched page"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_returns_text_and_links() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(r#"<body><p>Foo bar foo</p><a href="/p1">one</a></body>"#)
            .expect(1)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let page = fetcher.fetch(&format!("{}/", server.url())).await.unwrap();

        assert_eq!(page.text, "Foo bar foo one");
        assert_eq!(page.links, vec![format!("{}/p1", server.url())]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_rejects_unparseable_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
