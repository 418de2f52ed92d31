// src/fetch/html.rs
// =============================================================================
// This module reads an HTML page the way a person looking at it would.
//
// Two things come out of every page:
// - The visible text (body text, minus scripts and styles)
// - The links (<a href="...">), turned into absolute URLs
//
// We use the `scraper` crate for the DOM and CSS selectors, and the `url`
// crate to resolve relative links against the page URL.
// =============================================================================

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

// Elements whose text never shows up on screen
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

// Extracts the visible text of a document
//
// Text nodes are trimmed and joined with single spaces, so
// "<p>Foo</p><p>bar</p>" becomes "Foo bar" rather than "Foobar".
pub fn extract_text(document: &Html) -> String {
    // "body" is a constant, valid selector
    let body_selector = Selector::parse("body").unwrap();
    let root = document
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut pieces = Vec::new();
    collect_text(root, &mut pieces);
    pieces.join(" ")
}

// Walks the tree depth-first, skipping hidden elements entirely
fn collect_text<'a>(element: ElementRef<'a>, pieces: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed);
                }
            }
            Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, pieces);
                }
            }
            _ => {}
        }
    }
}

// Extracts all HTTP(S) links from a document
//
// Parameters:
//   document: the parsed page
//   base: the URL of the page (for resolving relative links)
//
// Returns: absolute URLs in document order. Duplicates are kept on
// purpose, deduplication is the crawl engine's job.
pub fn extract_links(document: &Html, base: &Url) -> Vec<String> {
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_url(base, href))
        .filter(|url| is_crawlable_link(url))
        .collect()
}

// Resolves a possibly-relative URL to an absolute URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "https://other.com" -> Some("https://other.com/")
//   href = "javascript:void(0)" -> None
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.starts_with("javascript:") || href.starts_with("mailto:") || href.starts_with("tel:") {
        return None;
    }

    // Url::join handles both absolute and relative hrefs
    base.join(href).ok().map(|url| url.to_string())
}

// Only HTTP and HTTPS pages can be crawled
fn is_crawlable_link(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/page/").unwrap()
    }

    #[test]
    fn test_text_skips_scripts_and_styles() {
        let html = r#"
            <html>
              <head><title>Head title</title><style>p { color: red; }</style></head>
              <body>
                <p>Foo bar</p>
                <script>var foo = "foo";</script>
                <div>foo <b>again</b></div>
              </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_text(&document), "Foo bar foo again");
    }

    #[test]
    fn test_text_separates_adjacent_blocks() {
        let document = Html::parse_document("<body><p>kayako</p><p>kayako</p></body>");
        assert_eq!(extract_text(&document), "kayako kayako");
    }

    #[test]
    fn test_links_are_resolved_and_filtered() {
        let html = r#"
            <a href="https://www.rust-lang.org">Rust</a>
            <a href="/docs">Docs</a>
            <a href="../about">About</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="javascript:void(0)">Nothing</a>
            <a href="ftp://example.com/file">FTP</a>
        "#;
        let document = Html::parse_document(html);
        let links = extract_links(&document, &base());
        assert_eq!(
            links,
            vec![
                "https://www.rust-lang.org/",
                "https://example.com/docs",
                "https://example.com/about",
            ]
        );
    }

    #[test]
    fn test_links_keep_duplicates_and_fragments() {
        let html = r##"<a href="/a">A</a><a href="/a#top">A again</a><a href="/a">A</a>"##;
        let document = Html::parse_document(html);
        let links = extract_links(&document, &base());
        assert_eq!(
            links,
            vec![
                "https://example.com/a",
                "https://example.com/a#top",
                "https://example.com/a",
            ]
        );
    }
}
