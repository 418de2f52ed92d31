// src/crawl/counter.rs
// =============================================================================
// Counts how many times the search term appears in a page's text.
//
// The term is compiled as a case-insensitive REGULAR EXPRESSION, not a
// literal string. That means "kayako" matches "KAYAKO" and "KaYaKo", but
// also that "a.c" matches "abc". Users who want a literal dot must write
// "a\.c". An invalid pattern is rejected before the crawl fetches anything.
// =============================================================================

use regex::{Regex, RegexBuilder};

use super::error::CrawlError;

#[derive(Debug, Clone)]
pub struct TermCounter {
    pattern: Regex,
}

impl TermCounter {
    pub fn new(term: &str) -> Result<Self, CrawlError> {
        let pattern = RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .map_err(CrawlError::InvalidTerm)?;

        Ok(Self { pattern })
    }

    /// Number of non-overlapping matches in `text`
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    pub fn term(&self) -> &str {
        self.pattern.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_case_insensitive() {
        let counter = TermCounter::new("kayako").unwrap();
        assert_eq!(counter.count("KAYAKO kayako KaYaKo"), 3);
    }

    #[test]
    fn test_count_without_matches() {
        let counter = TermCounter::new("foo").unwrap();
        assert_eq!(counter.count("no match"), 0);
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let counter = TermCounter::new("aa").unwrap();
        assert_eq!(counter.count("aaaa"), 2);
    }

    #[test]
    fn test_term_is_a_pattern() {
        let counter = TermCounter::new("a.c").unwrap();
        assert_eq!(counter.count("abc a.c AXC"), 3);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = TermCounter::new("kayako(").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidTerm(_)));
    }
}
