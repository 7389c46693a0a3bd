//! URL detection shared by the stats and lexical passes.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).expect("url pattern is valid")
});

/// Number of URLs in `text`, counted per occurrence.
pub fn count_links(text: &str) -> usize {
    URL_RE.find_iter(text).count()
}

/// Returns `true` if a whitespace token contains a URL.
pub fn looks_like_link(token: &str) -> bool {
    URL_RE.is_match(token)
}
