//! Word frequency tables.
//!
//! A token is a whitespace-separated piece of an authored text message,
//! split at emoji and lowercased with punctuation trimmed off both ends.
//! Links, empty tokens and stopwords are dropped.

use std::collections::HashMap;

use super::LabelCount;
use super::emoji::split_on_emoji;
use super::links::looks_like_link;
use crate::config::Stopwords;
use crate::core::Selection;

pub use crate::config::DEFAULT_TOP_N;

/// Normalizes one whitespace token, or returns `None` if nothing is left.
pub fn normalize_token(token: &str) -> Option<String> {
    if looks_like_link(token) {
        return None;
    }
    let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Normalized, stopword-free tokens of a message body, in order.
///
/// Emoji inside a token split it: `wow😀wow` gives two `wow`s.
pub fn tokenize<'a>(text: &'a str, stopwords: &'a Stopwords) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace()
        .filter(|token| !looks_like_link(token))
        .flat_map(split_on_emoji)
        .filter_map(normalize_token)
        .filter(|word| !stopwords.contains(word))
}

/// Every word with its count, most frequent first.
///
/// Ties keep the order in which the words first appeared.
pub fn word_frequencies(selection: &Selection<'_>, stopwords: &Stopwords) -> Vec<LabelCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<LabelCount> = Vec::new();

    for entry in selection.authored() {
        for word in tokenize(&entry.message.text, stopwords) {
            match index.get(&word) {
                Some(&slot) => table[slot].count += 1,
                None => {
                    index.insert(word.clone(), table.len());
                    table.push(LabelCount::new(word, 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// The `n` most frequent words.
pub fn most_common_words(
    selection: &Selection<'_>,
    stopwords: &Stopwords,
    n: usize,
) -> Vec<LabelCount> {
    let mut table = word_frequencies(selection, stopwords);
    table.truncate(n);
    table
}
