//! Emoji cluster extraction.
//!
//! A cluster is what a reader sees as one emoji: a pictograph with its
//! variation selector and skin tone, a ZWJ family like 👨‍👩‍👧, a flag made
//! of two regional indicators, a keycap like 1️⃣, or a subdivision flag
//! built from tag characters.
//!
//! A pictograph followed by the text-presentation selector U+FE0E (`❤︎`)
//! asked to be drawn as a plain glyph and is not counted.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::LabelCount;
use crate::core::Selection;

const EMOJI_PATTERN: &str = concat!(
    r"(?:[\x{1F1E6}-\x{1F1FF}]{2})",
    r"|(?:[0-9#*]\x{FE0F}?\x{20E3})",
    r"|(?:\p{Extended_Pictographic}[\x{FE0E}\x{FE0F}]?[\x{1F3FB}-\x{1F3FF}]?",
    r"[\x{E0020}-\x{E007F}]*",
    r"(?:\x{200D}\p{Extended_Pictographic}[\x{FE0E}\x{FE0F}]?[\x{1F3FB}-\x{1F3FF}]?)*)",
);

static DEFAULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMOJI_PATTERN).expect("emoji pattern is valid"));

/// Finds emoji clusters in text.
#[derive(Debug, Clone)]
pub struct EmojiMatcher {
    re: Regex,
}

impl Default for EmojiMatcher {
    fn default() -> Self {
        Self {
            re: DEFAULT_RE.clone(),
        }
    }
}

impl EmojiMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom cluster pattern.
    pub fn with_regex(re: Regex) -> Self {
        Self { re }
    }

    /// Iterates over the clusters in `text`, left to right.
    pub fn find_iter<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.re
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|cluster| !is_text_presentation(cluster))
    }
}

fn is_text_presentation(cluster: &str) -> bool {
    cluster.contains(TEXT_SELECTOR)
}

const TEXT_SELECTOR: char = '\u{fe0e}';

/// Splits a token at every emoji cluster, text-presentation forms included.
pub(crate) fn split_on_emoji(token: &str) -> impl Iterator<Item = &str> {
    DEFAULT_RE.split(token).filter(|piece| !piece.is_empty())
}

/// Emoji clusters with their counts, most frequent first.
///
/// Ties keep first-seen order. Returns `None` when no emoji appear.
pub fn emoji_helper(selection: &Selection<'_>, matcher: &EmojiMatcher) -> Option<Vec<LabelCount>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<LabelCount> = Vec::new();
    for entry in selection.activity() {
        for cluster in matcher.find_iter(&entry.message.text) {
            match index.get(cluster) {
                Some(&slot) => table[slot].count += 1,
                None => {
                    index.insert(cluster, table.len());
                    table.push(LabelCount::new(cluster, 1));
                }
            }
        }
    }
    if table.is_empty() {
        return None;
    }

    table.sort_by(|a, b| b.count.cmp(&a.count));
    Some(table)
}
