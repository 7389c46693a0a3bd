//! Headline counts for a selection.

use serde::Serialize;

use super::links::count_links;
use crate::core::Selection;

/// The four headline numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Messages other than system notifications.
    pub num_messages: usize,
    /// Whitespace tokens across authored text messages.
    pub num_words: usize,
    /// Media placeholders.
    pub num_media_messages: usize,
    /// URL occurrences in non-system messages.
    pub num_links: usize,
}

/// Computes [`Stats`] in a single pass.
pub fn fetch_stats(selection: &Selection<'_>) -> Stats {
    selection.activity().fold(Stats::default(), |mut stats, entry| {
        let message = &entry.message;
        stats.num_messages += 1;
        stats.num_links += count_links(&message.text);
        if message.is_media() {
            stats.num_media_messages += 1;
        } else {
            stats.num_words += message.text.split_whitespace().count();
        }
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::core::{Corpus, Who, select};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_media_count() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let messages: Vec<Message> = (0..10)
            .map(|i| {
                if i % 3 == 0 && i > 0 {
                    Message::media(ts, "Alice", "<Media omitted>")
                } else {
                    Message::new(ts, "Alice", "two words")
                }
            })
            .collect();
        let corpus = Corpus::new(messages);
        let stats = fetch_stats(&select(&corpus, &Who::Overall));
        assert_eq!(stats.num_messages, 10);
        assert_eq!(stats.num_media_messages, 3);
        assert_eq!(stats.num_words, 14);
    }

    #[test]
    fn test_links_and_system() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let corpus = Corpus::new(vec![
            Message::system(ts, "Alice changed the group description to https://x.co"),
            Message::new(ts, "Alice", "Check 😀 this out https://x.co"),
        ]);
        let stats = fetch_stats(&select(&corpus, &Who::Overall));
        assert_eq!(
            stats,
            Stats {
                num_messages: 1,
                num_words: 5,
                num_media_messages: 0,
                num_links: 1,
            }
        );
    }

    #[test]
    fn test_empty_selection() {
        let corpus = Corpus::default();
        assert_eq!(fetch_stats(&select(&corpus, &Who::Overall)), Stats::default());
    }
}
