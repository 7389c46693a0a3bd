//! Participant ranking by message volume.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::Corpus;

/// One participant's message count and share of all authored messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    pub count: usize,
    /// Percentage, rounded to two decimals.
    pub percent: f64,
}

/// Ranks every sender in the full corpus, busiest first.
///
/// System notifications are not attributed to anyone. Equal counts are
/// ordered by name.
pub fn most_busy_users(corpus: &Corpus) -> Vec<UserShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for message in corpus.messages().filter(|m| !m.is_system()) {
        *counts.entry(message.sender.as_str()).or_default() += 1;
    }

    let total: usize = counts.values().sum();
    let mut ranking: Vec<UserShare> = counts
        .into_iter()
        .map(|(name, count)| UserShare {
            name: name.to_string(),
            count,
            percent: round2(count as f64 * 100.0 / total as f64),
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranking
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
