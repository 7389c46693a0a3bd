//! Descriptive analytics over a corpus selection.
//!
//! Each submodule is a set of pure functions over a [`Selection`]:
//!
//! - [`temporal`] - timelines, weekday/month maps, hour heatmap
//! - [`lexical`] - word frequency tables
//! - [`emoji`] - emoji cluster counts
//! - [`sentiment`] - polarity classification
//! - [`ranking`] - participant ranking (always over the full corpus)
//! - [`stats`] / [`links`] - headline counts
//!
//! [`Analyzer`] runs all of them for one filter and gathers a [`Report`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::Analyzer;
//! use chatlens::core::FilterConfig;
//! use chatlens::parser::parse;
//!
//! let corpus = parse("15/01/2024, 10:30 - Alice: Check 😀 this out https://x.co")?;
//! let report = Analyzer::new().analyze(&corpus, &FilterConfig::new());
//!
//! assert_eq!(report.stats.num_links, 1);
//! assert_eq!(report.emoji.as_ref().map(Vec::len), Some(1));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod emoji;
pub mod lexical;
pub mod links;
pub mod ranking;
pub mod sentiment;
pub mod stats;
pub mod temporal;

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::core::{Corpus, FilterConfig, Selection, Who, apply_filters};
use crate::error::Result;

pub use emoji::{EmojiMatcher, emoji_helper};
pub use lexical::{most_common_words, word_frequencies};
pub use ranking::{UserShare, most_busy_users};
pub use sentiment::{LexiconScorer, PolarityScorer, Sentiment, SentimentCounts, sentiment_analysis};
pub use stats::{Stats, fetch_stats};
pub use temporal::{
    DailyCount, Heatmap, activity_heatmap, daily_timeline, month_activity_map, monthly_timeline,
    most_active_hour, week_activity_map,
};

/// A labelled count: a month bucket, a weekday, a word or an emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Every analytic for one selection, named after the operation that made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub who: Who,
    pub stats: Stats,
    pub monthly_timeline: Vec<LabelCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity_map: Vec<LabelCount>,
    pub month_activity_map: Vec<LabelCount>,
    pub activity_heatmap: Option<Heatmap>,
    pub most_active_hour: [usize; 24],
    pub most_busy_users: Vec<UserShare>,
    pub most_common_words: Vec<LabelCount>,
    pub word_frequencies: Vec<LabelCount>,
    pub emoji: Option<Vec<LabelCount>>,
    pub sentiment: SentimentCounts,
}

/// Runs the analytics with a fixed configuration, scorer and emoji matcher.
pub struct Analyzer {
    config: AnalysisConfig,
    scorer: Box<dyn PolarityScorer>,
    emoji: EmojiMatcher,
}

impl Analyzer {
    /// Default configuration with the [`LexiconScorer`].
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
            scorer: Box::new(LexiconScorer::new()),
            emoji: EmojiMatcher::new(),
        }
    }

    /// Custom configuration, validated up front.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replaces the sentiment scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Replaces the emoji matcher.
    #[must_use]
    pub fn with_emoji_matcher(mut self, matcher: EmojiMatcher) -> Self {
        self.emoji = matcher;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs every analytic for the entries `filter` selects.
    ///
    /// The participant ranking ignores the filter and covers the whole corpus.
    pub fn analyze(&self, corpus: &Corpus, filter: &FilterConfig) -> Report {
        let started = Instant::now();
        let selection = apply_filters(corpus, filter);
        debug!(who = %filter.who, entries = selection.len(), "analyzing selection");

        let ((stats, temporal), ((lexicon, ranking), (emoji, sentiment))) = join(
            || {
                join(
                    || fetch_stats(&selection),
                    || Temporal::compute(&selection),
                )
            },
            || {
                join(
                    || {
                        join(
                            || self.lexicon(&selection),
                            || most_busy_users(corpus),
                        )
                    },
                    || {
                        join(
                            || emoji_helper(&selection, &self.emoji),
                            || {
                                sentiment_analysis(
                                    &selection,
                                    self.scorer.as_ref(),
                                    &self.config.sentiment,
                                )
                            },
                        )
                    },
                )
            },
        );

        let (word_frequencies, most_common_words) = lexicon;
        debug!(elapsed = ?started.elapsed(), "analysis finished");

        Report {
            who: filter.who.clone(),
            stats,
            monthly_timeline: temporal.monthly,
            daily_timeline: temporal.daily,
            week_activity_map: temporal.week,
            month_activity_map: temporal.month,
            activity_heatmap: temporal.heatmap,
            most_active_hour: temporal.hours,
            most_busy_users: ranking,
            most_common_words,
            word_frequencies,
            emoji,
            sentiment,
        }
    }

    /// Full frequency table plus its top-N prefix.
    fn lexicon(&self, selection: &Selection<'_>) -> (Vec<LabelCount>, Vec<LabelCount>) {
        let all = word_frequencies(selection, &self.config.stopwords);
        let top = all.iter().take(self.config.top_n).cloned().collect();
        (all, top)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

struct Temporal {
    monthly: Vec<LabelCount>,
    daily: Vec<DailyCount>,
    week: Vec<LabelCount>,
    month: Vec<LabelCount>,
    heatmap: Option<Heatmap>,
    hours: [usize; 24],
}

impl Temporal {
    fn compute(selection: &Selection<'_>) -> Self {
        Self {
            monthly: monthly_timeline(selection),
            daily: daily_timeline(selection),
            week: week_activity_map(selection),
            month: month_activity_map(selection),
            heatmap: activity_heatmap(selection),
            hours: most_active_hour(selection),
        }
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (a(), b())
}
