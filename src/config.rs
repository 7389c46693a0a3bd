//! Configuration types for parsing and analysis.
//!
//! Plain structs with `with_*` builders and serde derives, free of any CLI
//! framework dependency.
//!
//! - [`TranscriptConfig`] - media placeholder, grammar override, detection sample
//! - [`AnalysisConfig`] - top-N, stopwords, sentiment thresholds
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, Stopwords, TranscriptConfig};
//! use chatlens::parsing::{Clock, DateGrammar, DateOrder};
//!
//! let transcript = TranscriptConfig::new()
//!     .with_grammar(DateGrammar::new(DateOrder::DayFirst, Clock::TwentyFourHour))
//!     .with_media_placeholder("<Без медиафайлов>");
//!
//! let analysis = AnalysisConfig::new()
//!     .with_top_n(10)
//!     .with_stopwords(Stopwords::from_text("the\nand\nyes"));
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::parsing::DateGrammar;

/// Placeholder Android exports substitute for attachments.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Number of header-shaped lines examined for grammar detection.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Default length of the most-common-words table.
pub const DEFAULT_TOP_N: usize = 20;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new().with_sample_size(50);
/// assert!(config.grammar.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Body that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Grammar to use instead of detecting one (default: detect)
    pub grammar: Option<DateGrammar>,

    /// Header-shaped lines sampled for detection (default: 20)
    pub sample_size: usize,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            grammar: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media-omitted placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Forces a grammar, skipping detection.
    #[must_use]
    pub fn with_grammar(mut self, grammar: DateGrammar) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// Sets how many header-shaped lines detection looks at (at least one).
    #[must_use]
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size.max(1);
        self
    }
}

/// Score cut points for sentiment classification.
///
/// A score strictly above `positive` is positive, strictly below `negative`
/// is negative, anything in between is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

impl SentimentThresholds {
    /// Creates a threshold pair.
    pub fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    /// Checks that `negative <= positive` and both are finite.
    pub fn validate(&self) -> Result<()> {
        if !self.positive.is_finite() || !self.negative.is_finite() {
            return Err(ChatlensError::invalid_config(
                "sentiment thresholds must be finite numbers",
            ));
        }
        if self.negative > self.positive {
            return Err(ChatlensError::invalid_config(format!(
                "negative threshold {} is above positive threshold {}",
                self.negative, self.positive
            )));
        }
        Ok(())
    }
}

/// Words excluded from lexical frequency tables.
///
/// Stored lowercased; lookups are expected to be lowercased too.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stopwords(BTreeSet<String>);

impl Stopwords {
    /// An empty set: every token counts.
    pub fn none() -> Self {
        Self::default()
    }

    /// A compact English list.
    pub fn english() -> Self {
        ENGLISH_STOPWORDS.iter().copied().collect()
    }

    /// Parses one word per line; blank lines and `#` comments are ignored.
    ///
    /// ```rust
    /// use chatlens::config::Stopwords;
    ///
    /// let words = Stopwords::from_text("# hinglish\nhai\n\nKya\n");
    /// assert!(words.contains("kya"));
    /// assert_eq!(words.len(), 2);
    /// ```
    pub fn from_text(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Loads a stopword file (one word per line).
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns `true` if `word` (already lowercased) is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Adds a word.
    pub fn insert(&mut self, word: &str) {
        self.0.insert(word.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Stopwords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_lowercase).collect())
    }
}

/// Configuration for the analytics.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{AnalysisConfig, SentimentThresholds};
///
/// let config = AnalysisConfig::new()
///     .with_top_n(5)
///     .with_sentiment(SentimentThresholds::new(0.2, -0.2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Length of the most-common-words table (default: 20)
    pub top_n: usize,

    /// Words left out of lexical tables (default: English list)
    pub stopwords: Stopwords,

    /// Sentiment cut points (default: ±0.05)
    pub sentiment: SentimentThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            stopwords: Stopwords::english(),
            sentiment: SentimentThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the most-common-words cutoff.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Replaces the stopword set.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Sets the sentiment thresholds.
    #[must_use]
    pub fn with_sentiment(mut self, thresholds: SentimentThresholds) -> Self {
        self.sentiment = thresholds;
        self
    }

    /// Rejects a zero top-N and inverted sentiment thresholds.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ChatlensError::invalid_config("top_n must be at least 1"));
        }
        self.sentiment.validate()
    }
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "don't", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "i'm", "if", "in", "into", "is", "it", "it's", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "you're", "your", "yours",
    "yourself", "yourselves",
];
