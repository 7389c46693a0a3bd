//! Message polarity scoring and classification.
//!
//! Scoring is a strategy: anything implementing [`PolarityScorer`] works,
//! including plain closures. The bundled [`LexiconScorer`] is a small
//! valence-lexicon scorer with negation, intensifiers and emphasis.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::sentiment::{LexiconScorer, PolarityScorer, Sentiment};
//! use chatlens::config::SentimentThresholds;
//!
//! let scorer = LexiconScorer::new();
//! let thresholds = SentimentThresholds::default();
//!
//! assert_eq!(Sentiment::classify(scorer.score("I love this!"), &thresholds), Sentiment::Positive);
//! assert_eq!(Sentiment::classify(scorer.score("this is not good"), &thresholds), Sentiment::Negative);
//! assert_eq!(Sentiment::classify(scorer.score("see you at 5"), &thresholds), Sentiment::Neutral);
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::config::SentimentThresholds;
use crate::core::Selection;

/// Scores a message body; higher is more positive.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Polarity class of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Above `positive` is positive, below `negative` is negative.
    pub fn classify(score: f64, thresholds: &SentimentThresholds) -> Self {
        if score > thresholds.positive {
            Sentiment::Positive
        } else if score < thresholds.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Message counts per polarity class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}

/// Classifies every authored text message in the selection.
pub fn sentiment_analysis(
    selection: &Selection<'_>,
    scorer: &dyn PolarityScorer,
    thresholds: &SentimentThresholds,
) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for entry in selection.authored() {
        counts.add(Sentiment::classify(
            scorer.score(&entry.message.text),
            thresholds,
        ));
    }
    counts
}

const BOOSTER_INCR: f64 = 0.293;
const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAIM_INCR: f64 = 0.292;
const MAX_EXCLAIMS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence-lexicon scorer producing a compound score in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valence: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            valence: LEXICON
                .iter()
                .map(|(word, v)| ((*word).to_string(), *v))
                .collect(),
        }
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overrides a lexicon entry (lowercase words).
    #[must_use]
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.valence.insert(word.to_lowercase(), valence);
        self
    }

    fn valence_of(&self, token: &str) -> Option<f64> {
        self.valence
            .get(token)
            .or_else(|| self.valence.get(token.to_lowercase().as_str()))
            .copied()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let raw: Vec<&str> = text.split_whitespace().collect();
        let tokens: Vec<&str> = raw
            .iter()
            .map(|t| {
                let trimmed = t.trim_matches(|c: char| c.is_ascii_punctuation());
                // Emoticons are all punctuation; keep them whole.
                if trimmed.is_empty() { *t } else { trimmed }
            })
            .collect();

        let mixed_case = tokens.iter().any(|t| is_shouted(t))
            && tokens
                .iter()
                .any(|t| t.chars().any(char::is_lowercase));

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence_of(token) else {
                continue;
            };

            if mixed_case && is_shouted(token) {
                valence += CAPS_INCR.copysign(valence);
            }

            let window = &tokens[i.saturating_sub(3)..i];
            for (distance, prev) in window.iter().rev().enumerate() {
                let lower = prev.to_lowercase();
                if let Some(boost) = booster(&lower) {
                    let damp = match distance {
                        0 => 1.0,
                        1 => 0.95,
                        _ => 0.9,
                    };
                    valence += boost.copysign(valence) * damp;
                }
            }
            if window.iter().any(|prev| is_negation(&prev.to_lowercase())) {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        if sum != 0.0 {
            let exclaims = text.matches('!').count().min(MAX_EXCLAIMS);
            sum += (exclaims as f64 * EXCLAIM_INCR).copysign(sum);
        }

        normalize(sum)
    }
}

/// Maps an unbounded sum into `[-1, 1]`.
fn normalize(sum: f64) -> f64 {
    let score = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    score.clamp(-1.0, 1.0)
}

fn is_shouted(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

fn booster(token: &str) -> Option<f64> {
    if BOOSTERS_UP.contains(&token) {
        Some(BOOSTER_INCR)
    } else if BOOSTERS_DOWN.contains(&token) {
        Some(-BOOSTER_INCR)
    } else {
        None
    }
}

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "dont", "cant", "wont", "isnt", "wasnt", "didnt", "doesnt", "aint",
];

const BOOSTERS_UP: &[&str] = &[
    "very", "really", "so", "extremely", "absolutely", "totally", "incredibly", "super", "most",
    "completely", "highly", "truly", "hella", "fully", "deeply", "especially", "too",
];

const BOOSTERS_DOWN: &[&str] = &[
    "slightly", "somewhat", "barely", "hardly", "kinda", "kindof", "sorta", "little", "marginally",
    "partly", "scarcely",
];

const LEXICON: &[(&str, f64)] = &[
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("like", 1.5),
    ("liked", 1.8),
    ("good", 1.9),
    ("great", 3.1),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("happy", 2.7),
    ("glad", 2.0),
    ("fun", 2.3),
    ("funny", 1.9),
    ("cool", 1.3),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("beautiful", 2.9),
    ("perfect", 2.7),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("yay", 2.4),
    ("haha", 1.6),
    ("hahaha", 1.9),
    ("lol", 1.8),
    ("lmao", 2.0),
    ("sweet", 2.0),
    ("welcome", 2.0),
    ("win", 2.8),
    ("won", 2.7),
    ("yes", 1.7),
    ("agree", 1.5),
    ("safe", 1.9),
    ("proud", 2.1),
    ("excited", 1.4),
    ("care", 2.2),
    ("hope", 1.9),
    ("kind", 2.4),
    ("smile", 1.5),
    ("wow", 2.8),
    ("super", 2.9),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("sad", -2.1),
    ("angry", -2.3),
    ("mad", -2.2),
    ("upset", -1.6),
    ("annoying", -1.7),
    ("annoyed", -1.6),
    ("boring", -1.3),
    ("bored", -1.1),
    ("sorry", -0.3),
    ("sick", -1.7),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("cry", -2.1),
    ("crying", -2.1),
    ("tired", -1.9),
    ("stupid", -2.4),
    ("ugly", -2.3),
    ("fail", -2.5),
    ("failed", -2.3),
    ("wrong", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("scared", -1.9),
    ("afraid", -2.0),
    ("lost", -1.3),
    ("lose", -1.7),
    ("miss", -0.6),
    ("damn", -1.7),
    ("shit", -2.6),
    ("sucks", -1.5),
    ("kill", -3.7),
    ("dead", -3.3),
    ("disappointed", -1.9),
    ("ugh", -1.8),
    ("no", -1.2),
    ("never", -0.8),
    ("fuck", -2.5),
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    ("<3", 1.9),
    (";)", 0.9),
    (":(", -1.9),
    (":-(", -1.9),
    (":'(", -2.2),
    ("😀", 2.0),
    ("😂", 2.1),
    ("😍", 2.9),
    ("❤️", 3.0),
    ("👍", 1.8),
    ("🎉", 2.3),
    ("😢", -2.0),
    ("😡", -2.6),
    ("😞", -2.0),
    ("👎", -1.8),
];
