//! Transcript parser: raw export text to a [`Corpus`].
//!
//! Parsing runs in two passes over the physical lines:
//!
//! 1. Sample the stamps of the first header-shaped lines and let a
//!    [`GrammarDetector`] decide the date/time grammar once for the whole
//!    transcript.
//! 2. Classify every line as a header or a continuation under that grammar
//!    and fold continuations into the message before them.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let raw = "\
//! [1/15/24, 10:30:45 AM] Alice: Hello
//! and welcome
//! [1/15/24, 10:31:02 AM] Bob: <Media omitted>
//! [1/15/24, 10:32:00 AM] Carol joined using this group's invite link
//! ";
//!
//! let corpus = TranscriptParser::new().parse_str(raw)?;
//! assert_eq!(corpus.len(), 3);
//! assert_eq!(corpus.entries()[0].message.text, "Hello\nand welcome");
//! assert!(corpus.entries()[1].message.is_media());
//! assert!(corpus.entries()[2].message.is_system());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::Message;
use crate::config::TranscriptConfig;
use crate::core::Corpus;
use crate::error::{ChatlensError, Result};
use crate::parsing::{
    DateGrammar, FixedGrammar, GrammarDetector, Header, Line, SampleDetector, Stamp, classify,
    is_blank, split_stamp,
};

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::config::TranscriptConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(
///     TranscriptConfig::new().with_media_placeholder("<Medien ausgeschlossen>"),
/// );
/// let corpus = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct TranscriptParser {
    config: TranscriptConfig,
    detector: Box<dyn GrammarDetector>,
}

impl TranscriptParser {
    /// Creates a parser with default configuration and grammar detection.
    pub fn new() -> Self {
        Self::with_config(TranscriptConfig::default())
    }

    /// Creates a parser with custom configuration.
    ///
    /// A grammar set in the configuration replaces detection.
    pub fn with_config(config: TranscriptConfig) -> Self {
        let detector: Box<dyn GrammarDetector> = match config.grammar {
            Some(grammar) => Box::new(FixedGrammar(grammar)),
            None => Box::new(SampleDetector),
        };
        Self { config, detector }
    }

    /// Replaces the grammar detection strategy.
    #[must_use]
    pub fn with_detector(mut self, detector: impl GrammarDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reads and parses a UTF-8 transcript file.
    pub fn parse(&self, path: &Path) -> Result<Corpus> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses transcript text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::FormatDetection`] if the grammar of a
    /// non-empty transcript cannot be determined.
    pub fn parse_str(&self, content: &str) -> Result<Corpus> {
        let lines: Vec<&str> = content.lines().collect();
        let Some(last) = lines.iter().rposition(|line| !is_blank(line)) else {
            return Ok(Corpus::default());
        };
        // Blank lines at the end of the export belong to no message.
        let lines = &lines[..=last];

        let sample: Vec<&str> = lines.iter().copied().filter(|l| !is_blank(l)).collect();
        let grammar = self.detect_grammar(&sample)?;

        let mut messages: Vec<Message> = Vec::new();
        let mut orphans = 0usize;
        let mut degraded = 0usize;

        for (index, line) in lines.iter().enumerate() {
            match classify(line, &grammar) {
                Line::Header(header) => messages.push(self.build_message(header)),
                Line::Continuation(text) => {
                    if split_stamp(text).is_some() {
                        degraded += 1;
                        warn!(line = index + 1, "stamp does not fit {grammar}; kept as text");
                    }
                    match messages.last_mut() {
                        Some(last) => last.push_line(text),
                        None if is_blank(text) => {}
                        None => orphans += 1,
                    }
                }
            }
        }

        debug!(
            messages = messages.len(),
            orphans, degraded, "parsed transcript"
        );

        Ok(Corpus::new(messages))
    }

    /// Decides the grammar from the first `sample_size` header-shaped lines.
    ///
    /// If none of those stamps shows whether the day or the month comes
    /// first, scanning goes on until one does, so a long run of early-month
    /// dates doesn't decide the order by default.
    pub fn detect_grammar(&self, lines: &[&str]) -> Result<DateGrammar> {
        let mut examined = 0usize;
        let mut stamps: Vec<Stamp<'_>> = Vec::with_capacity(self.config.sample_size);
        let mut rest = lines.iter();

        for line in rest.by_ref() {
            examined += 1;
            if let Some((stamp, _)) = split_stamp(line) {
                stamps.push(stamp);
                if stamps.len() >= self.config.sample_size {
                    break;
                }
            }
        }

        if stamps.iter().all(|stamp| stamp.order_hint().is_none()) {
            for line in rest {
                examined += 1;
                if let Some((stamp, _)) = split_stamp(line) {
                    if stamp.order_hint().is_some() {
                        debug!(line = examined, "date order decided past the sample");
                        stamps.push(stamp);
                        break;
                    }
                }
            }
        }

        let grammar = self
            .detector
            .detect(&stamps)
            .ok_or_else(|| ChatlensError::format_detection(examined))?;

        debug!(%grammar, sampled = stamps.len(), "detected date grammar");
        Ok(grammar)
    }

    fn build_message(&self, header: Header<'_>) -> Message {
        match header.sender {
            None => Message::system(header.timestamp, header.body),
            Some(sender) if header.body.trim() == self.config.media_placeholder => {
                Message::media(header.timestamp, sender, header.body.trim())
            }
            Some(sender) => Message::new(header.timestamp, sender, header.body),
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses transcript text with the default configuration.
pub fn parse(content: &str) -> Result<Corpus> {
    TranscriptParser::new().parse_str(content)
}
