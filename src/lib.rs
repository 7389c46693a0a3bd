//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into a
//! queryable corpus and a set of descriptive analytics.
//!
//! ## Overview
//!
//! A WhatsApp "Export chat" file is plain text where each message starts
//! with a date/time stamp and may continue over several lines. The stamp
//! grammar depends on the exporting phone's locale, so Chatlens samples the
//! file to work out whether dates are day-first or month-first and whether
//! the clock is 12h or 24h.
//!
//! Once parsed, a [`Corpus`] can be sliced by participant and date range and
//! fed to the [`analysis`] module:
//! - Message, word, media and link counts
//! - Monthly and daily timelines, weekday/month maps, weekday x hour heatmap
//! - Busiest participants with their share of the chat
//! - Most common words (stopwords removed) and emoji usage
//! - Positive/neutral/negative sentiment counts
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! 15/01/2024, 10:30 - Alice: Good morning! 😀
//! 15/01/2024, 10:31 - Bob: <Media omitted>
//! 16/01/2024, 22:05 - Alice: Great dinner yesterday
//! see you soon";
//!
//!     let corpus = parse(transcript)?;
//!     assert_eq!(corpus.len(), 3);
//!
//!     let report = Analyzer::new().analyze(&corpus, &FilterConfig::new().with_who("Alice"));
//!     assert_eq!(report.stats.num_messages, 2);
//!     assert_eq!(report.stats.num_media_messages, 0);
//!     Ok(())
//! }
//! ```
//!
//! ## Reading a File
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! let parser = TranscriptParser::with_config(
//!     TranscriptConfig::new().with_media_placeholder("<Medien ausgeschlossen>"),
//! );
//! let corpus = parser.parse("chat.txt".as_ref())?;
//! let filter = FilterConfig::new().with_date_from("2024-01-01")?;
//! let report = Analyzer::new().analyze(&corpus, &filter);
//! write_json(&report, "report.json")?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse`](parser::parse)
//! - [`parsing`] - Date grammars, grammar detection and line classification
//! - [`core`] - [`Corpus`], selection and filtering, output writers
//! - [`analysis`] - [`Analyzer`](analysis::Analyzer), [`Report`](analysis::Report) and the individual analytics
//! - [`config`] - Parsing and analysis configuration
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::Corpus;
pub use error::{ChatlensError, Result};
pub use message::{Message, MessageKind, SYSTEM_SENDER};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Messages and the corpus
    pub use crate::core::{Corpus, Selection};
    pub use crate::message::{Message, MessageKind};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};
    pub use crate::parsing::{Clock, DateGrammar, DateOrder};

    // Configuration
    pub use crate::config::{AnalysisConfig, SentimentThresholds, Stopwords, TranscriptConfig};

    // Filtering
    pub use crate::core::{FilterConfig, Who, apply_filters};

    // Analysis
    pub use crate::analysis::{Analyzer, Report};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::OutputFormat;
}
