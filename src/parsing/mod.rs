//! Transcript parsing building blocks.
//!
//! - [`grammar`] - date/time grammars and the [`GrammarDetector`] strategy
//! - [`line`] - the header/continuation line classifier
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) glues them together.

pub mod grammar;
pub mod line;

pub use grammar::{
    Clock, DateGrammar, DateOrder, FixedGrammar, GrammarDetector, SampleDetector, Stamp,
};
pub use line::{Header, Line, classify, is_blank, split_stamp};
