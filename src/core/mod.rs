//! The message table and everything that reads it directly.
//!
//! [`Corpus`] holds parsed messages with their calendar fields; [`select`]
//! and [`apply_filters`] narrow it to a [`Selection`] for one participant
//! and date window; [`output`] serializes reports and selections.
//!
//! ```rust
//! use chatlens::core::{FilterConfig, apply_filters};
//! use chatlens::parser::parse;
//!
//! let corpus = parse("15/01/2024, 10:30 - Alice: hi\n15/01/2024, 10:31 - Bob: hey").unwrap();
//! let selection = apply_filters(&corpus, &FilterConfig::new().with_who("Bob"));
//! assert_eq!(selection.len(), 1);
//! ```

pub mod corpus;
pub mod filter;
pub mod output;

pub use corpus::{Calendar, Corpus, Entry, MONTH_NAMES, WEEKDAY_NAMES, period_label};
pub use filter::{FilterConfig, Selection, Who, apply_filters, select};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
