//! Serializers for reports and message selections.
//!
//! Each format comes as a `to_*` function returning a `String` and a
//! `write_*` function that streams into a file:
//!
//! | Format | Feature | Carries |
//! |--------|---------|---------|
//! | [`to_json`] | `json-output` | One [`Report`](crate::analysis::Report) object |
//! | [`to_jsonl`] | `json-output` | The report, one `{"operation", "who", "result"}` line per analytic |
//! | [`to_csv`] | `csv-output` | The selected messages, `;`-delimited |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analysis::Analyzer;
//! use chatlens::core::output::{to_csv, write_json, write_jsonl};
//! use chatlens::core::{FilterConfig, apply_filters};
//! use chatlens::parser::TranscriptParser;
//!
//! let corpus = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! let filter = FilterConfig::new().with_who("Alice");
//! let report = Analyzer::new().analyze(&corpus, &filter);
//!
//! write_json(&report, "report.json")?;
//! write_jsonl(&report, "report.jsonl")?;
//! let csv_string = to_csv(&apply_filters(&corpus, &filter))?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
