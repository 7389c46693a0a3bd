//! Error type shared by parsing, configuration and output.
//!
//! Most irregularities in a transcript are not errors: a line that doesn't
//! fit the detected grammar is kept as text of the message before it, and an
//! analytic with nothing to count returns an empty table or `None`. What is
//! left ends up here:
//!
//! - the grammar of the export cannot be detected at all
//!   ([`ChatlensError::FormatDetection`])
//! - a file cannot be read or written
//! - a filter date, output format or analysis setting is rejected

use std::io;

use thiserror::Error;

/// `Result` alias with [`ChatlensError`] as the error.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::parser::parse;
///
/// fn count_messages(raw: &str) -> Result<usize> {
///     Ok(parse(raw)?.len())
/// }
/// assert_eq!(count_messages("15/01/2024, 10:30 - Alice: hi").unwrap(), 1);
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// Everything that can go wrong in chatlens.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// Reading the transcript or stopword file, or writing output, failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No supported date/time grammar fits the sampled header lines.
    ///
    /// Either none of the first `sampled` lines starts with a stamp, or the
    /// stamps point to both day-first and month-first dates.
    #[error(
        "Could not detect the date/time format of the transcript (examined {sampled} lines). \
         Is this an exported chat?"
    )]
    FormatDetection { sampled: usize },

    /// Unknown output format name or file extension.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        format: &'static str,
        message: String,
    },

    /// A filter date that isn't `YYYY-MM-DD`.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
    },

    /// Analysis settings that contradict each other or are out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatlensError {
    pub fn format_detection(sampled: usize) -> Self {
        ChatlensError::FormatDetection { sampled }
    }

    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// A filter date error; the expected shape is always `YYYY-MM-DD`.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    pub fn is_format_detection(&self) -> bool {
        matches!(self, ChatlensError::FormatDetection { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatlensError::InvalidConfig { .. })
    }
}
