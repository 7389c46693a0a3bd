//! Output format selection.
//!
//! [`OutputFormat`] is a plain enum with no CLI framework dependency; the
//! binary maps its own flag onto it.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::analysis::Analyzer;
//! use chatlens::core::{FilterConfig, apply_filters};
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::parser::parse;
//!
//! let corpus = parse("15/01/2024, 10:30 - Alice: Hello!")?;
//! let filter = FilterConfig::new();
//! let report = Analyzer::new().analyze(&corpus, &filter);
//!
//! let format = OutputFormat::from_path("out.jsonl")?;
//! let text = to_format_string(&report, &apply_filters(&corpus, &filter), format)?;
//! assert_eq!(text.lines().count(), 12);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::Report;
use crate::core::Selection;
use crate::error::{ChatlensError, Result};

/// What to emit and how.
///
/// - [`Json`](OutputFormat::Json) - The report, pretty-printed
/// - [`Jsonl`](OutputFormat::Jsonl) - The report, one analytic per line
/// - [`Csv`](OutputFormat::Csv) - The selected messages themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty JSON report (default)
    #[default]
    Json,

    /// JSON Lines, one `{"operation", "who", "result"}` object per analytic
    ///
    /// Also known as NDJSON.
    Jsonl,

    /// Semicolon-delimited message table
    Csv,
}

impl OutputFormat {
    /// Canonical file extension, without the dot.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Every name [`FromStr`](std::str::FromStr) accepts, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Picks the format from the extension of `path`, case-insensitively.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("report.ndjson").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("report.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse().map_err(|_| {
            ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv"),
            )
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.to_ascii_lowercase();
        match name.as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::Jsonl),
            "csv" => Ok(Self::Csv),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{s}'. Expected one of: {}",
                    Self::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Renders `format` to `path`.
///
/// JSON and JSONL carry `report`; CSV carries the messages in `selection`.
/// The file is only created once rendering has succeeded, so an output
/// format compiled out of this build leaves nothing behind.
pub fn write_to_format(
    report: &Report,
    selection: &Selection<'_>,
    path: &str,
    format: OutputFormat,
) -> Result<()> {
    let rendered = to_format_string(report, selection, format)?;
    std::fs::write(path, rendered)?;
    tracing::debug!(%format, path, "wrote output");
    Ok(())
}

/// Renders the output for `format` as a string.
#[allow(unused_variables)]
pub fn to_format_string(
    report: &Report,
    selection: &Selection<'_>,
    format: OutputFormat,
) -> Result<String> {
    use crate::core::output;

    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => output::to_json(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => output::to_jsonl(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::to_csv(selection),
        #[allow(unreachable_patterns)]
        _ => {
            let feature = if format == OutputFormat::Csv {
                "csv-output"
            } else {
                "json-output"
            };
            Err(ChatlensError::invalid_format(
                "output",
                format!("{format} output needs the '{feature}' feature"),
            ))
        }
    }
}
