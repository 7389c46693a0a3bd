//! JSON report writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::analysis::Report;
use crate::error::Result;

/// Writes a report to a JSON file, pretty-printed.
///
/// # Format
/// ```json
/// {
///   "who": "Overall",
///   "stats": {"num_messages": 42, ...},
///   "monthly_timeline": [{"label": "January-2024", "count": 40}, ...],
///   ...
/// }
/// ```
pub fn write_json(report: &Report, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
