//! CSV export of a corpus selection.

use std::fs::File;
use std::io::Write;

use crate::core::Selection;
use crate::error::Result;

const HEADER: [&str; 4] = ["Timestamp", "Sender", "Kind", "Text"];

/// Writes the selected messages to a CSV file.
///
/// # Format
/// - Delimiter: `;`, records end with `\n`
/// - Columns: `Timestamp`, `Sender`, `Kind`, `Text`
/// - Timestamps as `YYYY-MM-DD HH:MM:SS`; multiline text stays quoted
/// - Encoding: UTF-8
pub fn write_csv(selection: &Selection<'_>, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(selection, file)
}

/// Converts the selected messages to a CSV string.
pub fn to_csv(selection: &Selection<'_>) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(selection, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()).into()
    })
}

fn write_records<W: Write>(selection: &Selection<'_>, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);
    writer.write_record(HEADER)?;

    for entry in selection.iter() {
        let msg = &entry.message;
        writer.write_record([
            msg.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().as_str(),
            msg.sender.as_str(),
            msg.kind.as_str(),
            msg.text.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::core::{Corpus, Who, select};
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    fn corpus() -> Corpus {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        Corpus::new(vec![
            Message::new(ts, "Alice", "Hello"),
            Message::new(ts, "Bob", "line one\nline two; with semicolon"),
            Message::media(ts, "Bob", "<Media omitted>"),
        ])
    }

    #[test]
    fn test_to_csv_basic() {
        let corpus = corpus();
        let csv = to_csv(&select(&corpus, &Who::Overall)).unwrap();

        assert!(csv.starts_with("Timestamp;Sender;Kind;Text\n"));
        assert!(csv.contains("2024-01-15 10:30:00;Alice;text;Hello"));
        assert!(csv.contains("\"line one\nline two; with semicolon\""));
        assert!(csv.contains("Bob;media;<Media omitted>"));
    }

    #[test]
    fn test_write_csv_roundtrip_reader() {
        let corpus = corpus();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_csv(&select(&corpus, &Who::from("Bob")), path).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "line one\nline two; with semicolon");
    }

    #[test]
    fn test_empty_selection_has_header() {
        let corpus = Corpus::default();
        let csv = to_csv(&select(&corpus, &Who::Overall)).unwrap();
        assert_eq!(csv, "Timestamp;Sender;Kind;Text\n");
    }
}
