//! JSON Lines (JSONL) report writer.
//!
//! One line per analytic, so a consumer can pick the tables it needs
//! without loading the whole report:
//!
//! ```jsonl
//! {"operation":"fetch_stats","who":"Overall","result":{"num_messages":42,...}}
//! {"operation":"monthly_timeline","who":"Overall","result":[...]}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::analysis::Report;
use crate::error::Result;

#[derive(Serialize)]
struct JsonlLine<'a, T: Serialize> {
    operation: &'static str,
    who: &'a str,
    result: &'a T,
}

/// Writes a report to a JSONL file.
pub fn write_jsonl(report: &Report, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(report, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts a report to a JSONL string.
pub fn to_jsonl(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()).into()
    })
}

fn write_lines<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    let who = report.who.to_string();

    macro_rules! line {
        ($operation:literal, $value:expr) => {
            serde_json::to_writer(
                &mut *writer,
                &JsonlLine {
                    operation: $operation,
                    who: &who,
                    result: &$value,
                },
            )?;
            writer.write_all(b"\n")?;
        };
    }

    line!("fetch_stats", report.stats);
    line!("monthly_timeline", report.monthly_timeline);
    line!("daily_timeline", report.daily_timeline);
    line!("week_activity_map", report.week_activity_map);
    line!("month_activity_map", report.month_activity_map);
    line!("activity_heatmap", report.activity_heatmap);
    line!("most_active_hour", report.most_active_hour);
    line!("most_busy_users", report.most_busy_users);
    line!("most_common_words", report.most_common_words);
    line!("word_frequencies", report.word_frequencies);
    line!("emoji_helper", report.emoji);
    line!("sentiment_analysis", report.sentiment);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::core::FilterConfig;
    use crate::parser::parse;

    #[test]
    fn test_one_line_per_operation() {
        let corpus = parse("15/01/2024, 10:30 - Alice: Hello").unwrap();
        let report = Analyzer::new().analyze(&corpus, &FilterConfig::new().with_who("Alice"));
        let jsonl = to_jsonl(&report).unwrap();

        let lines: Vec<serde_json::Value> = jsonl
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0]["operation"], "fetch_stats");
        assert_eq!(lines[0]["who"], "Alice");
        assert_eq!(lines[0]["result"]["num_messages"], 1);
        assert_eq!(lines[10]["operation"], "emoji_helper");
        assert!(lines[10]["result"].is_null());
    }
}
