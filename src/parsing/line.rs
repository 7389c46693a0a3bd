//! Two-state line classifier: every physical line is a header or a continuation.
//!
//! Header shapes:
//! - `[1/15/24, 10:30:45 AM] Alice: Hello`
//! - `15/01/2024, 10:30 - Alice: Hello`
//! - `26.10.2025, 20:40 - Alice created group "Trip"` (no sender: system)
//!
//! Anything else, including a header-shaped line whose stamp doesn't parse
//! under the transcript's grammar, is a continuation of the previous message.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::grammar::{DateGrammar, Stamp};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\[?(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}),?\s+",
        r"(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?\s?[Mm]\.?)?)",
        r"\]?(?:\s[-–]\s|\s)(.*)$",
    ))
    .expect("header pattern is valid")
});

/// Marks some exporters put in front of lines.
const LEADING_MARKS: [char; 2] = ['\u{feff}', '\u{200e}'];

/// A classified physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Start of a new logical message.
    Header(Header<'a>),
    /// Text belonging to the message before it.
    Continuation(&'a str),
}

/// The parts of a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub timestamp: DateTime<Utc>,
    /// `None` for system notifications.
    pub sender: Option<&'a str>,
    pub body: &'a str,
}

/// Returns `true` for a line with nothing but whitespace and direction marks.
pub fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || LEADING_MARKS.contains(&c))
}

/// Cuts the date/time stamp off a header-shaped line.
///
/// Returns the stamp and the remainder after the separator. This only checks
/// the shape; whether the stamp is a real date is up to a [`DateGrammar`].
pub fn split_stamp(line: &str) -> Option<(Stamp<'_>, &str)> {
    let line = line.trim_start_matches(LEADING_MARKS);
    let caps = HEADER_RE.captures(line)?;
    let date = caps.get(1)?.as_str();
    let time = caps.get(2)?.as_str();
    let rest = caps.get(3).map_or("", |m| m.as_str());
    Some((Stamp::new(date, time), rest))
}

/// Classifies one physical line under the transcript's grammar.
///
/// Leading BOM and direction marks are dropped from continuation text too.
pub fn classify<'a>(line: &'a str, grammar: &DateGrammar) -> Line<'a> {
    let line = line.trim_start_matches(LEADING_MARKS);
    let Some((stamp, rest)) = split_stamp(line) else {
        return Line::Continuation(line);
    };
    let Some(timestamp) = grammar.parse(&stamp) else {
        return Line::Continuation(line);
    };

    let (sender, body) = split_sender(rest);
    Line::Header(Header {
        timestamp,
        sender,
        body,
    })
}

/// Splits `Alice: Hello` at the first `": "`.
///
/// A remainder with no such separator, or with an empty name before it, is a
/// system notification.
fn split_sender(rest: &str) -> (Option<&str>, &str) {
    match rest.split_once(": ") {
        Some((name, body)) if !name.trim().is_empty() => (Some(name.trim()), body),
        _ => (None, rest),
    }
}
