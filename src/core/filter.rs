//! Narrow a corpus to one participant and an optional date window.
//!
//! This module provides [`Who`] for naming the selected participant,
//! [`Selection`] for the borrowed result, and [`FilterConfig`] for combining
//! a participant with a date range.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Sender | [`with_who`](FilterConfig::with_who) | `Overall` or one exact sender name |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//!
//! # Examples
//!
//! ## Select a Sender
//!
//! ```
//! use chatlens::core::filter::{Who, select};
//! use chatlens::{Corpus, Message};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
//! let corpus = Corpus::new(vec![
//!     Message::new(ts, "Alice", "Hello"),
//!     Message::new(ts, "Bob", "Hi there"),
//!     Message::new(ts, "Alice", "How are you?"),
//! ]);
//!
//! let selection = select(&corpus, &Who::from("Alice"));
//! assert_eq!(selection.len(), 2);
//!
//! // Exact match only
//! assert!(select(&corpus, &Who::from("alice")).is_empty());
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::{Corpus, Message};
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> chatlens::Result<()> {
//! let corpus = Corpus::new(vec![
//!     Message::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "Alice", "Old"),
//!     Message::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(), "Alice", "New"),
//! ]);
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let selection = apply_filters(&corpus, &config);
//! assert_eq!(selection.len(), 1);
//! assert_eq!(selection.iter().next().unwrap().message.text, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact and case-sensitive
//! - System notifications stay in a selection; each analytic decides whether
//!   to count them
//! - Multiple filters are combined with AND logic

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::corpus::{Corpus, Entry};
use crate::error::{ChatlensError, Result};
use crate::message::MessageKind;

/// Label that selects every participant.
pub const OVERALL: &str = "Overall";

/// The participant an analysis is run for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Who {
    /// Every message in the corpus.
    #[default]
    Overall,
    /// Messages whose sender equals this name exactly.
    Sender(String),
}

impl Who {
    /// Returns `true` if `entry` belongs to this selection.
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Who::Overall => true,
            Who::Sender(name) => entry.message.sender == *name,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Who::Overall)
    }
}

impl From<&str> for Who {
    fn from(s: &str) -> Self {
        if s == OVERALL {
            Who::Overall
        } else {
            Who::Sender(s.to_string())
        }
    }
}

impl From<String> for Who {
    fn from(s: String) -> Self {
        if s == OVERALL {
            Who::Overall
        } else {
            Who::Sender(s)
        }
    }
}

impl From<Who> for String {
    fn from(who: Who) -> Self {
        who.to_string()
    }
}

impl FromStr for Who {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Who::from(s))
    }
}

impl fmt::Display for Who {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Who::Overall => f.write_str(OVERALL),
            Who::Sender(name) => f.write_str(name),
        }
    }
}

/// Borrowed view of the corpus entries an analysis runs over.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    entries: Vec<&'a Entry>,
}

impl<'a> Selection<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that count as activity: everything but system notifications.
    pub fn activity(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.iter().filter(|e| !e.message.is_system())
    }

    /// Entries with authored text (no media placeholders, no notifications).
    pub fn authored(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.iter().filter(|e| e.message.kind == MessageKind::Text)
    }
}

impl<'a> FromIterator<&'a Entry> for Selection<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Configuration for narrowing a corpus by participant and date.
///
/// Filters are combined with AND logic: an entry must match all active
/// filters to be included.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// // One participant, all time
/// let by_sender = FilterConfig::new().with_who("Alice");
///
/// // Everyone, one year
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Selected participant (default: `Overall`).
    pub who: Who,

    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,
}

impl FilterConfig {
    /// Creates a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selected participant; `"Overall"` selects everyone.
    #[must_use]
    pub fn with_who(mut self, who: impl Into<Who>) -> Self {
        self.who = who.into();
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN).and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive through the end of that day).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        let end = date
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(end.and_utc());
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `entry` passes every active filter.
    pub fn matches(&self, entry: &Entry) -> bool {
        let ts = entry.message.timestamp;
        self.who.matches(entry)
            && self.after.is_none_or(|after| ts >= after)
            && self.before.is_none_or(|before| ts <= before)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Selects the messages of one participant (or all of them for `Overall`).
pub fn select<'a>(corpus: &'a Corpus, who: &Who) -> Selection<'a> {
    corpus.entries().iter().filter(|e| who.matches(e)).collect()
}

/// Selects the entries that pass every filter in `config`.
pub fn apply_filters<'a>(corpus: &'a Corpus, config: &FilterConfig) -> Selection<'a> {
    corpus.entries().iter().filter(|e| config.matches(e)).collect()
}
