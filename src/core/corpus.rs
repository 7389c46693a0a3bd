//! The parsed, calendar-annotated message table.
//!
//! A [`Corpus`] is built once from parsed messages and never changes after
//! that. Each [`Entry`] pairs a [`Message`] with its [`Calendar`] fields so
//! every analytic reads the same precomputed year, month, weekday and hour
//! bucket.
//!
//! # Example
//!
//! ```rust
//! use chatlens::{Corpus, Message};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 23, 5, 0).unwrap();
//! let corpus = Corpus::new(vec![Message::new(ts, "Alice", "late night")]);
//!
//! let calendar = &corpus.entries()[0].calendar;
//! assert_eq!(calendar.month_name, "January");
//! assert_eq!(calendar.month_year, "January-2024");
//! assert_eq!(calendar.period, "23-24");
//! ```

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::Serialize;

use crate::Message;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar fields derived from a message timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    pub date: NaiveDate,
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub month_name: &'static str,
    pub day: u32,
    pub weekday: Weekday,
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    /// `"January-2024"`
    pub month_year: String,
    /// One-hour bucket label, `"23-24"` for the last hour of the day.
    pub period: String,
}

impl Calendar {
    /// Derives the calendar fields of a message.
    pub fn of(message: &Message) -> Self {
        let ts = message.timestamp;
        let month_name = MONTH_NAMES[ts.month0() as usize];
        let hour = ts.hour();
        Self {
            date: ts.date_naive(),
            year: ts.year(),
            month: ts.month(),
            month_name,
            day: ts.day(),
            weekday: ts.weekday(),
            hour,
            minute: ts.minute(),
            month_year: format!("{month_name}-{}", ts.year()),
            period: period_label(hour),
        }
    }

    /// English weekday name.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday.num_days_from_monday() as usize]
    }
}

/// `"h-(h+1)"` label of a one-hour bucket, `"0-1"` through `"23-24"`.
pub fn period_label(hour: u32) -> String {
    format!("{hour}-{}", hour + 1)
}

/// A message with its calendar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub message: Message,
    pub calendar: Calendar,
}

impl Entry {
    pub fn new(message: Message) -> Self {
        let calendar = Calendar::of(&message);
        Self { message, calendar }
    }
}

/// Parsed transcript in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<Entry>,
}

impl Corpus {
    /// Annotates messages with calendar fields; order is preserved.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            entries: messages.into_iter().map(Entry::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates over the bare messages.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().map(|e| &e.message)
    }

    /// Distinct human senders, sorted; the system sentinel is left out.
    pub fn senders(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.message.is_system())
            .map(|e| e.message.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<Message>> for Corpus {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}
