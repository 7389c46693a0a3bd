//! Date/time grammars of exported transcripts.
//!
//! Exports vary by locale and platform. A stamp like `03/04/24, 9:15 PM`
//! is ambiguous on its own, so the grammar is decided once for the whole
//! transcript by a [`GrammarDetector`] and then applied to every line.
//!
//! Supported shapes:
//! - day-first or month-first dates with `/`, `.` or `-` separators
//! - 2- or 4-digit years
//! - 12-hour (`AM`/`PM`, `am`, `a.m.`) or 24-hour clocks, seconds optional

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field order of the date part of a stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `15/01/2024` - day, month, year
    DayFirst,
    /// `1/15/24` - month, day, year
    MonthFirst,
}

/// Clock convention of the time part of a stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clock {
    /// `10:30 PM`
    #[serde(rename = "12h")]
    TwelveHour,
    /// `22:30`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// A complete date/time grammar: date order plus clock convention.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::{Clock, DateGrammar, DateOrder, Stamp};
///
/// let grammar = DateGrammar::new(DateOrder::MonthFirst, Clock::TwelveHour);
/// let ts = grammar.parse(&Stamp::new("1/15/24", "10:30:45 PM")).unwrap();
/// assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 22:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateGrammar {
    pub order: DateOrder,
    pub clock: Clock,
}

impl DateGrammar {
    /// Creates a grammar from its two components.
    pub const fn new(order: DateOrder, clock: Clock) -> Self {
        Self { order, clock }
    }

    /// Returns chrono format strings for this grammar.
    ///
    /// Two-digit years come first: `%Y` would happily read `24` as year 24.
    fn chrono_formats(self) -> &'static [&'static str] {
        match (self.order, self.clock) {
            (DateOrder::DayFirst, Clock::TwentyFourHour) => &[
                "%d/%m/%y %H:%M:%S",
                "%d/%m/%y %H:%M",
                "%d/%m/%Y %H:%M:%S",
                "%d/%m/%Y %H:%M",
            ],
            (DateOrder::DayFirst, Clock::TwelveHour) => &[
                "%d/%m/%y %I:%M:%S %p",
                "%d/%m/%y %I:%M %p",
                "%d/%m/%Y %I:%M:%S %p",
                "%d/%m/%Y %I:%M %p",
            ],
            (DateOrder::MonthFirst, Clock::TwentyFourHour) => &[
                "%m/%d/%y %H:%M:%S",
                "%m/%d/%y %H:%M",
                "%m/%d/%Y %H:%M:%S",
                "%m/%d/%Y %H:%M",
            ],
            (DateOrder::MonthFirst, Clock::TwelveHour) => &[
                "%m/%d/%y %I:%M:%S %p",
                "%m/%d/%y %I:%M %p",
                "%m/%d/%Y %I:%M:%S %p",
                "%m/%d/%Y %I:%M %p",
            ],
        }
    }

    /// Parses a stamp under this grammar.
    ///
    /// Returns `None` when the stamp doesn't fit: out-of-range fields, or a
    /// clock marker that disagrees with the grammar's clock.
    pub fn parse(&self, stamp: &Stamp<'_>) -> Option<DateTime<Utc>> {
        let date = stamp.date.replace(['.', '-'], "/");
        let (clock_digits, meridiem) = stamp.split_time();

        let datetime_str = match (self.clock, meridiem) {
            (Clock::TwelveHour, Some(m)) => format!("{date} {clock_digits} {m}"),
            (Clock::TwentyFourHour, None) => format!("{date} {clock_digits}"),
            _ => return None,
        };

        self.chrono_formats().iter().find_map(|fmt| {
            NaiveDateTime::parse_from_str(&datetime_str, fmt)
                .ok()
                .map(|naive| naive.and_utc())
        })
    }
}

impl std::fmt::Display for DateGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let order = match self.order {
            DateOrder::DayFirst => "day-first",
            DateOrder::MonthFirst => "month-first",
        };
        let clock = match self.clock {
            Clock::TwelveHour => "12h",
            Clock::TwentyFourHour => "24h",
        };
        write!(f, "{order}, {clock}")
    }
}

/// Raw date and time tokens cut from the front of a header-shaped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp<'a> {
    pub date: &'a str,
    pub time: &'a str,
}

impl<'a> Stamp<'a> {
    pub fn new(date: &'a str, time: &'a str) -> Self {
        Self { date, time }
    }

    /// First two numeric fields of the date, in written order.
    pub fn leading_fields(&self) -> Option<(u32, u32)> {
        let mut parts = self.date.split(['/', '.', '-']);
        let first = parts.next()?.parse().ok()?;
        let second = parts.next()?.parse().ok()?;
        Some((first, second))
    }

    /// The date order this stamp proves on its own, if any.
    ///
    /// Only a field above 12 is proof: `23/04/24` is day-first, `04/23/24`
    /// month-first, `03/04/24` could be either.
    pub fn order_hint(&self) -> Option<DateOrder> {
        match self.leading_fields()? {
            (first, _) if first > 12 => Some(DateOrder::DayFirst),
            (_, second) if second > 12 => Some(DateOrder::MonthFirst),
            _ => None,
        }
    }

    /// Returns `true` if the time carries an AM/PM marker.
    pub fn has_meridiem(&self) -> bool {
        self.split_time().1.is_some()
    }

    /// Returns `true` if the date uses dots (`15.01.24`), a day-first habit.
    pub fn is_dotted(&self) -> bool {
        self.date.contains('.')
    }

    /// Splits `10:30:45 p.m.` into `("10:30:45", Some("PM"))`.
    fn split_time(&self) -> (&'a str, Option<&'static str>) {
        let end = self
            .time
            .find(|c: char| !(c.is_ascii_digit() || c == ':'))
            .unwrap_or(self.time.len());
        let (digits, rest) = self.time.split_at(end);

        let meridiem = rest
            .chars()
            .find(|c| c.is_ascii_alphabetic())
            .and_then(|c| match c.to_ascii_lowercase() {
                'a' => Some("AM"),
                'p' => Some("PM"),
                _ => None,
            });

        (digits, meridiem)
    }
}

/// Strategy that decides the grammar of a transcript from sampled stamps.
///
/// Implement this to support a locale the default heuristics get wrong.
pub trait GrammarDetector: Send + Sync {
    /// Returns the grammar for the transcript, or `None` if undecidable.
    fn detect(&self, stamps: &[Stamp<'_>]) -> Option<DateGrammar>;
}

/// Always answers with the same grammar; used for explicit overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedGrammar(pub DateGrammar);

impl GrammarDetector for FixedGrammar {
    fn detect(&self, _stamps: &[Stamp<'_>]) -> Option<DateGrammar> {
        Some(self.0)
    }
}

/// Default detector working from the numeric evidence in the sample.
///
/// - any AM/PM marker → 12-hour clock, otherwise 24-hour
/// - a first field above 12 → day-first; a second field above 12 → month-first
/// - no such evidence: dotted dates and 24-hour clocks lean day-first,
///   12-hour clocks lean month-first
///
/// Evidence pointing both ways, or a grammar that parses none of the
/// sampled stamps, yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDetector;

impl GrammarDetector for SampleDetector {
    fn detect(&self, stamps: &[Stamp<'_>]) -> Option<DateGrammar> {
        if stamps.is_empty() {
            return None;
        }

        let clock = if stamps.iter().any(Stamp::has_meridiem) {
            Clock::TwelveHour
        } else {
            Clock::TwentyFourHour
        };

        let mut first_over_12 = false;
        let mut second_over_12 = false;
        for (first, second) in stamps.iter().filter_map(Stamp::leading_fields) {
            first_over_12 |= first > 12;
            second_over_12 |= second > 12;
        }

        let order = match (first_over_12, second_over_12) {
            (true, true) => return None,
            (true, false) => DateOrder::DayFirst,
            (false, true) => DateOrder::MonthFirst,
            (false, false) => {
                if stamps.iter().any(Stamp::is_dotted) || clock == Clock::TwentyFourHour {
                    DateOrder::DayFirst
                } else {
                    DateOrder::MonthFirst
                }
            }
        };

        let grammar = DateGrammar::new(order, clock);
        stamps
            .iter()
            .any(|stamp| grammar.parse(stamp).is_some())
            .then_some(grammar)
    }
}
