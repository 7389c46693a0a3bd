//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`Format`], [`Order`], [`ClockArg`] - value enums mapped onto library types
//!
//! The library types ([`OutputFormat`](crate::format::OutputFormat),
//! [`DateGrammar`]) stay free of clap; the conversions live here.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{
    AnalysisConfig, DEFAULT_MEDIA_PLACEHOLDER, DEFAULT_TOP_N, SentimentThresholds, Stopwords,
    TranscriptConfig,
};
use crate::core::{FilterConfig, Who};
use crate::error::{ChatlensError, Result};
use crate::parsing::{Clock, DateGrammar, DateOrder};

/// Analyze an exported WhatsApp chat: activity over time, busiest
/// participants, common words, emoji and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice -o alice.json
    chatlens chat.txt --format jsonl --top 50 --stopwords stop_hinglish.txt
    chatlens chat.txt --format csv --after 2024-01-01 -o messages.csv
    chatlens chat.txt --date-order day-first --clock 12h
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Participant to analyze ("Overall" for everyone)
    #[arg(short, long, default_value = "Overall", value_name = "NAME")]
    pub user: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: Format,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Length of the most-common-words table
    #[arg(long, default_value_t = DEFAULT_TOP_N, value_name = "N")]
    pub top: usize,

    /// Stopword file, one word per line (default: built-in English list)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Body that marks an omitted attachment
    #[arg(long, default_value = DEFAULT_MEDIA_PLACEHOLDER, value_name = "TEXT")]
    pub media: String,

    /// Date order of the stamps (default: detect)
    #[arg(long, value_enum, requires = "clock")]
    pub date_order: Option<Order>,

    /// Clock convention of the stamps (default: detect)
    #[arg(long, value_enum, requires = "date_order")]
    pub clock: Option<ClockArg>,

    /// Scores above this are positive
    #[arg(long, default_value_t = 0.05, allow_hyphen_values = true, value_name = "F")]
    pub positive: f64,

    /// Scores below this are negative
    #[arg(long, default_value_t = -0.05, allow_hyphen_values = true, value_name = "F")]
    pub negative: f64,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Print the participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parsing configuration from the flags.
    pub fn transcript_config(&self) -> TranscriptConfig {
        let config = TranscriptConfig::new().with_media_placeholder(self.media.clone());
        match (self.date_order, self.clock) {
            (Some(order), Some(clock)) => {
                config.with_grammar(DateGrammar::new(order.into(), clock.into()))
            }
            _ => config,
        }
    }

    /// Analysis configuration from the flags; reads the stopword file.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let stopwords = match &self.stopwords {
            Some(path) => Stopwords::from_file(path)?,
            None => Stopwords::english(),
        };
        let config = AnalysisConfig::new()
            .with_top_n(self.top)
            .with_stopwords(stopwords)
            .with_sentiment(SentimentThresholds::new(self.positive, self.negative));
        config.validate()?;
        Ok(config)
    }

    /// Selection filter from `--user`, `--after` and `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new().with_who(Who::from(self.user.as_str()));
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let (Some(after), Some(before)) = (filter.after, filter.before) {
            if after > before {
                return Err(ChatlensError::invalid_config(
                    "--after must not be later than --before",
                ));
            }
        }
        Ok(filter)
    }

    /// Default log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Pretty JSON report
    #[default]
    Json,
    /// One JSON line per analytic
    #[value(alias = "ndjson")]
    Jsonl,
    /// Selected messages as semicolon-delimited CSV
    Csv,
}

impl From<Format> for crate::format::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => crate::format::OutputFormat::Json,
            Format::Jsonl => crate::format::OutputFormat::Jsonl,
            Format::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

/// Date order flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// 15/01/2024
    DayFirst,
    /// 1/15/2024
    MonthFirst,
}

impl From<Order> for DateOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::DayFirst => DateOrder::DayFirst,
            Order::MonthFirst => DateOrder::MonthFirst,
        }
    }
}

/// Clock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClockArg {
    /// 10:30 PM
    #[value(name = "12h")]
    TwelveHour,
    /// 22:30
    #[value(name = "24h")]
    TwentyFourHour,
}

impl From<ClockArg> for Clock {
    fn from(clock: ClockArg) -> Self {
        match clock {
            ClockArg::TwelveHour => Clock::TwelveHour,
            ClockArg::TwentyFourHour => Clock::TwentyFourHour,
        }
    }
}
