//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of parsing, filtering and analysis
//! that the unit tests don't reach on their own.

use chatlens::analysis::{Analyzer, EmojiMatcher, Stats, emoji_helper, most_busy_users};
use chatlens::core::{Corpus, FilterConfig, Who, apply_filters, select};
use chatlens::parser::parse;
use chatlens::{ChatlensError, Message, MessageKind};
use chrono::{Datelike, TimeZone, Timelike, Utc};

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_am_pm_variants() {
    let raw = "\
1/15/24, 9:05 a.m. - Alice: early
1/15/24, 9:05 p.m. - Alice: late
1/15/24, 12:00 am - Bob: midnight
1/15/24, 12:00\u{202f}PM - Bob: noon";
    let corpus = parse(raw).unwrap();
    let hours: Vec<u32> = corpus.messages().map(|m| m.timestamp.hour()).collect();
    assert_eq!(hours, vec![9, 21, 0, 12]);
}

#[test]
fn test_two_and_four_digit_years() {
    let corpus = parse("15/01/24, 10:30 - Alice: a\n16/01/2024, 10:30 - Bob: b").unwrap();
    let years: Vec<i32> = corpus.messages().map(|m| m.timestamp.year()).collect();
    assert_eq!(years, vec![2024, 2024]);
}

#[test]
fn test_ambiguous_24h_dates_lean_day_first() {
    let corpus = parse("03/04/2024, 10:30 - Alice: hi").unwrap();
    let ts = corpus.entries()[0].message.timestamp;
    assert_eq!((ts.day(), ts.month()), (3, 4));
}

#[test]
fn test_ambiguous_12h_dates_lean_month_first() {
    let corpus = parse("[03/04/24, 10:30:00 AM] Alice: hi").unwrap();
    let ts = corpus.entries()[0].message.timestamp;
    assert_eq!((ts.month(), ts.day()), (3, 4));
}

#[test]
fn test_contradicting_dates_fail_detection() {
    let raw = "15/01/2024, 10:30 - Alice: a\n01/15/2024, 10:31 - Bob: b";
    let err = parse(raw).unwrap_err();
    assert!(matches!(err, ChatlensError::FormatDetection { .. }));
}

#[test]
fn test_impossible_date_becomes_continuation() {
    let raw = "15/01/2024, 10:30 - Alice: see you\n31/02/2024, 10:31 - Bob: never";
    let corpus = parse(raw).unwrap();
    assert_eq!(corpus.len(), 1);
    assert!(corpus.entries()[0].message.text.ends_with("Bob: never"));
}

#[test]
fn test_colon_in_body_splits_once() {
    let corpus = parse("15/01/2024, 10:30 - Alice: note: bring snacks: lots").unwrap();
    let msg = &corpus.entries()[0].message;
    assert_eq!(msg.sender, "Alice");
    assert_eq!(msg.text, "note: bring snacks: lots");
}

#[test]
fn test_unicode_and_phone_number_senders() {
    let raw = "\
15/01/2024, 10:30 - Иван: Привет мир!
15/01/2024, 10:31 - +91 98765 43210: hello
15/01/2024, 10:32 - 🔥Fire🔥: 🔥";
    let corpus = parse(raw).unwrap();
    assert_eq!(corpus.senders(), vec!["+91 98765 43210", "Иван", "🔥Fire🔥"]);
}

#[test]
fn test_blank_lines_inside_message_are_kept() {
    let corpus = parse("15/01/2024, 10:30 - Alice: Hello\n\nWorld").unwrap();
    assert_eq!(corpus.entries()[0].message.text, "Hello\n\nWorld");

    let raw = "\n\n15/01/2024, 10:30 - Alice: one\n\u{200e}\ntwo\n\n";
    let corpus = parse(raw).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.entries()[0].message.text, "one\n\ntwo");
}

#[test]
fn test_day_first_twelve_hour_beyond_sample() {
    // Indian Android layout: nothing in the first twenty stamps shows the order.
    let mut raw = String::new();
    for i in 0..24 {
        raw.push_str(&format!("03/04/24, {}:15 pm - Asha: msg {i}\n", i % 11 + 1));
    }
    for day in 13..=20 {
        raw.push_str(&format!("{day}/04/24, 9:15 pm - Ravi: later\n"));
    }

    let corpus = parse(&raw).unwrap();
    assert_eq!(corpus.len(), 32);
    assert!(corpus.entries().iter().all(|e| e.calendar.month == 4));
    assert_eq!(corpus.entries()[0].calendar.day, 3);
    assert_eq!(corpus.entries()[31].message.text, "later");
}

#[test]
fn test_media_placeholder_must_be_whole_body() {
    let raw = "15/01/2024, 10:30 - Alice: <Media omitted>  \n15/01/2024, 10:31 - Bob: see <Media omitted> above";
    let corpus = parse(raw).unwrap();
    assert_eq!(corpus.entries()[0].message.kind, MessageKind::Media);
    assert_eq!(corpus.entries()[1].message.kind, MessageKind::Text);
}

// =========================================================================
// Degenerate corpora
// =========================================================================

#[test]
fn test_empty_corpus_analysis() {
    let corpus = Corpus::default();
    let report = Analyzer::new().analyze(&corpus, &FilterConfig::new());

    assert_eq!(report.stats, Stats::default());
    assert!(report.monthly_timeline.is_empty());
    assert!(report.activity_heatmap.is_none());
    assert!(report.emoji.is_none());
    assert!(report.most_busy_users.is_empty());
    assert_eq!(report.sentiment.total(), 0);
    assert_eq!(report.month_activity_map.len(), 12);
}

#[test]
fn test_system_only_corpus() {
    let corpus = parse(
        "15/01/2024, 10:30 - Alice created group \"x\"\n15/01/2024, 10:31 - Bob joined using this group's invite link",
    )
    .unwrap();
    assert_eq!(corpus.len(), 2);
    assert!(corpus.senders().is_empty());

    let report = Analyzer::new().analyze(&corpus, &FilterConfig::new());
    assert_eq!(report.stats.num_messages, 0);
    assert!(report.activity_heatmap.is_none());
    assert!(report.most_busy_users.is_empty());
}

#[test]
fn test_media_only_sender() {
    let corpus = parse("15/01/2024, 10:30 - Alice: <Media omitted>").unwrap();
    let report = Analyzer::new().analyze(&corpus, &FilterConfig::new());

    assert_eq!(report.stats.num_messages, 1);
    assert_eq!(report.stats.num_media_messages, 1);
    assert_eq!(report.stats.num_words, 0);
    assert!(report.word_frequencies.is_empty());
    assert_eq!(report.sentiment.total(), 0);
    assert!(report.activity_heatmap.is_some());
}

#[test]
fn test_single_sender_has_full_share() {
    let corpus = parse("15/01/2024, 10:30 - Alice: a\n15/01/2024, 10:31 - Alice: b").unwrap();
    let ranking = most_busy_users(&corpus);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].percent, 100.0);
}

#[test]
fn test_emoji_absent() {
    let corpus = parse("15/01/2024, 10:30 - Alice: plain words only").unwrap();
    assert!(emoji_helper(&select(&corpus, &Who::Overall), &EmojiMatcher::new()).is_none());
}

#[test]
fn test_emoji_sequences_are_single_clusters() {
    let corpus = parse("15/01/2024, 10:30 - Alice: 👨‍👩‍👧‍👦🇮🇳1️⃣❤️").unwrap();
    let table = emoji_helper(&select(&corpus, &Who::Overall), &EmojiMatcher::new()).unwrap();
    let labels: Vec<&str> = table.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["👨‍👩‍👧‍👦", "🇮🇳", "1️⃣", "❤️"]);
}

// =========================================================================
// Filtering
// =========================================================================

fn three_days() -> Corpus {
    let msg = |day, hour, sender: &str| {
        Message::new(
            Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap(),
            sender,
            "hi",
        )
    };
    Corpus::new(vec![
        msg(14, 23, "Alice"),
        msg(15, 0, "Bob"),
        msg(15, 23, "Alice"),
        msg(16, 0, "Bob"),
    ])
}

#[test]
fn test_date_bounds_are_inclusive_whole_days() {
    let corpus = three_days();
    let filter = FilterConfig::new()
        .with_date_from("2024-01-15")
        .unwrap()
        .with_date_to("2024-01-15")
        .unwrap();
    let selected: Vec<&str> = apply_filters(&corpus, &filter)
        .iter()
        .map(|e| e.message.sender.as_str())
        .collect();
    assert_eq!(selected, vec!["Bob", "Alice"]);
}

#[test]
fn test_bad_filter_dates() {
    for input in ["15-01-2024", "2024-13-01", "yesterday", ""] {
        let err = FilterConfig::new().with_date_from(input).unwrap_err();
        assert!(err.is_invalid_date(), "{input} should be rejected");
    }
}

#[test]
fn test_overall_name_is_reserved() {
    let corpus = three_days();
    let filter = FilterConfig::new().with_who("Overall");
    assert!(filter.who.is_overall());
    assert_eq!(apply_filters(&corpus, &filter).len(), 4);
}

#[test]
fn test_sender_match_is_exact() {
    let corpus = three_days();
    assert_eq!(select(&corpus, &Who::from("alice")).len(), 0);
    assert_eq!(select(&corpus, &Who::from("Alice ")).len(), 0);
    assert_eq!(select(&corpus, &Who::from("Alice")).len(), 2);
}
