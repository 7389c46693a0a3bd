//! Integration tests: parse a transcript end to end and analyze it.

use chatlens::analysis::{Analyzer, LexiconScorer, Stats, fetch_stats, most_busy_users};
use chatlens::config::{AnalysisConfig, Stopwords, TranscriptConfig};
use chatlens::core::{FilterConfig, Who, apply_filters, select};
use chatlens::parser::{TranscriptParser, parse};
use chatlens::parsing::{Clock, DateGrammar, DateOrder};
use chatlens::prelude::*;
use std::fs;

/// A small day-first, 24h group chat spanning a year boundary.
const GROUP_CHAT: &str = "\
12/12/2023, 21:15 - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/12/2023, 21:16 - Alice created group \"Trip\"
20/12/2023, 09:00 - Alice: Good morning everyone!
20/12/2023, 09:05 - Bob: Morning! I love this plan 😀
03/01/2024, 18:30 - Alice: <Media omitted>
03/01/2024, 18:31 - Alice: Check 😀 this out https://x.co
04/01/2024, 23:59 - Bob: This is terrible
and really bad
15/02/2024, 12:00 - Carol: Thanks 👍🏽👍🏽
";

/// The same kind of chat as exported by an iPhone set to US English.
const US_CHAT: &str = "\
[1/15/24, 10:30:45 AM] Alice: Hello everyone!
[1/15/24, 10:31:02 AM] Bob: Hi Alice
[1/15/24, 10:32:00 PM] Alice: <Media omitted>
[2/3/24, 9:05:00 AM] Charlie: Check https://example.com and www.example.org
[2/3/24, 9:06:00 AM] Charlie left
";

fn group_corpus() -> Corpus {
    parse(GROUP_CHAT).unwrap()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_group_chat() {
    let corpus = group_corpus();

    assert_eq!(corpus.len(), 8);
    assert_eq!(corpus.senders(), vec!["Alice", "Bob", "Carol"]);

    let kinds: Vec<MessageKind> = corpus.messages().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MessageKind::System,
            MessageKind::System,
            MessageKind::Text,
            MessageKind::Text,
            MessageKind::Media,
            MessageKind::Text,
            MessageKind::Text,
            MessageKind::Text,
        ]
    );
    assert_eq!(corpus.entries()[0].message.sender, chatlens::SYSTEM_SENDER);
}

#[test]
fn test_continuation_lines_join_the_previous_message() {
    let corpus = group_corpus();
    let bob_last = corpus
        .messages()
        .filter(|m| m.sender == "Bob")
        .last()
        .unwrap();
    assert_eq!(bob_last.text, "This is terrible\nand really bad");
}

#[test]
fn test_header_with_two_continuations_is_one_message() {
    let corpus = parse("15/01/2024, 10:30 - Alice: first\nsecond\nthird").unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.entries()[0].message.text, "first\nsecond\nthird");
}

#[test]
fn test_parse_us_chat() {
    let corpus = parse(US_CHAT).unwrap();

    assert_eq!(corpus.len(), 5);
    let third = &corpus.entries()[2];
    assert!(third.message.is_media());
    assert_eq!(third.calendar.hour, 22);
    assert_eq!(third.calendar.day, 15);
    assert_eq!(corpus.entries()[3].calendar.month_name, "February");
    assert!(corpus.entries()[4].message.is_system());
}

#[test]
fn test_parse_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, GROUP_CHAT).unwrap();

    let from_file = TranscriptParser::new().parse(&path).unwrap();
    assert_eq!(from_file, group_corpus());
}

#[test]
fn test_parse_missing_file_is_io_error() {
    let err = TranscriptParser::new()
        .parse("/definitely/not/here.txt".as_ref())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(GROUP_CHAT).unwrap(), parse(GROUP_CHAT).unwrap());
}

#[test]
fn test_explicit_grammar_matches_detection() {
    let grammar = DateGrammar::new(DateOrder::DayFirst, Clock::TwentyFourHour);
    let parser = TranscriptParser::with_config(TranscriptConfig::new().with_grammar(grammar));
    assert_eq!(parser.parse_str(GROUP_CHAT).unwrap(), group_corpus());
}

// =========================================================================
// Analysis
// =========================================================================

#[test]
fn test_overall_stats() {
    let corpus = group_corpus();
    let stats = fetch_stats(&select(&corpus, &Who::Overall));

    assert_eq!(stats.num_messages, 6);
    assert_eq!(stats.num_media_messages, 1);
    assert_eq!(stats.num_links, 1);
    assert_eq!(stats.num_words, 22);
}

#[test]
fn test_monthly_timeline_is_chronological_across_years() {
    let report = Analyzer::new().analyze(&group_corpus(), &FilterConfig::new());

    let labels: Vec<&str> = report
        .monthly_timeline
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(labels, vec!["December-2023", "January-2024", "February-2024"]);

    let counts: Vec<usize> = report.monthly_timeline.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![2, 3, 1]);
}

#[test]
fn test_weekday_and_hour_maps() {
    let report = Analyzer::new().analyze(&group_corpus(), &FilterConfig::new());

    assert_eq!(report.week_activity_map.len(), 7);
    assert_eq!(report.week_activity_map[0].label, "Monday");
    assert_eq!(report.week_activity_map[2].count, 4); // Wednesday
    assert_eq!(report.week_activity_map[3].count, 2); // Thursday

    assert_eq!(report.month_activity_map.len(), 12);
    assert_eq!(report.month_activity_map[0].count, 3);
    assert_eq!(report.month_activity_map[11].count, 2);

    assert_eq!(report.most_active_hour[9], 2);
    assert_eq!(report.most_active_hour[18], 2);
    assert_eq!(report.most_active_hour[21], 0);

    let heatmap = report.activity_heatmap.unwrap();
    assert_eq!(heatmap.get(2, 9), 2);
    assert_eq!(heatmap.total(), 6);
    assert_eq!(heatmap.columns.last().unwrap(), "23-24");
}

#[test]
fn test_busy_users_shares_sum_to_100() {
    let ranking = most_busy_users(&group_corpus());

    let names: Vec<&str> = ranking.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(ranking[0].percent, 50.0);
    assert_eq!(ranking[1].percent, 33.33);
    assert_eq!(ranking[2].percent, 16.67);

    let sum: f64 = ranking.iter().map(|u| u.percent).sum();
    assert!((sum - 100.0).abs() < 0.05);
}

#[test]
fn test_busy_users_ignore_the_filter() {
    let corpus = group_corpus();
    let overall = Analyzer::new().analyze(&corpus, &FilterConfig::new());
    let alice = Analyzer::new().analyze(&corpus, &FilterConfig::new().with_who("Alice"));
    assert_eq!(overall.most_busy_users, alice.most_busy_users);
}

#[test]
fn test_sender_filter() {
    let report = Analyzer::new().analyze(&group_corpus(), &FilterConfig::new().with_who("Alice"));

    assert_eq!(report.who, Who::Sender("Alice".into()));
    assert_eq!(report.stats.num_messages, 3);
    assert_eq!(report.stats.num_media_messages, 1);
    assert_eq!(report.stats.num_links, 1);
    assert_eq!(report.emoji.unwrap()[0].label, "😀");
}

#[test]
fn test_unknown_sender_yields_empty_results() {
    let report = Analyzer::new().analyze(&group_corpus(), &FilterConfig::new().with_who("Zoe"));

    assert_eq!(report.stats, Stats::default());
    assert!(report.monthly_timeline.is_empty());
    assert!(report.daily_timeline.is_empty());
    assert!(report.week_activity_map.iter().all(|d| d.count == 0));
    assert_eq!(report.most_active_hour, [0; 24]);
    assert!(report.activity_heatmap.is_none());
    assert!(report.emoji.is_none());
    assert!(report.most_common_words.is_empty());
    assert_eq!(report.sentiment.total(), 0);
    assert_eq!(report.most_busy_users.len(), 3);
}

#[test]
fn test_date_filter() {
    let corpus = group_corpus();
    let filter = FilterConfig::new()
        .with_who("Alice")
        .with_date_from("2024-01-01")
        .unwrap();

    assert_eq!(apply_filters(&corpus, &filter).len(), 2);
    let report = Analyzer::new().analyze(&corpus, &filter);
    assert_eq!(report.stats.num_messages, 2);
    assert_eq!(report.monthly_timeline.len(), 1);
}

#[test]
fn test_emoji_clusters_with_skin_tone() {
    let report = Analyzer::new().analyze(&group_corpus(), &FilterConfig::new());
    let emoji = report.emoji.unwrap();

    assert_eq!(emoji.len(), 2);
    assert_eq!((emoji[0].label.as_str(), emoji[0].count), ("😀", 2));
    assert_eq!((emoji[1].label.as_str(), emoji[1].count), ("👍🏽", 2));
}

#[test]
fn test_link_emoji_message() {
    let corpus = parse("15/01/2024, 10:30 - Alice: Check 😀 this out https://x.co").unwrap();
    let report = Analyzer::new().analyze(&corpus, &FilterConfig::new());

    assert_eq!(report.stats.num_messages, 1);
    assert_eq!(report.stats.num_links, 1);
    assert_eq!(report.emoji.unwrap()[0].label, "😀");
    assert!(
        report
            .word_frequencies
            .iter()
            .all(|w| !w.label.contains("x.co"))
    );
}

#[test]
fn test_common_words_respect_stopwords_and_top_n() {
    let corpus = group_corpus();

    let report = Analyzer::new().analyze(&corpus, &FilterConfig::new());
    assert_eq!(report.most_common_words[0].label, "morning");
    assert_eq!(report.most_common_words[0].count, 2);
    assert!(report.word_frequencies.iter().all(|w| w.label != "this"));

    let config = AnalysisConfig::new()
        .with_top_n(1)
        .with_stopwords(Stopwords::none());
    let report = Analyzer::with_config(config)
        .unwrap()
        .analyze(&corpus, &FilterConfig::new());
    assert_eq!(report.most_common_words.len(), 1);
    assert_eq!(report.most_common_words[0].label, "this");
    assert_eq!(report.most_common_words[0].count, 3);
}

#[test]
fn test_sentiment_counts_authored_text_only() {
    let report = Analyzer::new().analyze(&group_corpus(), &FilterConfig::new());
    let sentiment = report.sentiment;

    assert_eq!(sentiment.total(), 5);
    assert!(sentiment.positive >= 2);
    assert!(sentiment.negative >= 1);
}

#[test]
fn test_custom_lexicon() {
    let corpus = parse("15/01/2024, 10:30 - Alice: mast scene hai").unwrap();

    let plain = Analyzer::new().analyze(&corpus, &FilterConfig::new());
    assert_eq!(plain.sentiment.neutral, 1);

    let hinglish = Analyzer::new()
        .with_scorer(LexiconScorer::new().with_word("mast", 2.5))
        .analyze(&corpus, &FilterConfig::new());
    assert_eq!(hinglish.sentiment.positive, 1);
}

#[test]
fn test_analysis_is_deterministic() {
    let corpus = group_corpus();
    let analyzer = Analyzer::new();
    let filter = FilterConfig::new();
    assert_eq!(
        analyzer.analyze(&corpus, &filter),
        analyzer.analyze(&corpus, &filter)
    );
}
