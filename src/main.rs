//! # chatlens CLI
//!
//! Command-line interface for the chatlens library. Results go to stdout
//! (or `-o`), logs go to stderr.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatlens::ChatlensError;
use chatlens::analysis::Analyzer;
use chatlens::cli::Args;
use chatlens::core::apply_filters;
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins over the `-v` count.
fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();

    let transcript_config = args.transcript_config();
    let analysis_config = args.analysis_config()?;
    let filter = args.filter_config()?;

    info!(input = %args.input.display(), "parsing transcript");
    let parse_start = Instant::now();
    let corpus = TranscriptParser::with_config(transcript_config).parse(&args.input)?;
    info!(
        messages = corpus.len(),
        elapsed = ?parse_start.elapsed(),
        "parsed"
    );

    if args.list_users {
        let mut stdout = io::stdout().lock();
        for sender in corpus.senders() {
            writeln!(stdout, "{sender}")?;
        }
        return Ok(());
    }

    let analyzer = Analyzer::with_config(analysis_config)?;
    let report = analyzer.analyze(&corpus, &filter);
    let selection = apply_filters(&corpus, &filter);
    let format: OutputFormat = args.format.into();

    match &args.output {
        Some(path) => {
            let path = path.to_string_lossy();
            write_to_format(&report, &selection, &path, format)?;
            info!(output = %path, %format, "written");
        }
        None => {
            let text = to_format_string(&report, &selection, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    info!(elapsed = ?total_start.elapsed(), "done");
    Ok(())
}
