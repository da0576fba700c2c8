use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use ahomatch::{Automaton, AutomatonBuilder, BuildConfig};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Report every occurrence of a set of patterns in a text.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one pattern per line
    #[arg(short = 'p', long)]
    patterns: PathBuf,

    /// Text to scan. Read from stdin if absent
    #[arg(short = 't', long)]
    text: Option<String>,

    /// Write the automaton as a GraphViz graph to this file
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Print matches as JSON lines
    #[arg(long)]
    json: bool,

    /// Reject blank lines in the pattern file instead of skipping them
    #[arg(long)]
    keep_blank: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("AHOMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("ahomatch: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = AutomatonBuilder::with_config(BuildConfig {
        skip_blank_lines: !args.keep_blank,
    });
    builder
        .load_file(&args.patterns)
        .context("could not load patterns")?;
    let automaton = builder.compile();

    if let Some(path) = &args.dot {
        fs::write(path, automaton.dot_string())
            .with_context(|| format!("could not write {}", path.display()))?;
    }

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("could not read text from stdin")?;
            text
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    if args.json {
        print_json(&automaton, &text, &mut out)?;
    } else {
        print_aligned(&automaton, &text, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_json(automaton: &Automaton, text: &str, out: &mut impl Write) -> anyhow::Result<()> {
    for m in automaton.find_all(text) {
        serde_json::to_writer(&mut *out, &m)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the text followed by one line per match, each pattern shifted to
/// sit under its occurrence.
fn print_aligned(automaton: &Automaton, text: &str, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{text}")?;
    for m in automaton.find_all(text) {
        let indent = text[..m.offset].chars().count();
        writeln!(out, "{:indent$}{}", "", m.pattern)?;
    }
    Ok(())
}
