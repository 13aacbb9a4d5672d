//! Release name parser CLI
//!
//! Parses release names given as arguments, or one per stdin line, and
//! prints one JSON object per name.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use senbetsu_core::{HeuristicParser, KeywordConfig, Keywords, ParsedRelease};
use serde::Serialize;
use tracing::{Level, debug, info, warn};

/// CLI arguments
#[derive(Parser)]
#[command(name = "senbetsu-parse")]
#[command(about = "Parse anime release names into JSON")]
#[command(version)]
struct Cli {
    /// Release names to parse. Read from stdin when omitted.
    names: Vec<String>,

    /// JSON keyword table replacing the built-in one
    #[arg(short, long, env = "SENBETSU_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Raise the log level (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct ParseOutput {
    input: String,
    release: Option<ParsedRelease>,
    error: Option<String>,
}

impl ParseOutput {
    fn new(input: &str, result: senbetsu_core::Result<ParsedRelease>) -> Self {
        match result {
            Ok(release) => Self {
                input: input.to_string(),
                release: Some(release),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                release: None,
                error: Some(e.to_string()),
            },
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn load_keywords(path: &Path) -> Result<Keywords> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword table {}", path.display()))?;
    let config = KeywordConfig::from_json(&json)
        .with_context(|| format!("Invalid keyword table {}", path.display()))?;
    info!(path = %path.display(), "loaded keyword table");
    Ok(Keywords::new(&config))
}

fn emit(out: &mut impl Write, output: &ParseOutput, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, output)?;
    } else {
        serde_json::to_writer(&mut *out, output)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let keywords = match cli.keywords.as_deref() {
        Some(path) => load_keywords(path)?,
        None => Keywords::default(),
    };
    let parser =
        HeuristicParser::with_keywords(keywords).context("Failed to create heuristic parser")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut parsed = 0usize;
    let mut failed = 0usize;

    let mut handle = |name: &str| -> Result<()> {
        let output = ParseOutput::new(name, parser.parse(name));
        if let Some(ref error) = output.error {
            warn!(name, error = error.as_str(), "could not parse");
            failed += 1;
        } else {
            parsed += 1;
        }
        emit(&mut out, &output, cli.pretty)
    };

    if cli.names.is_empty() {
        debug!("reading names from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            handle(line)?;
        }
    } else {
        for name in &cli.names {
            handle(name)?;
        }
    }

    info!(parsed, failed, "done");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    run(cli)
}
