use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use shape_match::{Classifier, ClassifierConfig, MatchReport};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shape-match")]
#[command(about = "Classify JSON values and show how they would be dispatched", long_about = None)]
struct Cli {
    /// JSON value to inspect; newline-delimited values are read from stdin when omitted
    value: Option<String>,

    /// View records through this discriminant field
    #[arg(short = 'k', long)]
    discriminant: Option<String>,

    /// Classifier config file (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn inspect(classifier: &Classifier, discriminant: Option<&str>, input: &str) -> anyhow::Result<MatchReport> {
    let value: Value = serde_json::from_str(input).context("input is not valid JSON")?;
    let matcher = classifier.classify_json(value)?;

    let report = match discriminant.and_then(|key| matcher.discriminate(key)) {
        Some(view) => shape_match::Matcher::from(view).report(),
        None => matcher.report(),
    };
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(io::stderr)
            .init();
    }

    let classifier = match &cli.config {
        Some(path) => ClassifierConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?
            .build()?,
        None => Classifier::new(),
    };
    let discriminant = cli.discriminant.as_deref();

    if let Some(input) = &cli.value {
        let report = inspect(&classifier, discriminant, input)?;
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    // Process values from stdin
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match inspect(&classifier, discriminant, &line) {
            Ok(report) => println!("{}", serde_json::to_string(&report)?),
            Err(e) => tracing::warn!("skipping line: {:#}", e),
        }
    }

    Ok(())
}
