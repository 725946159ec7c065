//! htmlsum — print summary metadata for HTML documents.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use htmlsum_core::{Error, SummarizerOptions};
use htmlsum_ingest::Summarizer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "htmlsum", version, about = "Summarize HTML documents")]
struct Cli {
    /// Text used for any field that cannot be resolved
    #[arg(long, env = "HTMLSUM_NOT_AVAILABLE")]
    not_available: Option<String>,

    /// Extra meta field to resolve (repeatable)
    #[arg(short = 'f', long = "field", value_name = "NAME")]
    fields: Vec<String>,

    /// JSON options bundle with PATH, NOT_AVAILABLE and FIELDS keys
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit one JSON object keyed by path
    #[arg(long)]
    json: bool,

    /// Print raw file contents instead of a summary
    #[arg(long, conflicts_with = "json")]
    load: bool,

    /// Documents to summarize
    paths: Vec<PathBuf>,
}

fn base_options(cli: &Cli) -> anyhow::Result<SummarizerOptions> {
    let mut options = match &cli.config {
        Some(file) => {
            let raw = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read config {}", file.display()))?;
            SummarizerOptions::from_json(&raw)?
        }
        None => SummarizerOptions::default(),
    };
    if cli.not_available.is_some() {
        options.not_available = cli.not_available.clone();
    }
    options.fields.extend(cli.fields.iter().cloned());
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = base_options(&cli)?;

    let mut paths: Vec<PathBuf> = options.path.iter().cloned().collect();
    paths.extend(cli.paths.iter().cloned());
    if paths.is_empty() {
        return Err(Error::Config("PATH is required".to_string()).into());
    }
    debug!("Summarizing {} document(s)", paths.len());

    let mut failed = false;
    let mut json_out = serde_json::Map::new();

    for path in &paths {
        let mut summarizer = Summarizer::new(SummarizerOptions {
            path: Some(path.clone()),
            ..options.clone()
        })?;

        if cli.load {
            match summarizer.load_file(None) {
                Ok(text) => print!("{}", text),
                Err(e) => {
                    eprintln!("{}", e);
                    failed = true;
                }
            }
            continue;
        }

        match summarizer.summary() {
            Some(record) if cli.json => {
                json_out.insert(path.display().to_string(), serde_json::to_value(record)?);
            }
            Some(record) => {
                if paths.len() > 1 {
                    println!("==> {} <==", path.display());
                }
                print!("{}", record);
            }
            None => {
                eprintln!(
                    "{}: {}",
                    path.display(),
                    summarizer.error().unwrap_or("summary failed")
                );
                failed = true;
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&json_out)?);
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
