/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod crossref;
mod http;
mod openlibrary;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossref::CrossrefClient;
use openlibrary::OpenLibraryClient;
use refstyle_core::options::DocumentFormat;
use refstyle_core::{CitationStyle, Config, RawReference};
use refstyle_processor::extract::extract_fields;
use refstyle_processor::{
    render_reference, run_batch, FileDocumentWriter, FileSink, ReferenceEngine,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (YAML or JSON); defaults to ./refstyle.yaml if present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a file of references (one per line) in both styles
    Format {
        /// Path to the input file
        input: PathBuf,

        /// Directory for the output documents
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Do not query Crossref or Open Library
        #[arg(long)]
        offline: bool,
    },
    /// Show the fields extracted from a free-text reference
    Parse {
        reference: String,
    },
    /// Format a single reference
    Render {
        reference: String,

        #[arg(short, long, value_enum, default_value_t = StyleChoice::Both)]
        style: StyleChoice,

        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Do not query Crossref or Open Library
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
    Djot,
}

impl From<Format> for DocumentFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => DocumentFormat::Plain,
            Format::Html => DocumentFormat::Html,
            Format::Djot => DocumentFormat::Djot,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum StyleChoice {
    Standard,
    AuthorDate,
    Both,
}

impl StyleChoice {
    fn styles(self) -> &'static [CitationStyle] {
        match self {
            StyleChoice::Standard => &[CitationStyle::Standard],
            StyleChoice::AuthorDate => &[CitationStyle::AuthorDate],
            StyleChoice::Both => &CitationStyle::ALL,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Format {
            input,
            out_dir,
            format,
            offline,
        } => {
            if let Some(dir) = out_dir {
                config.output.directory = dir;
            }
            if let Some(format) = format {
                config.output.format = format.into();
            }

            let sink = FileSink::new(&config.diagnostics.log_file);
            let engine = build_engine(&config, offline)?.with_sink(Arc::new(sink));
            let mut writer = FileDocumentWriter::new(&config);
            let outcome = run_batch(&engine, &input, &mut writer)
                .with_context(|| format!("failed to process {}", input.display()))?;

            let written: Vec<String> = writer
                .written()
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            println!(
                "{} formatted, {} failed; wrote {}",
                outcome.processed,
                outcome.failed,
                written.join(", ")
            );
            if outcome.failed > 0 {
                println!(
                    "failures logged to {}",
                    config.diagnostics.log_file.display()
                );
            }
        }
        Commands::Parse { reference } => {
            let fields = extract_fields(&reference);
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        Commands::Render {
            reference,
            style,
            format,
            offline,
        } => {
            let engine = build_engine(&config, offline)?;
            let raw = RawReference::classify(&reference);
            let processed = match engine.try_process(&raw) {
                Ok(processed) => processed,
                Err((stage, err)) => bail!("{stage} failed for {raw}: {err}"),
            };
            for style in style.styles() {
                println!(
                    "{}",
                    render_reference(format.into(), processed.style(*style))
                );
            }
        }
    }

    Ok(())
}

/// Log to `path` without colours, or to stderr. `RUST_LOG` sets the level.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::load_from_project()?.unwrap_or_default()),
    }
}

fn build_engine(config: &Config, offline: bool) -> Result<ReferenceEngine> {
    let engine = ReferenceEngine::new(config);
    if offline {
        return Ok(engine);
    }
    Ok(engine
        .with_doi_lookup(CrossrefClient::new(&config.lookup)?)
        .with_isbn_lookup(OpenLibraryClient::new(&config.lookup)?))
}
