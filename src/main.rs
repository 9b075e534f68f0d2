use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use shortlist::chart;
use shortlist::config::Config;
use shortlist::document::Document;
use shortlist::output::terminal;
use shortlist::pipeline;

/// Shortlist: rank resumes against a job description.
///
/// Scores each resume by TF-IDF cosine similarity to the description and
/// reports a ranked list with per-candidate feedback and insights.
#[derive(Parser)]
#[command(name = "shortlist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a set of resumes against a job description
    Rank {
        /// Resume files (.pdf, .docx, .txt)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Read the job description from a file
        #[arg(long, value_name = "FILE")]
        description: Option<PathBuf>,

        /// Give the job description inline
        #[arg(long, conflicts_with = "description")]
        text: Option<String>,

        /// Write a CSV projection of the report (filename, score, category)
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Write an SVG score chart
        #[arg(long, value_name = "FILE")]
        chart: Option<PathBuf>,

        /// Print the chart as a base64 data URI (for inline embedding)
        #[arg(long)]
        chart_uri: bool,

        /// Print the full report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Hide candidates below this score in the table (0.0 to 1.0)
        #[arg(long, default_value = "0.0")]
        min_score: f64,
    },

    /// Show the detailed breakdown for a single resume
    Inspect {
        /// Resume file (.pdf, .docx, .txt)
        resume: PathBuf,

        /// Read the job description from a file
        #[arg(long, value_name = "FILE")]
        description: Option<PathBuf>,

        /// Give the job description inline
        #[arg(long, conflicts_with = "description")]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shortlist=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            resumes,
            description,
            text,
            csv,
            chart: chart_path,
            chart_uri,
            json,
            min_score,
        } => {
            let config = Config::load()?;
            let description = load_description(description, text)?;
            let (documents, load_warnings) = load_documents(&resumes, config.max_file_bytes());

            if !json {
                terminal::display_warnings(&load_warnings);
            }

            let report = pipeline::run(&description, &documents)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let mut shown = report.clone();
                shown.results.retain(|r| r.score_rounded() >= min_score);
                terminal::display_report(&shown);
            }

            if let Some(path) = csv {
                fs::write(&path, report.to_csv())
                    .with_context(|| format!("cannot write {}", path.display()))?;
                println!("CSV written to {}", path.display());
            }
            if chart_path.is_some() || chart_uri {
                let svg = chart::render_svg(&report, config.chart_width, config.chart_height);
                if let Some(path) = chart_path {
                    fs::write(&path, &svg)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    println!("Chart written to {}", path.display());
                }
                if chart_uri {
                    println!("{}", chart::data_uri(&svg));
                }
            }
        }

        Commands::Inspect {
            resume,
            description,
            text,
        } => {
            let config = Config::load()?;
            let description = load_description(description, text)?;
            let (documents, load_warnings) =
                load_documents(std::slice::from_ref(&resume), config.max_file_bytes());
            terminal::display_warnings(&load_warnings);

            let report = pipeline::run(&description, &documents)?;
            terminal::display_detail(&report.results[0]);
        }
    }

    Ok(())
}

/// Resolve the job description from --description FILE or --text.
fn load_description(path: Option<PathBuf>, text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = path {
        return fs::read_to_string(&path)
            .with_context(|| format!("cannot read description from {}", path.display()));
    }
    anyhow::bail!("provide a job description with --description FILE or --text \"...\"");
}

/// Read resume files into per-run documents, skipping unreadable or
/// oversized files with a warning.
fn load_documents(paths: &[PathBuf], max_bytes: u64) -> (Vec<Document>, Vec<String>) {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Reading [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let mut documents = Vec::new();
    let mut warnings = Vec::new();
    for path in paths {
        match Document::load(path, max_bytes) {
            Ok(doc) => documents.push(doc),
            Err(e) => warnings.push(format!("{e:#} — skipped")),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    (documents, warnings)
}
