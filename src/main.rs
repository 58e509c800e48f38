mod error;
mod feed;
mod filter;
mod model;
mod parser;
mod pipeline;
mod render;
mod settings;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use error::{ErrorKind, TrialError};
use feed::{Endpoints, HttpSource};
use filter::FilterCriteria;
use pipeline::{SearchQuery, TrialPipeline};
use render::{Disposition, Format, Rendered};
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "trial-lookup",
    about = "Clinical trial lookup over the ClinicalTrials.gov feed"
)]
struct Cli {
    /// Base URL of the trial registry (overrides TRIALS_FEED_BASE)
    #[arg(long, global = true)]
    feed_base: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search trials by molecule and/or pathology
    Search {
        /// Drug or molecule name
        #[arg(short, long)]
        molecule: Option<String>,
        /// Pathology / condition
        #[arg(short, long)]
        pathology: Option<String>,
        /// Output format: json, text, csv or pdf
        #[arg(short, long, default_value = "json")]
        format: Format,
        /// Keep trials whose status contains this text
        #[arg(short, long)]
        status: Option<String>,
        /// Keep trials with exactly this phase (e.g. "3")
        #[arg(long)]
        phase: Option<String>,
        /// Keep trials whose location contains this text
        #[arg(short, long)]
        location: Option<String>,
        /// Directory for csv/pdf exports (overrides TRIALS_OUT_DIR)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Show the full record of one trial
    Detail {
        /// Trial identifier, e.g. NCT04368728
        id: String,
    },
    /// Compare how many trials two molecules have
    Compare {
        molecule_a: String,
        molecule_b: String,
        /// Pathology / condition shared by both searches
        #[arg(short, long, default_value = "")]
        pathology: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let result = run(cli).await;
    debug!("Done in {:.1}s", t0.elapsed().as_secs_f64());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // Bad input exits 2, like clap's own usage errors.
            match e.downcast_ref::<TrialError>().map(TrialError::kind) {
                Some(ErrorKind::Validation) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load()?;

    let feed_base = cli.feed_base.as_deref().unwrap_or(&settings.feed_base);
    let endpoints = Endpoints::new(feed_base)?;
    let source = HttpSource::new(settings.timeout())?;
    let pipeline = TrialPipeline::new(source, endpoints);

    match cli.command {
        Commands::Search {
            molecule,
            pathology,
            format,
            status,
            phase,
            location,
            out_dir,
        } => {
            let query = SearchQuery::new(molecule.as_deref(), pathology.as_deref())?;
            let criteria =
                FilterCriteria::new(status.as_deref(), phase.as_deref(), location.as_deref());
            let rendered = pipeline
                .search(&query, &criteria, format)
                .await
                .context("Search failed")?;
            let out_dir = out_dir.unwrap_or_else(|| settings.out_dir.clone());
            emit(&rendered, &out_dir)?;
        }
        Commands::Detail { id } => {
            let detail = pipeline
                .detail(&id)
                .await
                .with_context(|| format!("Failed to load trial {}", id))?;
            let body = render::structured::render_detail(&detail)?;
            write_stdout(&body)?;
        }
        Commands::Compare {
            molecule_a,
            molecule_b,
            pathology,
        } => {
            let comparison = pipeline
                .compare(&molecule_a, &molecule_b, &pathology)
                .await
                .context("Comparison failed")?;
            let body = serde_json::to_vec_pretty(&comparison)?;
            write_stdout(&body)?;
        }
    }

    Ok(())
}

/// Inline output goes to stdout; attachments are written under `out_dir`.
fn emit(rendered: &Rendered, out_dir: &Path) -> anyhow::Result<()> {
    match &rendered.disposition {
        Disposition::Inline => write_stdout(&rendered.body),
        Disposition::Attachment { filename } => {
            std::fs::create_dir_all(out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;
            let path = out_dir.join(filename);
            std::fs::write(&path, &rendered.body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Wrote {} ({}, {} bytes)",
                path.display(),
                rendered.content_type,
                rendered.body.len()
            );
            Ok(())
        }
    }
}

fn write_stdout(body: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body)?;
    if !body.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
