//! Parses a single resume from disk and prints the outcome as JSON.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_parser::extraction::PdfTextExtractor;
use resume_parser::resume::service::parse_resume_file;
use resume_parser::resume::upload::is_supported_filename;
use resume_parser::skills::load_matcher;

#[derive(Parser, Debug)]
#[command(name = "parse-resume", version, about = "Extract skills from a PDF resume")]
struct Cli {
    /// Path to the resume PDF
    path: PathBuf,

    /// JSON skill vocabulary to use instead of the builtin one
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !is_supported_filename(&cli.path.to_string_lossy()) {
        bail!("Only PDF files are supported: {}", cli.path.display());
    }
    if !cli.path.is_file() {
        bail!("No such file: {}", cli.path.display());
    }

    let matcher = load_matcher(cli.vocabulary.as_deref())?;
    let outcome = parse_resume_file(&cli.path, &PdfTextExtractor, &matcher).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
