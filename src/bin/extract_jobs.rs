use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use job_tables::extract::{self, Keywords};
use job_tables::model::write_job_csv;
use tracing::info;

/// Extract software roles from a markdown or HTML listing table into a CSV.
#[derive(Parser)]
#[command(name = "extract_jobs")]
struct Cli {
    /// Input file path, or "-" for stdin
    input: String,
    /// Output CSV path
    #[arg(short, long, default_value = "software_jobs.csv")]
    output: PathBuf,
    /// Comma-separated role keywords (case-insensitive), replacing the defaults
    #[arg(long)]
    keywords: Option<String>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    let path = PathBuf::from(input);
    if !path.exists() {
        return Err(job_tables::Error::MissingFile { path }.into());
    }
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = read_input(&cli.input)?;
    let keywords = Keywords::from_arg(cli.keywords.as_deref());
    info!(keywords = ?keywords.as_slice(), "role keywords");

    let today = chrono::Local::now().date_naive();
    let (format, rows) = extract::extract_jobs(&text, &keywords, today);
    println!("{} format detected.", format);
    write_job_csv(&rows, &cli.output)
        .with_context(|| format!("Failed to write {:?}", cli.output))?;

    println!("Extracted {} rows -> {}", rows.len(), cli.output.display());
    Ok(())
}
