use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use job_tables::merge::{self, DEFAULT_KEY};

/// Merge two CSV files and remove duplicates based on a key column.
#[derive(Parser)]
#[command(name = "merge_csv")]
struct Cli {
    /// First input CSV
    file1: PathBuf,
    /// Second input CSV
    file2: PathBuf,
    /// Output CSV path
    #[arg(short, long, default_value = "merged_unique_jobs.csv")]
    output: PathBuf,
    /// Column used for deduplication
    #[arg(short, long, default_value = DEFAULT_KEY)]
    key: String,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    println!("Starting merge process. Unique key: '{}'", cli.key);
    let inputs = [cli.file1, cli.file2];
    let summary = merge::merge_unique_rows(&inputs, &cli.key, &cli.output)?;

    if !summary.written {
        println!("No unique rows found to write.");
        return Ok(());
    }

    println!("{}", "-".repeat(30));
    println!("Total rows processed: {}", summary.rows_processed);
    println!("Unique rows found:    {}", summary.unique_rows);
    println!("Merged unique rows into '{}'", cli.output.display());
    Ok(())
}
