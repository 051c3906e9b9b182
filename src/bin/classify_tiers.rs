use anyhow::{Context, Result};
use job_tables::classify;
use job_tables::settings::Settings;
use tracing::info;

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
    let settings = Settings::load().context("Failed to load settings")?;
    info!(settings = ?settings, "Starting tier classifier");

    let sheets = classify::classify_file(&settings.classify_input, &settings.classify_output)?;
    if sheets.is_empty() {
        println!("No rows in {}; nothing written.", settings.classify_input.display());
        return Ok(());
    }

    println!("Classified all rows by tier.");
    for sheet in &sheets {
        println!("  '{}' sheet: {} rows", sheet.name, sheet.rows.len());
    }
    println!("Saved {}", settings.classify_output.display());
    Ok(())
}
