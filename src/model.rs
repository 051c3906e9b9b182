use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Column order of every CSV the extractor writes.
pub const JOB_COLUMNS: [&str; 5] = ["Company", "Role", "Date Posted", "Location", "Link"];

/// One normalized job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Date Posted")]
    pub date_posted: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Link")]
    pub link: String,
}

/// Write rows with the fixed header. The header is written even for zero rows.
pub fn write_job_csv(rows: &[JobRow], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(JOB_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
