use chrono::NaiveDate;
use tracing::debug;

use super::dates::normalize_date;
use crate::model::JobRow;

/// Markers that disqualify a posting: sponsorship, citizenship, closed, degree.
pub const EXCLUDE_EMOJIS: &[&str] = &["🛂", "🇺🇸", "🔒", "🎓"];
/// Everything stripped from the text of surviving rows.
pub const CLEANUP_EMOJIS: &[&str] = &["🛂", "🇺🇸", "🔒", "🔥", "🎓"];
/// Lower-cased location fragments outside the US.
pub const EXCLUDED_REGIONS: &[&str] = &["canada", " uk", "germany"];

/// Drop unusable rows and normalize the rest, keeping input order.
pub fn postprocess_rows(rows: Vec<JobRow>, today: NaiveDate) -> Vec<JobRow> {
    rows.into_iter()
        .filter_map(|row| postprocess_row(row, today))
        .collect()
}

fn postprocess_row(mut row: JobRow, today: NaiveDate) -> Option<JobRow> {
    if row.link.is_empty() {
        debug!(company = %row.company, role = %row.role, "dropping row without link");
        return None;
    }

    let check = format!("{}{}", row.company, row.role);
    if EXCLUDE_EMOJIS.iter().any(|e| check.contains(e)) {
        debug!(company = %row.company, role = %row.role, "dropping excluded row");
        return None;
    }

    row.company = strip_emojis(&row.company);
    row.role = strip_emojis(&row.role);

    let location = row.location.to_lowercase();
    if EXCLUDED_REGIONS.iter().any(|r| location.contains(r)) {
        debug!(location = %row.location, "dropping non-US row");
        return None;
    }

    row.date_posted = normalize_date(&row.date_posted, today);
    Some(row)
}

fn strip_emojis(text: &str) -> String {
    CLEANUP_EMOJIS
        .iter()
        .fold(text.to_string(), |acc, e| acc.replace(e, "").trim().to_string())
}
