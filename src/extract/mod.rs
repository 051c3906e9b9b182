pub mod dates;
pub mod html;
pub mod markdown;
pub mod markup;
pub mod postprocess;

use std::fmt;

use chrono::NaiveDate;
use tracing::info;

use crate::model::JobRow;

/// "Same company as the row above."
pub const CONTINUATION: &str = "↳";

/// Substring that marks a listing as an HTML table.
const HTML_MARKER: &str = "<thead>";

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "software engineer",
    "software dev",
    "developer",
    "swe",
    "sde",
    "r&d software",
    "application engineer",
    "firmware",
    "embedded",
    "systems engineer",
    "backend",
    "frontend",
    "full stack",
    "full-stack",
    "data engineer",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Markdown,
    Html,
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Markdown => write!(f, "Markdown pipe table"),
            TableFormat::Html => write!(f, "HTML table"),
        }
    }
}

pub fn detect_format(text: &str) -> TableFormat {
    if text.to_lowercase().contains(HTML_MARKER) {
        TableFormat::Html
    } else {
        TableFormat::Markdown
    }
}

/// Lower-cased role keywords, matched as plain substrings.
#[derive(Debug, Clone)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Parse a comma-separated override list; blank entries are ignored.
    pub fn from_csv_list(list: &str) -> Self {
        Keywords(
            list.split(',')
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    /// `--keywords` value: absent or blank keeps the defaults.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(list) if !list.trim().is_empty() => Keywords::from_csv_list(list),
            _ => Keywords::default(),
        }
    }

    pub fn matches(&self, role: &str) -> bool {
        let role = role.to_lowercase();
        self.0.iter().any(|k| role.contains(k.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

/// Last real company name seen in one parse call.
#[derive(Debug, Default)]
pub(crate) struct CompanyCarry {
    last: String,
}

impl CompanyCarry {
    pub(crate) fn resolve(&mut self, cell: &str, is_continuation: impl Fn(&str) -> bool) -> String {
        if cell.is_empty() || is_continuation(cell) {
            self.last.clone()
        } else {
            self.last = cell.to_string();
            cell.to_string()
        }
    }
}

/// Full extractor pass: detect, parse, filter roles, post-process.
pub fn extract_jobs(text: &str, keywords: &Keywords, today: NaiveDate) -> (TableFormat, Vec<JobRow>) {
    let format = detect_format(text);
    info!(%format, "format detected");

    let parsed = match format {
        TableFormat::Html => html::parse(text, keywords),
        TableFormat::Markdown => markdown::parse(text, keywords),
    };
    let parsed_count = parsed.len();
    let rows = postprocess::postprocess_rows(parsed, today);
    info!(parsed = parsed_count, kept = rows.len(), "extraction finished");

    (format, rows)
}
