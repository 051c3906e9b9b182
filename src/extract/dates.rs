//! "Date Posted" normalization to YYYY-MM-DD.
//!
//! Accepted shapes:
//!   - `3mo` → today minus 3 calendar months
//!   - `5d`  → today minus 5 days
//!   - `Sep 24` → Sep 24 of the current year
//!
//! Anything else (or any parse failure) is returned unchanged.

use std::sync::LazyLock;

use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;

static LEADING_NUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());

const OUTPUT_FMT: &str = "%Y-%m-%d";

pub fn normalize_date(raw: &str, today: NaiveDate) -> String {
    let lowered = raw.trim().to_lowercase();
    parse_posted(&lowered, today)
        .map(|d| d.format(OUTPUT_FMT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_posted(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if s.contains("mo") {
        let n = leading_number(s)?;
        return today.checked_sub_months(Months::new(n));
    }
    // A bare "contains d" test would send "dec 05" here, fail on the leading
    // number and leave it raw. Requiring a leading digit lets it fall through
    // to the month-day parse below.
    if s.contains('d') && s.starts_with(|c: char| c.is_ascii_digit()) {
        let n = leading_number(s)?;
        return today.checked_sub_days(Days::new(u64::from(n)));
    }
    NaiveDate::parse_from_str(&format!("{} {}", s, today.year()), "%b %d %Y").ok()
}

fn leading_number(s: &str) -> Option<u32> {
    LEADING_NUM_RE.captures(s)?.get(1)?.as_str().parse().ok()
}
