//! Cell-level helpers: inline tag stripping, anchor hrefs, link cleanup.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::form_urlencoded;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

const TRACKING_PARAM: &str = "utm_source";

/// `<br>` becomes ", ", every other tag is dropped.
pub fn strip_html_tags(cell: &str) -> String {
    if cell.is_empty() {
        return String::new();
    }
    let with_commas = BR_RE.replace_all(cell, ", ");
    TAG_RE.replace_all(&with_commas, "").trim().to_string()
}

/// `href` of the first anchor in the cell, or "" when there is none.
pub fn extract_href(cell: &str) -> String {
    if cell.is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(cell);
    fragment
        .select(&ANCHOR_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string()
}

/// Drop `utm_source` (any case) from the query, keeping the other pairs in order.
/// Only the query text changes; everything before `?` and from `#` on is kept as written.
/// Relative and scheme-less links are handled the same way.
pub fn remove_utm_source(link: &str) -> String {
    let (before_fragment, fragment) = match link.find('#') {
        Some(i) => link.split_at(i),
        None => (link, ""),
    };
    let Some((prefix, query)) = before_fragment.split_once('?') else {
        return link.to_string();
    };

    let pairs: Vec<&str> = query.split('&').collect();
    if !pairs.iter().any(|p| is_tracking_pair(p)) {
        return link.to_string();
    }

    let kept: Vec<&str> = pairs
        .into_iter()
        .filter(|p| !p.is_empty() && !is_tracking_pair(p))
        .collect();
    let mut cleaned = prefix.to_string();
    if !kept.is_empty() {
        cleaned.push('?');
        cleaned.push_str(&kept.join("&"));
    }
    cleaned.push_str(fragment);
    cleaned
}

/// Compares the percent-decoded key, so `utm%5Fsource` counts too.
fn is_tracking_pair(pair: &str) -> bool {
    form_urlencoded::parse(pair.as_bytes())
        .next()
        .is_some_and(|(key, _)| key.eq_ignore_ascii_case(TRACKING_PARAM))
}
