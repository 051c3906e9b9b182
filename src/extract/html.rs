use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::markup::remove_utm_source;
use super::{CompanyCarry, Keywords, CONTINUATION};
use crate::model::JobRow;

static TBODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static TR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static TD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

// The date column is required here, unlike the markdown layout.
const MIN_CELLS: usize = 5;

/// Parse every `<tr>` of every `<tbody>`: company, role, location, link, date.
pub fn parse(text: &str, keywords: &Keywords) -> Vec<JobRow> {
    let document = Html::parse_document(text);
    let mut carry = CompanyCarry::default();
    let mut rows = Vec::new();

    for tbody in document.select(&TBODY_SEL) {
        for tr in tbody.select(&TR_SEL) {
            let cells: Vec<ElementRef> = tr.select(&TD_SEL).collect();
            if cells.len() < MIN_CELLS {
                debug!(cells = cells.len(), "skipping short html row");
                continue;
            }

            let company = carry.resolve(&strict_text(cells[0]), |c| c.contains(CONTINUATION));
            let role = strict_text(cells[1]);
            let location = joined_text(cells[2], ", ");
            let link = cells[3]
                .select(&ANCHOR_SEL)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(remove_utm_source)
                .unwrap_or_default();
            let date_posted = strict_text(cells[4]);

            if keywords.matches(&role) {
                rows.push(JobRow {
                    company,
                    role,
                    date_posted,
                    location,
                    link,
                });
            }
        }
    }

    rows
}

/// Every text node trimmed, blanks dropped, concatenated.
fn strict_text(el: ElementRef) -> String {
    joined_text(el, "")
}

fn joined_text(el: ElementRef, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
