use tracing::debug;

use super::markup::{extract_href, remove_utm_source, strip_html_tags};
use super::{CompanyCarry, Keywords};
use crate::model::JobRow;

const MIN_CELLS: usize = 4;

/// Parse a markdown pipe table: company | role | location | link | [date].
pub fn parse(text: &str, keywords: &Keywords) -> Vec<JobRow> {
    let mut carry = CompanyCarry::default();
    let mut rows = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| is_data_row(l)) {
        let cells = split_cells(line);
        if cells.len() < MIN_CELLS {
            debug!(cells = cells.len(), "skipping short markdown row");
            continue;
        }

        let company = carry.resolve(&strip_html_tags(cells[0]), |c| c == super::CONTINUATION);
        let role = strip_html_tags(cells[1]);
        let location = strip_html_tags(cells[2]);
        let link = remove_utm_source(&extract_href(cells[3]));
        let date_posted = cells.get(4).map(|d| d.to_string()).unwrap_or_default();

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

    rows
}

fn is_data_row(line: &str) -> bool {
    line.starts_with('|') && !line.starts_with("|-") && !line.contains("---")
}

/// Split on `|`, dropping the fields outside the first and last delimiter.
fn split_cells(line: &str) -> Vec<&str> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 2 {
        return Vec::new();
    }
    fields[1..fields.len() - 1].iter().map(|c| c.trim()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw() -> Keywords {
        Keywords::default()
    }

    #[test]
    fn separator_rows_skipped() {
        assert!(!is_data_row("|---|---|"));
        assert!(!is_data_row("| :--- | :---: |"));
        assert!(!is_data_row("Company | Role"));
        assert!(is_data_row("| Acme | SWE |"));
    }

    #[test]
    fn cells_trimmed_and_outer_fields_dropped() {
        assert_eq!(split_cells("| a | b |c|"), vec!["a", "b", "c"]);
        assert_eq!(split_cells("| a | b"), vec!["a"]);
    }

    #[test]
    fn carry_forward_company() {
        let md = "\
| Company | Role | Location | Application | Age |
|---------|------|----------|-------------|-----|
| <strong>Acme</strong> | Software Engineer Intern | NYC | <a href=\"https://acme.dev/1\">Apply</a> | 2d |
| ↳ | Backend Developer | SF | <a href=\"https://acme.dev/2\">Apply</a> | 3d |
|  | Firmware Intern | Austin | <a href=\"https://acme.dev/3\">Apply</a> | 4d |
";
        let rows = parse(md, &kw());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.company == "Acme"));
        assert_eq!(rows[2].link, "https://acme.dev/3");
    }

    #[test]
    fn date_optional_and_short_rows_skipped() {
        let md = "\
| Acme | SWE Intern | Remote | <a href=\"https://acme.dev/1\">Apply</a> |
| Acme | SWE Intern | Remote |
";
        let rows = parse(md, &kw());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date_posted, "");
    }

    #[test]
    fn non_software_roles_filtered() {
        let md = "\
| Acme | Marketing Intern | NYC | <a href=\"https://acme.dev/m\">Apply</a> | Sep 24 |
| Acme | Data Engineer Intern | NYC | <a href=\"https://acme.dev/d\">Apply</a> | Sep 24 |
";
        let rows = parse(md, &kw());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].role, "Data Engineer Intern");
    }

    #[test]
    fn location_br_and_link_cleanup() {
        let md = "| Acme | Frontend Intern | NYC<br>Remote | <a href=\"https://acme.dev/f?utm_source=list&id=9\">Apply</a> | 1mo |\n";
        let rows = parse(md, &kw());
        assert_eq!(rows[0].location, "NYC, Remote");
        assert_eq!(rows[0].link, "https://acme.dev/f?id=9");
        assert_eq!(rows[0].date_posted, "1mo");
    }

    #[test]
    fn fixture_listing() {
        let md = std::fs::read_to_string("tests/fixtures/listings.md").unwrap();
        let rows = parse(&md, &kw());
        let companies: Vec<&str> = rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(
            companies,
            vec!["Stripe", "Stripe", "🔥 Datadog", "🔒 Lockheed", "Maple Soft", "Globex", "Globex"]
        );
        assert!(rows.iter().all(|r| !r.role.to_lowercase().contains("marketing")));
    }
}
