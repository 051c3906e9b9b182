pub mod tiers;

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::{Error, Result};
pub use tiers::{TIERS, UNCLASSIFIED};

const COMPANY_COLUMN: &str = "Company";
const TIER_COLUMN: &str = "Tier";
const SHEET_NAME_MAX: usize = 31;
const SHEET_NAME_INVALID: &[char] = &[':', '/', '\\', '?', '*', '[', ']'];

/// Canonical company names in declaration order, each with its tier.
pub struct TierIndex {
    entries: Vec<(&'static str, &'static str)>,
    exact: HashMap<&'static str, usize>,
}

impl TierIndex {
    pub fn new(tiers: &[(&'static str, &'static [&'static str])]) -> Self {
        let mut entries: Vec<(&'static str, &'static str)> = Vec::new();
        let mut exact = HashMap::new();
        for (tier, companies) in tiers {
            for &company in companies.iter() {
                let company: &'static str = company.trim();
                // A repeated name keeps its first position but takes the later tier.
                match exact.get(company) {
                    Some(&idx) => entries[idx] = (company, *tier),
                    None => {
                        exact.insert(company, entries.len());
                        entries.push((company, *tier));
                    }
                }
            }
        }
        TierIndex { entries, exact }
    }

    /// Exact match first, then the first canonical name contained in `company`.
    pub fn classify(&self, company: &str) -> &'static str {
        let company = company.trim();
        if company.is_empty() {
            return UNCLASSIFIED;
        }
        if let Some(&idx) = self.exact.get(company) {
            return self.entries[idx].1;
        }
        self.entries
            .iter()
            .find(|(name, _)| company.contains(name))
            .map(|(_, tier)| *tier)
            .unwrap_or(UNCLASSIFIED)
    }

    /// Sheet order: declared tiers, then Unclassified.
    pub fn ordered_tiers(&self) -> Vec<&'static str> {
        let mut order: Vec<&'static str> = Vec::new();
        for (_, tier) in &self.entries {
            if !order.contains(tier) {
                order.push(*tier);
            }
        }
        order.push(UNCLASSIFIED);
        order
    }
}

impl Default for TierIndex {
    fn default() -> Self {
        TierIndex::new(TIERS)
    }
}

/// A CSV held in memory, every row padded to the header width.
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().take(header.len()).map(str::to_string).collect();
        row.resize(header.len(), String::new());
        rows.push(row);
    }
    Ok(Table { header, rows })
}

#[derive(Debug, Clone)]
pub struct TierSheet {
    pub tier: &'static str,
    pub name: String,
    /// Original columns followed by the tier label.
    pub rows: Vec<Vec<String>>,
}

/// Group rows by tier; tiers without rows get no sheet.
pub fn partition(table: &Table, index: &TierIndex, path: &Path) -> Result<Vec<TierSheet>> {
    let company_idx = table
        .header
        .iter()
        .position(|h| h == COMPANY_COLUMN)
        .ok_or_else(|| Error::MissingColumn {
            column: COMPANY_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut grouped: HashMap<&'static str, Vec<Vec<String>>> = HashMap::new();
    for row in &table.rows {
        let tier = index.classify(&row[company_idx]);
        let mut tagged = row.clone();
        tagged.push(tier.to_string());
        grouped.entry(tier).or_default().push(tagged);
    }

    Ok(index
        .ordered_tiers()
        .into_iter()
        .filter_map(|tier| {
            let rows = grouped.remove(tier)?;
            Some(TierSheet {
                tier,
                name: sheet_name(tier),
                rows,
            })
        })
        .collect())
}

/// Replace characters Excel rejects and cap the length.
pub fn sheet_name(tier: &str) -> String {
    tier.chars()
        .map(|c| if SHEET_NAME_INVALID.contains(&c) { '-' } else { c })
        .take(SHEET_NAME_MAX)
        .collect()
}

pub fn write_workbook(header: &[String], sheets: &[TierSheet], output: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        let columns = header.iter().map(String::as_str).chain([TIER_COLUMN]);
        for (col, title) in columns.enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &bold)?;
        }
        for (r, row) in sheet.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(r as u32 + 1, col as u16, value)?;
                }
            }
        }
    }

    workbook.save(output)?;
    Ok(())
}

/// Read `input`, classify every row, write one sheet per non-empty tier.
/// Returns the sheets written; nothing is written when the input has no rows.
pub fn classify_file(input: &Path, output: &Path) -> Result<Vec<TierSheet>> {
    let table = read_table(input)?;
    let index = TierIndex::default();
    let sheets = partition(&table, &index, input)?;
    info!(rows = table.rows.len(), sheets = sheets.len(), "classified");

    if !sheets.is_empty() {
        write_workbook(&table.header, &sheets, output)?;
    }
    Ok(sheets)
}
