//! Merge CSV files, keeping the first row seen for each key value.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{Error, Result};

pub const DEFAULT_KEY: &str = "Link";

/// Rows that survived deduplication, in first-seen order.
#[derive(Debug, Default)]
pub struct MergedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub rows_processed: usize,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub rows_processed: usize,
    pub unique_rows: usize,
    /// False when there was nothing to write.
    pub written: bool,
}

/// Read and merge, then write `output` only if at least one unique row exists.
pub fn merge_unique_rows(inputs: &[PathBuf], key: &str, output: &Path) -> Result<MergeSummary> {
    let table = merge_tables(inputs, key)?;
    let written = if table.rows.is_empty() {
        false
    } else {
        write_table(&table, output)?;
        true
    };
    Ok(MergeSummary {
        rows_processed: table.rows_processed,
        unique_rows: table.rows.len(),
        written,
    })
}

pub fn merge_tables(inputs: &[PathBuf], key: &str) -> Result<MergedTable> {
    // Fail before reading anything if an input is absent.
    if let Some(missing) = inputs.iter().find(|p| !p.exists()) {
        return Err(Error::MissingFile {
            path: missing.clone(),
        });
    }

    info!(key, files = inputs.len(), "starting merge");
    let mut table = MergedTable::default();
    let mut seen: HashSet<String> = HashSet::new();

    for path in inputs {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let file_header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if file_header.is_empty() {
            warn!(path = %path.display(), "empty file or missing header, skipping");
            continue;
        }
        if table.header.is_empty() {
            table.header = file_header.clone();
        }

        let key_idx = file_header
            .iter()
            .position(|h| h == key)
            .ok_or_else(|| Error::MissingColumn {
                column: key.to_string(),
                path: path.clone(),
            })?;

        // Output column -> column index in this file.
        let projection: Vec<Option<usize>> = table
            .header
            .iter()
            .map(|col| file_header.iter().position(|h| h == col))
            .collect();

        let mut added = 0;
        for record in reader.records() {
            let record = record?;
            table.rows_processed += 1;

            let key_value = record.get(key_idx).unwrap_or_default();
            if key_value.is_empty() || !seen.insert(key_value.to_string()) {
                continue;
            }
            table.rows.push(
                projection
                    .iter()
                    .map(|idx| idx.and_then(|i| record.get(i)).unwrap_or_default().to_string())
                    .collect(),
            );
            added += 1;
        }
        info!(path = %path.display(), added, "file merged");
    }

    Ok(table)
}

pub fn write_table(table: &MergedTable, output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn jobs_csv(links: impl Iterator<Item = usize>) -> String {
        let mut body = String::from("Company,Role,Date Posted,Location,Link\n");
        for i in links {
            body.push_str(&format!("Co{i},SWE,2025-01-0{},NYC,https://jobs.dev/{i}\n", i % 9 + 1));
        }
        body
    }

    #[test]
    fn overlapping_links_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", &jobs_csv(0..10));
        let b = write(dir.path(), "b.csv", &jobs_csv(7..17));
        let out = dir.path().join("merged.csv");

        let summary = merge_unique_rows(&[a, b], DEFAULT_KEY, &out).unwrap();
        assert_eq!(summary.rows_processed, 20);
        assert_eq!(summary.unique_rows, 17);
        assert!(summary.written);

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 18);
        assert!(text.starts_with("Company,Role,Date Posted,Location,Link\n"));
    }

    #[test]
    fn first_occurrence_wins() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "Company,Link\nFirst,https://x.dev/1\n");
        let b = write(dir.path(), "b.csv", "Company,Link\nSecond,https://x.dev/1\nThird,https://x.dev/2\n");
        let table = merge_tables(&[a, b], "Link").unwrap();
        assert_eq!(
            table.rows,
            vec![
                vec!["First".to_string(), "https://x.dev/1".to_string()],
                vec!["Third".to_string(), "https://x.dev/2".to_string()],
            ]
        );
    }

    #[test]
    fn empty_keys_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "Company,Link\nA,\nB,https://x.dev/b\n");
        let b = write(dir.path(), "b.csv", "Company,Link\nC,\n");
        let table = merge_tables(&[a, b], "Link").unwrap();
        assert_eq!(table.rows_processed, 3);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn custom_key_column() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "Company,Role,Link\nAcme,SWE,https://a/1\n");
        let b = write(dir.path(), "b.csv", "Company,Role,Link\nAcme,SWE,https://a/2\n");
        let table = merge_tables(&[a, b], "Company").unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn second_file_projected_by_column_name() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "Company,Role,Link\nA,SWE,https://x/1\n");
        let b = write(dir.path(), "b.csv", "Link,Company\nhttps://x/2,B\n");
        let table = merge_tables(&[a, b], "Link").unwrap();
        assert_eq!(
            table.rows[1],
            vec!["B".to_string(), String::new(), "https://x/2".to_string()]
        );
    }

    #[test]
    fn missing_file_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", &jobs_csv(0..3));
        let out = dir.path().join("merged.csv");
        let err = merge_unique_rows(&[a, dir.path().join("nope.csv")], "Link", &out).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn missing_key_column_is_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", &jobs_csv(0..3));
        let b = write(dir.path(), "b.csv", "Company,URL\nA,https://x/1\n");
        let out = dir.path().join("merged.csv");
        let err = merge_unique_rows(&[a, b], "Link", &out).unwrap_err();
        match err {
            Error::MissingColumn { column, path } => {
                assert_eq!(column, "Link");
                assert!(path.ends_with("b.csv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn empty_file_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "");
        let b = write(dir.path(), "b.csv", &jobs_csv(0..2));
        let table = merge_tables(&[a, b], "Link").unwrap();
        assert_eq!(table.header.len(), 5);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn nothing_written_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "Company,Link\n");
        let b = write(dir.path(), "b.csv", "Company,Link\n");
        let out = dir.path().join("merged.csv");
        let summary = merge_unique_rows(&[a, b], "Link", &out).unwrap();
        assert!(!summary.written);
        assert!(!out.exists());
    }

    #[test]
    fn remerging_output_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", &jobs_csv(0..10));
        let b = write(dir.path(), "b.csv", &jobs_csv(5..15));
        let first = dir.path().join("first.csv");
        merge_unique_rows(&[a, b.clone()], "Link", &first).unwrap();

        let second = dir.path().join("second.csv");
        let summary = merge_unique_rows(&[first.clone(), b], "Link", &second).unwrap();
        assert_eq!(summary.unique_rows, 15);
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }
}
