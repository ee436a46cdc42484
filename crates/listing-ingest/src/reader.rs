//! Raw CSV record reading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A data record with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line: u64,
    pub cells: Vec<String>,
}

impl RawRecord {
    /// Cell at `index`, or an empty string when the record is short.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads every record after the header row.
///
/// Records whose cells are all blank are skipped. Record lengths may vary;
/// arity is checked by the typed loaders.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quote(b'"')
        .delimiter(b',')
        .from_path(path)
        .map_err(|e| IngestError::from_csv(path, e))?;
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path, e))?;
        let line = record.position().map(csv::Position::line).unwrap_or(0);
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            skipped += 1;
            continue;
        }
        records.push(RawRecord { line, cells });
    }
    debug!(
        path = %path.display(),
        records = records.len(),
        blank_rows = skipped,
        "read csv records"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_header_is_discarded() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cells, vec!["1", "2", "3"]);
        assert_eq!(records[0].line, 2);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let file = create_temp_csv("A,B\n\"BEST PRACTICE, Cardiology\",x\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records[0].cell(0), "BEST PRACTICE, Cardiology");
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let file = create_temp_csv("A,B\n1,2\n,\n3,4\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].cells, vec!["3", "4"]);
    }

    #[test]
    fn test_bom_and_whitespace_are_trimmed() {
        let file = create_temp_csv("\u{feff}A,B\n  x , y\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records[0].cells, vec!["x", "y"]);
    }

    #[test]
    fn test_short_records_are_kept() {
        let file = create_temp_csv("A,B,C\n1\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records[0].cells.len(), 1);
        assert_eq!(records[0].cell(2), "");
    }

    #[test]
    fn test_missing_file() {
        let result = read_records(Path::new("/definitely/not/here.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
