use std::fs;
use std::path::Path;

use anyhow::bail;
use tracing::{info, warn};

use crate::error::{CleanError, Result};
use crate::pipeline::encoding;

/// A parsed but untyped CSV file: header labels plus rows of string cells,
/// exactly as decoded. No type inference, empty strings preserved.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// True when the file parsed but produced zero data rows. The
    /// orchestrator skips such files with a warning instead of erroring.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a CSV file, trying each candidate encoding in order until one both
/// decodes without replacement errors and parses as CSV. The first success
/// stops the chain.
///
/// Candidate order is [detector guess, utf-8, latin1, cp1252], deduplicated.
/// If every candidate fails the file is unreadable.
pub fn read(path: &Path) -> Result<RawTable> {
    let bytes = fs::read(path)?;
    let guess = encoding::resolve(&bytes);

    for candidate in encoding::candidate_encodings(&guess) {
        info!(
            "reader: attempting {} with encoding {}",
            path.display(),
            candidate.name()
        );

        let (text, _, had_errors) = candidate.decode(&bytes);
        if had_errors {
            warn!(
                "reader: {} failed to decode {}, trying next encoding",
                candidate.name(),
                path.display()
            );
            continue;
        }

        match parse_csv(&text) {
            Ok(table) => {
                info!(
                    "reader: successfully read {} with {}",
                    path.display(),
                    candidate.name()
                );
                return Ok(table);
            }
            Err(e) => {
                warn!(
                    "reader: CSV parse failed for {} with {}: {}",
                    path.display(),
                    candidate.name(),
                    e
                );
                continue;
            }
        }
    }

    Err(CleanError::UnreadableFile {
        path: path.to_path_buf(),
    })
}

/// Parse decoded text as CSV with all cells read as raw strings.
///
/// Rows shorter than the header are padded with empty cells; a row with
/// more fields than the header means the file is malformed (typically
/// truncation or an unquoted delimiter) and fails the parse.
fn parse_csv(text: &str) -> anyhow::Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        bail!("no columns to parse");
    }

    let mut rows = Vec::new();
    for (row_no, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            bail!(
                "row {} has {} fields, header has {}",
                row_no + 1,
                record.len(),
                headers.len()
            );
        }
        let mut row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_plain_utf8() {
        let file = write_temp(b"Material,Quantity\nABC-1,5\n");
        let table = read(file.path()).unwrap();
        assert_eq!(table.headers, vec!["Material", "Quantity"]);
        assert_eq!(table.rows, vec![vec!["ABC-1".to_string(), "5".to_string()]]);
    }

    #[test]
    fn falls_back_past_a_wrong_guess() {
        // 0xE9 is 'é' in windows-1252 but an invalid UTF-8 sequence here, so
        // whatever the detector guesses the fallback chain must land on a
        // single-byte decoder that reads it.
        let file = write_temp(b"Material,Carrier\nA,Soci\xe9t\xe9\n");
        let table = read(file.path()).unwrap();
        assert_eq!(table.rows[0][1], "Société");
    }

    #[test]
    fn empty_file_is_flagged_not_an_error() {
        let file = write_temp(b"Material,Quantity\n");
        let table = read(file.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn short_rows_are_padded() {
        let file = write_temp(b"Material,Quantity,Carrier\nA,1\n");
        let table = read(file.path()).unwrap();
        assert_eq!(
            table.rows,
            vec![vec!["A".to_string(), "1".to_string(), String::new()]]
        );
    }

    #[test]
    fn overlong_rows_make_the_file_unreadable() {
        let file = write_temp(b"Material,Quantity\nA,1,stray,fields\n");
        let err = read(file.path()).unwrap_err();
        assert!(matches!(err, CleanError::UnreadableFile { .. }));
    }

    #[test]
    fn zero_byte_file_is_unreadable() {
        let file = write_temp(b"");
        let err = read(file.path()).unwrap_err();
        assert!(matches!(err, CleanError::UnreadableFile { .. }));
    }
}
