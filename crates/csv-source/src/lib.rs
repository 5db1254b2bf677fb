//! Roster spreadsheet reader.
//!
//! Loads the CSV export of the team roster into [`RosterRow`]s, preserving
//! file order. The first line is the column header and is returned separately
//! from the data rows; nothing about its content is checked.
//!
//! Rows may have any number of cells. The reader never validates the column
//! layout beyond what [`RosterRow`] exposes.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use roster::RosterRow;
use thiserror::Error;
use tracing::debug;

/// Failure to load the roster file.
#[derive(Debug, Error)]
pub enum CsvSourceError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read (I/O failure mid-file or invalid UTF-8).
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Contents of a roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterTable {
    /// The first line, if the file had one.
    pub header: Option<RosterRow>,
    /// Every following line, in file order.
    pub rows: Vec<RosterRow>,
}

/// Reads every line of the CSV file at `path`.
pub fn read_table(path: impl AsRef<Path>) -> Result<RosterTable, CsvSourceError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| CsvSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CsvSourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().collect::<RosterRow>());
    }

    let mut records = records.into_iter();
    let table = RosterTable {
        header: records.next(),
        rows: records.collect(),
    };
    debug!(path = %path.display(), rows = table.rows.len(), "Read roster file");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn cells(row: &RosterRow) -> Vec<&str> {
        row.cells().iter().map(String::as_str).collect()
    }

    #[test]
    fn header_is_split_from_data_rows() {
        let file = csv_file(b"TeamNr,M1,M2,M3,M4\n1,alice,bob,,\n2,carol,,,");
        let table = read_table(file.path()).unwrap();

        assert_eq!(
            cells(table.header.as_ref().unwrap()),
            ["TeamNr", "M1", "M2", "M3", "M4"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(cells(&table.rows[0]), ["1", "alice", "bob", "", ""]);
        assert_eq!(cells(&table.rows[1]), ["2", "carol", "", "", ""]);
    }

    #[test]
    fn ragged_rows_are_kept_as_is() {
        let file = csv_file(b"TeamNr,M1\n1,alice,bob,carol,dave,erin\n2\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.rows[0].cells().len(), 6);
        assert_eq!(cells(&table.rows[1]), ["2"]);
    }

    #[test]
    fn quoted_cells_are_unescaped() {
        let file = csv_file(b"h\n\"7\",\"a,b\"\r\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(cells(&table.rows[0]), ["7", "a,b"]);
    }

    #[test]
    fn empty_file_has_no_header_or_rows() {
        let file = csv_file(b"");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table, RosterTable::default());
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table(dir.path().join("groups.csv")).unwrap_err();

        assert!(matches!(err, CsvSourceError::Open { .. }));
        assert!(err.to_string().contains("groups.csv"));
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let file = csv_file(b"h\n1,\xff\xfe\n");
        let err = read_table(file.path()).unwrap_err();

        assert!(matches!(err, CsvSourceError::Parse { .. }));
    }
}
