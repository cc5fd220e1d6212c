//! Streaming reader for delimited files with a single header row.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecordsIntoIter};

use crate::error::{IngestError, Result};

/// One data record together with its 1-based row number.
///
/// Row numbers count data rows only; the header is row zero and is never
/// handed out as a `DataRow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub number: usize,
    pub cells: Vec<String>,
}

/// Streaming reader over a delimited file.
///
/// The file is opened on construction and released when the reader is
/// dropped, so each pass over the input gets its own scoped handle.
/// Records are yielded in file order via the `Iterator` impl.
pub struct DelimitedReader {
    path: PathBuf,
    headers: Vec<String>,
    records: StringRecordsIntoIter<File>,
    row: usize,
}

impl DelimitedReader {
    /// Open `path` and read its header row.
    pub fn open(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                IngestError::FileNotFound { path: path.clone() }
            } else {
                IngestError::FileRead {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(file);
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| IngestError::CsvParse {
                path: path.clone(),
                message: e.to_string(),
            })?
            .iter()
            .map(normalize_header)
            .collect();
        if headers.is_empty() {
            return Err(IngestError::EmptyCsv { path });
        }
        if headers.iter().all(String::is_empty) {
            return Err(IngestError::NoHeaderDetected { path });
        }
        tracing::debug!(path = %path.display(), columns = headers.len(), "opened delimited file");
        Ok(Self {
            path,
            headers,
            records: reader.into_records(),
            row: 0,
        })
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for DelimitedReader {
    type Item = Result<DataRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                return Some(Err(IngestError::CsvParse {
                    path: self.path.clone(),
                    message: e.to_string(),
                }));
            }
        };
        self.row += 1;
        let cells = record.iter().map(normalize_cell).collect();
        Some(Ok(DataRow {
            number: self.row,
            cells,
        }))
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}
