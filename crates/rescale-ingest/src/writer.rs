//! Writer for delimited output files.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{IngestError, Result};

/// Writer producing delimited records with no field quoting.
pub struct DelimitedWriter {
    path: PathBuf,
    inner: csv::Writer<File>,
}

impl DelimitedWriter {
    /// Create (or truncate) the output file at `path`.
    pub fn create(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| IngestError::FileWrite {
            path: path.clone(),
            source: e,
        })?;
        let inner = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Never)
            .from_writer(file);
        Ok(Self { path, inner })
    }

    /// Write one record in field order.
    pub fn write_record<I, T>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner
            .write_record(record)
            .map_err(|e| IngestError::CsvWrite {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }

    /// Flush buffered records to disk.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().map_err(|e| IngestError::FileWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_unquoted_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut writer = DelimitedWriter::create(&path, b';').unwrap();
        writer.write_record(["a", "b", "c"]).unwrap();
        writer.write_record(["0.5", "1", "7"]).unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a;b;c\n0.5;1;7\n");
    }

    #[test]
    fn test_unwritable_path() {
        let result = DelimitedWriter::create("/no/such/dir/out.csv", b';');
        assert!(matches!(result, Err(IngestError::FileWrite { .. })));
    }
}
