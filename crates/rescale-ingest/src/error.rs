//! Error types for delimited dataset I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing delimited files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a delimited record.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to encode a delimited record.
    #[error("failed to write record to {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// File has no content at all.
    #[error("file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// First line does not contain usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/wine.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /data/wine.csv");
    }
}
