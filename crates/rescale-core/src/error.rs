//! Error types for the normalization pipeline.

use std::path::PathBuf;
use thiserror::Error;

use rescale_ingest::IngestError;

/// Errors that can occur during a normalization run. All are fatal;
/// there is no partial-success mode.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// File-level I/O or parsing failure.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A cell could not be parsed as a number.
    #[error("cannot parse '{value}' as a number in column '{column}', row {row}")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },

    /// A non-excluded column has zero range.
    #[error("column '{column}' has zero range (every value is {value})")]
    ConstantColumn { column: String, value: f64 },

    /// The configured excluded column is not in the header.
    #[error("excluded column '{column}' not found in header of {path}")]
    ExcludedColumnNotFound { column: String, path: PathBuf },

    /// The input has a header but no data rows.
    #[error("no data rows in {path}")]
    EmptyInput { path: PathBuf },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
