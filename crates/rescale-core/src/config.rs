//! Normalizer configuration.

use std::path::{Path, PathBuf};

/// Default field delimiter for input and output files.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Default label column passed through without rescaling.
pub const DEFAULT_EXCLUDED_COLUMN: &str = "quality";

/// How to handle a column whose observed minimum equals its maximum.
///
/// The normalization formula divides by the column range, so a constant
/// column needs an explicit decision instead of a silent NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConstantColumnMode {
    /// Abort before writing any output, naming the offending column.
    #[default]
    Error,
    /// Emit `0` for every value of the column by convention.
    Zero,
}

/// Configuration for a single normalization run.
///
/// One value per run, passed into the pipeline explicitly; nothing is
/// persisted across runs.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Input dataset path.
    pub input: PathBuf,
    /// Output dataset path.
    pub output: PathBuf,
    /// Field delimiter shared by input and output.
    pub delimiter: u8,
    /// Column copied through without rescaling.
    pub excluded_column: String,
    /// Zero-range column policy.
    pub constant_columns: ConstantColumnMode,
}

impl NormalizerConfig {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            delimiter: DEFAULT_DELIMITER,
            excluded_column: DEFAULT_EXCLUDED_COLUMN.to_string(),
            constant_columns: ConstantColumnMode::default(),
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_excluded_column(mut self, column: impl Into<String>) -> Self {
        self.excluded_column = column.into();
        self
    }

    #[must_use]
    pub fn with_constant_columns(mut self, mode: ConstantColumnMode) -> Self {
        self.constant_columns = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NormalizerConfig::new("in.csv", "out.csv");
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.excluded_column, "quality");
        assert_eq!(config.constant_columns, ConstantColumnMode::Error);
    }

    #[test]
    fn test_builders() {
        let config = NormalizerConfig::new("in.csv", "out.csv")
            .with_delimiter(b',')
            .with_excluded_column("label")
            .with_constant_columns(ConstantColumnMode::Zero);
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.excluded_column, "label");
        assert_eq!(config.constant_columns, ConstantColumnMode::Zero);
    }
}
