//! Min-max normalization of delimited numeric datasets.
//!
//! The pipeline makes two passes over the input: the first collects
//! per-column minimum and maximum values, the second rewrites every row
//! with values rescaled into `[0, 1]` and records the collected min/max
//! ahead of the data so the output can be denormalized later. One
//! designated label column is passed through untouched.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod numeric;
pub mod stats;

pub use config::{ConstantColumnMode, NormalizerConfig};
pub use error::{NormalizeError, Result};
pub use normalizer::{ColumnReport, RunReport, collect_stats, normalize_file};
pub use stats::{ColumnStats, StatsTable};
