//! Two-pass min-max normalization over a delimited dataset.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span};

use rescale_ingest::{DelimitedReader, DelimitedWriter};

use crate::config::{ConstantColumnMode, NormalizerConfig};
use crate::error::{NormalizeError, Result};
use crate::numeric::{format_numeric, parse_f64};
use crate::stats::StatsTable;

/// Outcome of a completed normalization run.
#[derive(Debug)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Data rows written (preamble rows not counted).
    pub rows: usize,
    pub excluded_column: String,
    pub columns: Vec<ColumnReport>,
}

/// Per-column entry of a [`RunReport`].
#[derive(Debug)]
pub struct ColumnReport {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub excluded: bool,
    pub constant: bool,
}

/// Pass 1: read the whole input once and collect per-column min/max.
///
/// Statistics cover every column, the excluded one included; exclusion
/// only affects pass 2. An input with a header but no data rows is an
/// error, since the stats table would still hold its sentinels.
pub fn collect_stats(path: &Path, delimiter: u8) -> Result<StatsTable> {
    let span = info_span!("stats", input = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let reader = DelimitedReader::open(path, delimiter)?;
    let mut table = StatsTable::new(reader.headers().to_vec());
    let mut rows = 0usize;
    for row in reader {
        let row = row?;
        for (idx, cell) in row.cells.iter().enumerate() {
            let value = parse_cell(cell, table.header(idx), row.number)?;
            table.observe(idx, value);
        }
        rows += 1;
    }
    if rows == 0 {
        return Err(NormalizeError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    info!(
        rows,
        columns = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "statistics pass complete"
    );
    Ok(table)
}

/// Run the full transform: collect statistics, then rewrite the dataset.
///
/// The output starts with the header, a min row and a max row, followed
/// by one rescaled row per input data row. The excluded column is copied
/// through as the original cell text.
pub fn normalize_file(config: &NormalizerConfig) -> Result<RunReport> {
    let stats = collect_stats(&config.input, config.delimiter)?;
    let excluded = stats.index_of(&config.excluded_column).ok_or_else(|| {
        NormalizeError::ExcludedColumnNotFound {
            column: config.excluded_column.clone(),
            path: config.input.clone(),
        }
    })?;

    if config.constant_columns == ConstantColumnMode::Error {
        for (idx, (name, column)) in stats.iter().enumerate() {
            if idx != excluded && column.is_constant() {
                return Err(NormalizeError::ConstantColumn {
                    column: name.to_string(),
                    value: column.min,
                });
            }
        }
    }

    let span = info_span!("rewrite", output = %config.output.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Fresh handle for the second pass over the input.
    let reader = DelimitedReader::open(&config.input, config.delimiter)?;
    let mut writer = DelimitedWriter::create(&config.output, config.delimiter)?;

    writer.write_record(stats.headers())?;
    let min_row: Vec<String> = stats.min_row().iter().map(|v| format_numeric(*v)).collect();
    writer.write_record(&min_row)?;
    let max_row: Vec<String> = stats.max_row().iter().map(|v| format_numeric(*v)).collect();
    writer.write_record(&max_row)?;

    let mut rows = 0usize;
    let mut out: Vec<String> = Vec::with_capacity(stats.len());
    for row in reader {
        let row = row?;
        out.clear();
        for (idx, cell) in row.cells.iter().enumerate() {
            let value = parse_cell(cell, stats.header(idx), row.number)?;
            if idx == excluded {
                out.push(cell.clone());
            } else {
                let column = stats.column(idx);
                let rescaled = if column.is_constant() {
                    // ConstantColumnMode::Zero; Error already bailed above.
                    0.0
                } else {
                    column.normalize(value)
                };
                out.push(format_numeric(rescaled));
            }
        }
        writer.write_record(&out)?;
        rows += 1;
    }
    writer.finish()?;
    info!(
        rows,
        duration_ms = start.elapsed().as_millis(),
        "normalization pass complete"
    );

    let columns = stats
        .iter()
        .enumerate()
        .map(|(idx, (name, column))| ColumnReport {
            name: name.to_string(),
            min: column.min,
            max: column.max,
            excluded: idx == excluded,
            constant: column.is_constant(),
        })
        .collect();
    Ok(RunReport {
        input: config.input.clone(),
        output: config.output.clone(),
        rows,
        excluded_column: config.excluded_column.clone(),
        columns,
    })
}

fn parse_cell(cell: &str, column: &str, row: usize) -> Result<f64> {
    parse_f64(cell).ok_or_else(|| NormalizeError::Parse {
        column: column.to_string(),
        row,
        value: cell.to_string(),
    })
}
