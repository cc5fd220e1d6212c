//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use rescale_core::config::{ConstantColumnMode, NormalizerConfig};
use rescale_core::normalizer::{RunReport, collect_stats, normalize_file};
use rescale_core::numeric::format_numeric;

use crate::cli::{ConstantColumnArg, InspectArgs, NormalizeArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunReport> {
    let delimiter = delimiter_byte(&args.delimiter)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let config = NormalizerConfig::new(&args.input, &output)
        .with_delimiter(delimiter)
        .with_excluded_column(&args.exclude)
        .with_constant_columns(match args.constant_columns {
            ConstantColumnArg::Error => ConstantColumnMode::Error,
            ConstantColumnArg::Zero => ConstantColumnMode::Zero,
        });
    let report = normalize_file(&config)
        .with_context(|| format!("normalize {}", args.input.display()))?;
    info!(
        input = %report.input.display(),
        output = %report.output.display(),
        rows = report.rows,
        "normalization complete"
    );
    Ok(report)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let delimiter = delimiter_byte(&args.delimiter)?;
    let stats = collect_stats(&args.input, delimiter)
        .with_context(|| format!("inspect {}", args.input.display()))?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);
    for (name, column) in stats.iter() {
        table.add_row(vec![
            name.to_string(),
            format_numeric(column.min),
            format_numeric(column.max),
            format_numeric(column.range()),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Default output path next to the input: `wine.csv` -> `wine-normalized.csv`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    let name = match input.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{stem}-normalized.{ext}"),
        None => format!("{stem}-normalized"),
    };
    input.with_file_name(name)
}

fn delimiter_byte(raw: &str) -> Result<u8> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => bail!("delimiter must be a single ASCII character, got '{raw}'"),
    }
}
